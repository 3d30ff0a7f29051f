//! CharacterFilter - Field filter for single-character lookups

use serde::{Deserialize, Serialize};

use super::UserId;

/// Field filter for `find_one` lookups.
///
/// All set fields must match. Blank values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFilter {
    pub user: Option<UserId>,
    /// Matches `basics.name` exactly
    pub name: Option<String>,
}

impl CharacterFilter {
    pub fn new(user: Option<String>, name: Option<String>) -> Self {
        Self {
            user: non_blank(user).map(UserId),
            name: non_blank(name),
        }
    }

    pub fn by_user(user: impl Into<String>) -> Self {
        Self::new(Some(user.into()), None)
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.name.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Renders as a query string, e.g. `user=U1&name=Aria`
impl std::fmt::Display for CharacterFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(user) = &self.user {
            parts.push(format!("user={user}"));
        }
        if let Some(name) = &self.name {
            parts.push(format!("name={name}"));
        }
        f.write_str(&parts.join("&"))
    }
}

//! Character - Persisted character document
//!
//! Characters are schemaless documents: beyond `_id`, `basics.name` and
//! `user`, any fields supplied at creation are kept verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::envelope::{ErrorCode, ErrorDescriptor};
use crate::domain::value_objects::{CharacterId, UserId};

/// Top-level keys the store owns; never taken from client input
pub const RESERVED_FIELDS: &[&str] = &["_id", "created_at"];

/// `basics` sub-document. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBasics {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CharacterBasics {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Character - stored document with its store-assigned identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: CharacterId,
    pub basics: CharacterBasics,
    pub user: UserId,
    pub created_at: DateTime<Utc>,
    /// Any other top-level document fields
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Character {
    /// Materialize a stored character from creation data
    pub fn from_new(new: NewCharacter, id: CharacterId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            basics: new.basics,
            user: new.user,
            created_at,
            attributes: new.attributes,
        }
    }
}

/// Character data proposed for creation (no identity yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub basics: CharacterBasics,
    pub user: UserId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            basics: CharacterBasics::named(name),
            user: UserId::new(user),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Drop store-owned keys a client may have smuggled into the payload
    pub fn sanitized(mut self) -> Self {
        for key in RESERVED_FIELDS {
            self.attributes.remove(*key);
        }
        self
    }

    /// Field-level problems that make this data unfit for insertion
    pub fn field_errors(&self) -> Vec<ErrorDescriptor> {
        let mut errors = Vec::new();
        if self.basics.name.trim().is_empty() {
            errors.push(ErrorDescriptor::new(
                ErrorCode::InvalidField,
                "basics.name must not be blank",
            ));
        }
        if self.user.is_blank() {
            errors.push(ErrorDescriptor::new(
                ErrorCode::InvalidField,
                "user must not be blank",
            ));
        }
        errors
    }
}

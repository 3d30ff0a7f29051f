//! User Directory Port
//!
//! Lookup of the users that own characters.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, UserId};

/// Read-only access to known users
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether `user` names a recognized user
    async fn exists(&self, user: &UserId) -> Result<bool, DomainError>;

    /// Check an email/password pair, returning the matching user on success
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<UserId>, DomainError>;
}

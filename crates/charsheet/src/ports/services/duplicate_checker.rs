//! Duplicate Checker Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewCharacter};

/// Detects characters equivalent to one about to be created.
///
/// Must be consulted before `CharacterRepository::insert`.
#[async_trait]
pub trait DuplicateChecker: Send + Sync {
    async fn is_duplicate(&self, character: &NewCharacter) -> Result<bool, DomainError>;
}

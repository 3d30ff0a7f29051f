//! Character Repository Port
//!
//! Abstract interface for Character persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Character, CharacterFilter, CharacterId, NewCharacter};

/// Repository interface for Character documents
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find a Character by ID. Absent ids yield `Ok(None)`.
    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, DomainError>;

    /// Find the first Character matching every set field of `filter`.
    ///
    /// When several match, the most recently created one wins.
    async fn find_one(&self, filter: &CharacterFilter) -> Result<Option<Character>, DomainError>;

    /// Insert a new Character; the store assigns `_id` and `created_at`
    async fn insert(&self, character: &NewCharacter) -> Result<Character, DomainError>;
}

//! Character Application Service (Use Case)
//!
//! Runs each character endpoint as a single pass with early exits and folds
//! every business outcome into a `CharacterEnvelope`. Only infrastructure
//! failures escape as `Err`.

use std::sync::Arc;

use charsheet::{
    CharacterEnvelope, CharacterFilter, CharacterId, CharacterRepository, DomainError,
    DuplicateChecker, Envelope, Lookup, NewCharacter, UserDirectory,
};

/// Application service for Character operations
pub struct CharacterService {
    repo: Arc<dyn CharacterRepository>,
    users: Arc<dyn UserDirectory>,
    duplicates: Arc<dyn DuplicateChecker>,
}

impl CharacterService {
    pub fn new(
        repo: Arc<dyn CharacterRepository>,
        users: Arc<dyn UserDirectory>,
        duplicates: Arc<dyn DuplicateChecker>,
    ) -> Self {
        Self {
            repo,
            users,
            duplicates,
        }
    }

    /// Look up by raw path id. `None` when the id is not a UUID at all.
    ///
    /// Messages echo `raw` exactly as sent, even when the UUID parser
    /// accepted a non-canonical spelling of it.
    pub async fn get_by_raw_id(&self, raw: &str) -> Result<Option<CharacterEnvelope>, DomainError> {
        let Ok(id) = raw.parse::<CharacterId>() else {
            return Ok(None);
        };

        let found = self.repo.find_by_id(id).await?;
        Ok(Some(Envelope::lookup(&Lookup::Id(raw.to_string()), found)))
    }

    pub async fn find_one(&self, filter: CharacterFilter) -> Result<CharacterEnvelope, DomainError> {
        if filter.is_empty() {
            return Ok(Envelope::empty_filter());
        }

        let found = self.repo.find_one(&filter).await?;
        Ok(Envelope::lookup(&Lookup::Query(filter), found))
    }

    /// Validate, check ownership and duplicates, then insert
    pub async fn create(&self, character: NewCharacter) -> Result<CharacterEnvelope, DomainError> {
        let character = character.sanitized();

        let field_errors = character.field_errors();
        if !field_errors.is_empty() {
            tracing::warn!("Rejected character with invalid fields: {:?}", field_errors);
            return Ok(Envelope::invalid_fields(field_errors));
        }

        if !self.users.exists(&character.user).await? {
            tracing::warn!("Rejected character for unknown user {}", character.user);
            return Ok(Envelope::unknown_user(&character.user));
        }

        if self.duplicates.is_duplicate(&character).await? {
            tracing::warn!(
                "Rejected duplicate character '{}' for user {}",
                character.basics.name,
                character.user
            );
            return Ok(Envelope::duplicate(&character));
        }

        // The store enforces the same rule; a concurrent create can still lose here
        let created = match self.repo.insert(&character).await {
            Ok(created) => created,
            Err(DomainError::Conflict(constraint)) => {
                tracing::warn!(
                    "Store rejected duplicate character '{}' for user {} ({})",
                    character.basics.name,
                    character.user,
                    constraint
                );
                return Ok(Envelope::duplicate(&character));
            }
            Err(e) => return Err(e),
        };
        tracing::info!(
            "Created character: {} ({}) for user {}",
            created.basics.name,
            created.id,
            created.user
        );

        Ok(Envelope::created(created))
    }
}

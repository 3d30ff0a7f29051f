//! PostgreSQL implementation of DuplicateChecker
//!
//! A character is a duplicate when its owner already has one with the same
//! name, ignoring case and surrounding whitespace.

use async_trait::async_trait;
use sqlx::PgPool;

use charsheet::{DomainError, DuplicateChecker, NewCharacter};

pub struct PgDuplicateChecker {
    pool: PgPool,
}

impl PgDuplicateChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DuplicateChecker for PgDuplicateChecker {
    async fn is_duplicate(&self, character: &NewCharacter) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM characters
                WHERE user_id = $1
                  AND lower(btrim(basics->>'name')) = lower(btrim($2))
            )
            "#,
        )
        .bind(character.user.as_str())
        .bind(&character.basics.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))
    }
}

//! PostgreSQL implementation of UserDirectory

use argon2::{Argon2, PasswordVerifier};
use async_trait::async_trait;
use password_hash::PasswordHash;
use sqlx::PgPool;

use charsheet::{DomainError, UserDirectory, UserId};

pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: String,
    password_hash: String,
}

/// Check `password` against a stored PHC string; unparseable hashes never match
fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn exists(&self, user: &UserId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserId>, DomainError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, password_hash FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Argon2 verification blocks; run it off the async workers
        let password = password.to_string();
        let CredentialRow { id, password_hash } = row;
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password_hash, &password))
                .await
                .map_err(|e| DomainError::Repository(format!("Password check aborted: {e}")))?;

        Ok(verified.then(|| UserId(id)))
    }
}

//! Identity Verifier Port

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Decides whether a bearer credential is currently valid.
///
/// `Ok(false)` means the credential was checked and rejected; `Err` means
/// the verifier itself could not answer.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn validate(&self, token: &str) -> Result<bool, DomainError>;
}

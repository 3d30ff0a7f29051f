//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
///
/// Business outcomes (not found, duplicate, unknown owner) are not errors;
/// they are folded into an [`Envelope`](crate::Envelope). `Conflict` is the
/// store's own duplicate signal and gets folded the same way; the other
/// variants become transport errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The store refused a write that would break a uniqueness rule
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

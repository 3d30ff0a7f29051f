//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod token;

// Re-exports
pub use postgres::{PgCharacterRepository, PgDuplicateChecker, PgUserDirectory};
pub use token::{HmacTokenService, IssuedToken};

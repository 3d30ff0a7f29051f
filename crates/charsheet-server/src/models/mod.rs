//! Charsheet API Models
//!
//! Request/response DTOs. Domain types live in the `charsheet` crate.
//! - Character: creation payload and lookup query
//! - Auth: credential exchange

mod auth;
mod character;

pub use auth::*;
pub use character::*;

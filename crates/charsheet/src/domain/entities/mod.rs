//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: Persisted character document owned by a user
//! - NewCharacter: Character data proposed for creation

mod character;

pub use character::*;

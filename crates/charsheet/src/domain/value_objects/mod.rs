//! Value Objects
//!
//! Immutable types that represent domain concepts without identity.

mod character_filter;
mod character_id;
mod user_id;

pub use character_filter::*;
pub use character_id::*;
pub use user_id::*;

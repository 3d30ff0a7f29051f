//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, the response envelope, and errors.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use envelope::*;
pub use errors::*;
pub use value_objects::*;

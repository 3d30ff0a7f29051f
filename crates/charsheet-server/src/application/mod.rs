//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod auth_service;
mod character_service;

pub use auth_service::AuthService;
pub use character_service::CharacterService;

//! Charsheet Domain Library
//!
//! Core domain types and interfaces for the Charsheet character API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Character, NewCharacter)
//!   - `value_objects/`: Immutable value types (CharacterId, UserId, CharacterFilter)
//!   - `envelope`: The `{status, data, message, errors}` response wrapper
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Identity, user directory and duplicate checks
//!
//! # Usage
//!
//! ```rust,ignore
//! use charsheet::domain::{Character, Envelope};
//! use charsheet::ports::{CharacterRepository, IdentityVerifier};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Character, CharacterBasics, CharacterEnvelope, CharacterFilter, CharacterId, DomainError,
    Envelope, EnvelopeStatus, ErrorCode, ErrorDescriptor, Lookup, NewCharacter, UserId,
};
pub use ports::{CharacterRepository, DuplicateChecker, IdentityVerifier, UserDirectory};

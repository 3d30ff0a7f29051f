//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod character_repository;

pub use character_repository::*;

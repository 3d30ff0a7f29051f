//! Service Ports
//!
//! Collaborators the character core consults but does not implement.

mod duplicate_checker;
mod identity;
mod user_directory;

pub use duplicate_checker::*;
pub use identity::*;
pub use user_directory::*;

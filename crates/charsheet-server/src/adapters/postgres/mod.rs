//! PostgreSQL Repository Implementations

mod character_repository;
mod duplicate_checker;
mod user_directory;

pub use character_repository::PgCharacterRepository;
pub use duplicate_checker::PgDuplicateChecker;
pub use user_directory::PgUserDirectory;

//! Application services
//!
//! Use cases for the raid roster. Services depend on port traits, not
//! concrete infrastructure implementations.

pub mod character_search_service;
pub mod migration_service;
pub mod roster_service;
pub mod saved_character_service;

pub use character_search_service::{
    CharacterSearch, LookupTicket, SearchFailure, SearchOutcome, SearchTarget,
};
pub use migration_service::{
    migrate_persisted, LegacyStateMigrator, Migration, MigrationSource, LEGACY_DEFAULT_RAID_NAME,
};
pub use roster_service::RosterService;
pub use saved_character_service::SavedCharacters;

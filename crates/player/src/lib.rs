//! Raidmint client layer.
//!
//! Everything between the pure roster model in `raidmint-domain` and a user
//! interface: the outbound ports, their storage and HTTP adapters, and the
//! application services that load, edit and persist rosters.
//! Platform support is selected at compile time with `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::services::{
    CharacterSearch, LegacyStateMigrator, RosterService, SavedCharacters, SearchOutcome,
    SearchTarget,
};
pub use infrastructure::{init_logging, LostArkClient, LostArkConfig, PlatformStorage};

//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns a new value from every operation instead of mutating in place

pub mod raid;
pub mod raid_collection;

pub use raid::{ParticipantSlot, Raid};
pub use raid_collection::RaidCollection;

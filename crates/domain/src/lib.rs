//! Raid roster domain
//!
//! Pure state for a raid planning companion: validated character profiles,
//! fixed-size raids of orderable participant slots, and the ordered
//! collection of raids. Nothing here performs I/O; every mutation returns a
//! new value and leaves the input untouched.

extern crate self as raidmint_domain;

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use aggregates::{ParticipantSlot, Raid, RaidCollection};
pub use error::RosterError;
pub use ids::{RaidId, SlotId};
pub use value_objects::{
    eligible_raids, find_raid, parse_item_level, raid_catalog, safe_validate, validate,
    CharacterProfile, Decorations, RaidInfo, RaidSize, RaidSizeError, SchemaError, Stat,
    Tendency, ValidationOutcome, PARTY_SIZE,
};

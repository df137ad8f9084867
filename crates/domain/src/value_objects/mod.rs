//! Value objects - Immutable objects defined by their attributes

mod character_profile;
mod raid_catalog;
mod raid_size;

// Externally fetched character data and its validator
pub use character_profile::{
    safe_validate, validate, CharacterProfile, Decorations, SchemaError, Stat, Tendency,
    ValidationOutcome,
};

// Static reference data
pub use raid_catalog::{eligible_raids, find_raid, parse_item_level, raid_catalog, RaidInfo};

pub use raid_size::{RaidSize, RaidSizeError, PARTY_SIZE};

//! Error types for roster edits
//!
//! Every variant describes a rejected edit. A rejected edit never touches the
//! raid it was attempted on: the engine works on `&Raid` and only hands back a
//! new value on success.

use thiserror::Error;

use crate::{RaidId, SlotId};

/// Why a roster edit was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No empty slot is left in the raid
    #[error("Raid is full (max {capacity})")]
    RaidFull { capacity: u8 },

    /// A character with the same name already occupies a slot
    #[error("Character already in raid: {name}")]
    DuplicateOccupant { name: String },

    /// The slot id does not belong to the raid
    #[error("Slot not found: {0}")]
    SlotNotFound(SlotId),

    /// The raid id does not belong to the collection
    #[error("Raid not found: {0}")]
    RaidNotFound(RaidId),
}

impl RosterError {
    pub fn raid_full(capacity: u8) -> Self {
        Self::RaidFull { capacity }
    }

    pub fn duplicate_occupant(name: impl Into<String>) -> Self {
        Self::DuplicateOccupant { name: name.into() }
    }

    pub fn slot_not_found(slot_id: SlotId) -> Self {
        Self::SlotNotFound(slot_id)
    }

    pub fn raid_not_found(raid_id: RaidId) -> Self {
        Self::RaidNotFound(raid_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raid_full_error() {
        let err = RosterError::raid_full(8);
        assert!(matches!(err, RosterError::RaidFull { capacity: 8 }));
        assert_eq!(err.to_string(), "Raid is full (max 8)");
    }

    #[test]
    fn test_duplicate_occupant_error() {
        let err = RosterError::duplicate_occupant("Bardella");
        assert_eq!(err.to_string(), "Character already in raid: Bardella");
    }

    #[test]
    fn test_slot_not_found_error() {
        let slot_id = SlotId::new();
        let err = RosterError::slot_not_found(slot_id);
        assert!(err.to_string().contains(&slot_id.to_string()));
    }
}

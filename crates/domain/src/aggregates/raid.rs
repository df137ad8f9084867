//! Raid aggregate - a fixed-size, orderable array of participant slots
//!
//! # Value Semantics
//!
//! Every operation borrows the raid and hands back a new one. A rejected edit
//! returns an error and the caller keeps the value it already had, so a failed
//! fill or reorder can never leave a half-edited raid behind.
//!
//! # Slot Identity
//!
//! Each slot gets a fresh [`SlotId`] when it is created. The id follows the
//! slot through reorders, occupant changes and serialization, and is what the
//! drag layer refers to. It is never derived from position.

use std::slice::Chunks;

use serde::Serialize;

use crate::error::RosterError;
use crate::value_objects::{CharacterProfile, RaidSize, PARTY_SIZE};
use raidmint_domain::{RaidId, SlotId};

/// One position in a raid, empty or holding a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantSlot {
    id: SlotId,
    character: Option<CharacterProfile>,
}

impl ParticipantSlot {
    /// A new empty slot with a freshly minted id.
    pub fn empty() -> Self {
        Self {
            id: SlotId::new(),
            character: None,
        }
    }

    /// Rebuild a slot from persisted parts.
    pub fn from_parts(id: SlotId, character: Option<CharacterProfile>) -> Self {
        Self { id, character }
    }

    #[inline]
    pub fn id(&self) -> SlotId {
        self.id
    }

    #[inline]
    pub fn occupant(&self) -> Option<&CharacterProfile> {
        self.character.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.character.is_none()
    }

    fn holds(&self, name: &str) -> bool {
        self.character
            .as_ref()
            .is_some_and(|profile| profile.name() == name)
    }
}

/// A raid group with a display name and `size` participant slots.
///
/// # Invariants
///
/// - After any engine operation, `slots().len() == size().slots()`
/// - No two occupants share a character name
///
/// Raids rebuilt with [`Raid::from_parts`] are taken as stored and may break
/// the first invariant until [`Raid::resize`] is applied.
///
/// # Example
///
/// ```
/// use raidmint_domain::{Raid, RaidSize};
///
/// let raid = Raid::create_empty(RaidSize::Eight);
/// assert_eq!(raid.slots().len(), 8);
/// assert!(raid.slots().iter().all(|slot| slot.is_empty()));
///
/// let renamed = raid.rename("Thursday Kazeros");
/// assert_eq!(renamed.name(), "Thursday Kazeros");
/// assert_eq!(raid.name(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raid {
    id: RaidId,
    name: String,
    size: RaidSize,
    participants: Vec<ParticipantSlot>,
}

impl Raid {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A raid of `size` fresh empty slots with an empty name.
    pub fn create_empty(size: RaidSize) -> Self {
        Self {
            id: RaidId::new(),
            name: String::new(),
            size,
            participants: std::iter::repeat_with(ParticipantSlot::empty)
                .take(size.slots())
                .collect(),
        }
    }

    /// Rebuild a raid from persisted parts without reconciling the slot count.
    pub fn from_parts(
        id: RaidId,
        name: impl Into<String>,
        size: RaidSize,
        participants: Vec<ParticipantSlot>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            participants,
        }
    }

    pub(crate) fn with_fresh_id(mut self) -> Self {
        self.id = RaidId::new();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> RaidId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> RaidSize {
        self.size
    }

    #[inline]
    pub fn slots(&self) -> &[ParticipantSlot] {
        &self.participants
    }

    pub fn slot(&self, slot_id: SlotId) -> Option<&ParticipantSlot> {
        self.participants.iter().find(|slot| slot.id == slot_id)
    }

    /// Slots grouped into parties of four, in display order.
    pub fn parties(&self) -> Chunks<'_, ParticipantSlot> {
        self.participants.chunks(PARTY_SIZE)
    }

    pub fn occupied_count(&self) -> usize {
        self.participants.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn contains_character(&self, name: &str) -> bool {
        self.participants.iter().any(|slot| slot.holds(name))
    }

    pub fn is_full(&self) -> bool {
        !self.participants.iter().any(ParticipantSlot::is_empty)
    }

    /// Whether the slot count matches the capacity.
    pub fn is_consistent(&self) -> bool {
        self.participants.len() == self.size.slots()
    }

    fn index_of(&self, slot_id: SlotId) -> Result<usize, RosterError> {
        self.participants
            .iter()
            .position(|slot| slot.id == slot_id)
            .ok_or_else(|| RosterError::slot_not_found(slot_id))
    }

    // =========================================================================
    // Engine Operations
    // =========================================================================

    /// Change the capacity.
    ///
    /// Growing appends fresh empty slots at the end. Shrinking keeps the first
    /// `size` slots and drops the rest together with their occupants; the loss
    /// is not recoverable by growing again.
    pub fn resize(&self, size: RaidSize) -> Raid {
        let mut next = self.clone();
        if size == self.size && self.is_consistent() {
            return next;
        }
        next.size = size;
        next.participants
            .resize_with(size.slots(), ParticipantSlot::empty);
        next
    }

    /// Put `profile` into the lowest-index empty slot.
    ///
    /// # Errors
    ///
    /// - [`RosterError::DuplicateOccupant`] if a slot already holds a character
    ///   with the same name (checked first)
    /// - [`RosterError::RaidFull`] if no slot is empty
    pub fn fill_first_empty(&self, profile: CharacterProfile) -> Result<Raid, RosterError> {
        if self.contains_character(profile.name()) {
            return Err(RosterError::duplicate_occupant(profile.name()));
        }

        let index = self
            .participants
            .iter()
            .position(ParticipantSlot::is_empty)
            .ok_or_else(|| RosterError::raid_full(self.size.get()))?;

        let mut next = self.clone();
        if let Some(slot) = next.participants.get_mut(index) {
            slot.character = Some(profile);
        }
        Ok(next)
    }

    /// Empty the given slot. Clearing an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// [`RosterError::SlotNotFound`] if the slot is not part of this raid.
    pub fn clear_slot(&self, slot_id: SlotId) -> Result<Raid, RosterError> {
        let index = self.index_of(slot_id)?;

        let mut next = self.clone();
        if let Some(slot) = next.participants.get_mut(index) {
            slot.character = None;
        }
        Ok(next)
    }

    /// Move slot `moved` to the position currently held by `target`.
    ///
    /// This is a list move, not a swap: the slots in between shift by one
    /// toward the vacated position. The occupant travels with its slot.
    ///
    /// # Errors
    ///
    /// [`RosterError::SlotNotFound`] if either slot is not part of this raid.
    pub fn reorder(&self, moved: SlotId, target: SlotId) -> Result<Raid, RosterError> {
        let from = self.index_of(moved)?;
        let to = self.index_of(target)?;

        let mut next = self.clone();
        if from != to {
            let slot = next.participants.remove(from);
            next.participants.insert(to, slot);
        }
        Ok(next)
    }

    /// Replace the display name. Empty names are allowed.
    pub fn rename(&self, name: impl Into<String>) -> Raid {
        Raid {
            name: name.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_profile;

    fn ids(raid: &Raid) -> Vec<SlotId> {
        raid.slots().iter().map(ParticipantSlot::id).collect()
    }

    fn names(raid: &Raid) -> Vec<Option<String>> {
        raid.slots()
            .iter()
            .map(|slot| slot.occupant().map(|p| p.character_name.clone()))
            .collect()
    }

    fn filled(size: RaidSize, names: &[&str]) -> Raid {
        names.iter().fold(Raid::create_empty(size), |raid, name| {
            raid.fill_first_empty(sample_profile(name)).unwrap()
        })
    }

    mod create_empty {
        use super::*;
        use std::collections::HashSet;

        #[test]
        fn allocates_distinct_empty_slots_for_every_size() {
            for size in RaidSize::ALL {
                let raid = Raid::create_empty(size);

                assert_eq!(raid.slots().len(), size.slots());
                assert!(raid.slots().iter().all(ParticipantSlot::is_empty));
                assert!(raid.name().is_empty());
                assert!(raid.is_consistent());

                let unique: HashSet<_> = ids(&raid).into_iter().collect();
                assert_eq!(unique.len(), size.slots());
            }
        }

        #[test]
        fn mints_a_new_raid_id_each_time() {
            let a = Raid::create_empty(RaidSize::Four);
            let b = Raid::create_empty(RaidSize::Four);
            assert_ne!(a.id(), b.id());
        }
    }

    mod resize {
        use super::*;

        #[test]
        fn growing_appends_empty_slots_and_keeps_identities() {
            let raid = filled(RaidSize::Four, &["A", "B"]);
            let grown = raid.resize(RaidSize::Eight);

            assert_eq!(grown.size(), RaidSize::Eight);
            assert_eq!(grown.slots().len(), 8);
            assert_eq!(&ids(&grown)[..4], &ids(&raid)[..]);
            assert!(grown.slots()[4..].iter().all(ParticipantSlot::is_empty));
            assert_eq!(grown.occupied_count(), 2);
        }

        #[test]
        fn shrinking_truncates_and_loses_occupants() {
            let raid = filled(RaidSize::Eight, &["A", "B", "C", "D", "E", "F"]);
            let shrunk = raid.resize(RaidSize::Four);

            assert_eq!(shrunk.slots().len(), 4);
            assert_eq!(&ids(&shrunk)[..], &ids(&raid)[..4]);
            assert!(!shrunk.contains_character("E"));

            let regrown = shrunk.resize(RaidSize::Eight);
            assert_eq!(regrown.occupied_count(), 4);
            assert!(!regrown.contains_character("E"));
            assert!(!regrown.contains_character("F"));
        }

        #[test]
        fn grow_then_shrink_keeps_retained_identities() {
            let raid = Raid::create_empty(RaidSize::Eight);
            let round_trip = raid.resize(RaidSize::Sixteen).resize(RaidSize::Eight);

            assert_eq!(ids(&round_trip), ids(&raid));
        }

        #[test]
        fn same_size_is_a_no_op() {
            let raid = filled(RaidSize::Four, &["A"]);
            assert_eq!(raid.resize(RaidSize::Four), raid);
        }

        #[test]
        fn reconciles_inconsistent_slot_counts() {
            let slots = vec![ParticipantSlot::empty(), ParticipantSlot::empty()];
            let raid = Raid::from_parts(RaidId::new(), "Stored", RaidSize::Four, slots);
            assert!(!raid.is_consistent());

            let fixed = raid.resize(RaidSize::Four);
            assert!(fixed.is_consistent());
            assert_eq!(&ids(&fixed)[..2], &ids(&raid)[..]);
        }

        #[test]
        fn leaves_the_original_untouched() {
            let raid = Raid::create_empty(RaidSize::Four);
            let _ = raid.resize(RaidSize::Sixteen);
            assert_eq!(raid.slots().len(), 4);
        }
    }

    mod fill_first_empty {
        use super::*;

        #[test]
        fn picks_the_lowest_index_empty_slot() {
            let raid = filled(RaidSize::Four, &["A", "B", "C", "D"]);
            let middle = raid.slots()[1].id();
            let third = raid.slots()[2].id();
            let raid = raid.clear_slot(middle).unwrap().clear_slot(third).unwrap();

            let next = raid.fill_first_empty(sample_profile("E")).unwrap();

            assert_eq!(
                names(&next),
                vec![
                    Some("A".to_string()),
                    Some("E".to_string()),
                    None,
                    Some("D".to_string())
                ]
            );
            assert_eq!(next.slots()[1].id(), middle);
        }

        #[test]
        fn rejects_duplicate_names_without_change() {
            let raid = filled(RaidSize::Four, &["A"]);

            let err = raid.fill_first_empty(sample_profile("A")).unwrap_err();

            assert_eq!(err, RosterError::duplicate_occupant("A"));
            assert_eq!(raid.occupied_count(), 1);
        }

        #[test]
        fn duplicate_check_wins_over_full() {
            let raid = filled(RaidSize::Four, &["A", "B", "C", "D"]);
            let err = raid.fill_first_empty(sample_profile("B")).unwrap_err();
            assert!(matches!(err, RosterError::DuplicateOccupant { .. }));
        }

        #[test]
        fn rejects_when_full() {
            let raid = filled(RaidSize::Four, &["A", "B", "C", "D"]);
            assert!(raid.is_full());

            let err = raid.fill_first_empty(sample_profile("E")).unwrap_err();
            assert_eq!(err, RosterError::raid_full(4));
        }
    }

    mod clear_slot {
        use super::*;

        #[test]
        fn empties_the_slot_in_place() {
            let raid = filled(RaidSize::Four, &["A", "B"]);
            let slot_id = raid.slots()[0].id();

            let next = raid.clear_slot(slot_id).unwrap();

            assert!(next.slots()[0].is_empty());
            assert_eq!(next.slots()[0].id(), slot_id);
            assert_eq!(ids(&next), ids(&raid));
        }

        #[test]
        fn clearing_an_empty_slot_is_a_no_op() {
            let raid = Raid::create_empty(RaidSize::Four);
            let slot_id = raid.slots()[3].id();
            assert_eq!(raid.clear_slot(slot_id).unwrap(), raid);
        }

        #[test]
        fn unknown_slot_is_an_error() {
            let raid = Raid::create_empty(RaidSize::Four);
            let stranger = SlotId::new();
            assert_eq!(
                raid.clear_slot(stranger).unwrap_err(),
                RosterError::slot_not_found(stranger)
            );
        }
    }

    mod reorder {
        use super::*;

        #[test]
        fn moves_rather_than_swaps() {
            let raid = filled(RaidSize::Four, &["A", "B", "C", "D"]);
            let before = ids(&raid);

            let next = raid.reorder(before[0], before[2]).unwrap();

            assert_eq!(ids(&next), vec![before[1], before[2], before[0], before[3]]);
            assert_eq!(
                names(&next),
                vec![
                    Some("B".to_string()),
                    Some("C".to_string()),
                    Some("A".to_string()),
                    Some("D".to_string())
                ]
            );
        }

        #[test]
        fn moving_backwards_shifts_the_others_forward() {
            let raid = Raid::create_empty(RaidSize::Four);
            let before = ids(&raid);

            let next = raid.reorder(before[3], before[1]).unwrap();

            assert_eq!(ids(&next), vec![before[0], before[3], before[1], before[2]]);
        }

        #[test]
        fn reverse_move_of_neighbours_restores_order() {
            let raid = filled(RaidSize::Eight, &["A", "B", "C"]);
            let before = ids(&raid);
            let (a, b) = (before[4], before[5]);

            let restored = raid.reorder(a, b).unwrap().reorder(b, a).unwrap();

            assert_eq!(restored, raid);
        }

        #[test]
        fn same_slot_is_a_no_op() {
            let raid = filled(RaidSize::Four, &["A"]);
            let slot_id = raid.slots()[0].id();
            assert_eq!(raid.reorder(slot_id, slot_id).unwrap(), raid);
        }

        #[test]
        fn unknown_slot_is_an_error() {
            let raid = Raid::create_empty(RaidSize::Four);
            let known = raid.slots()[0].id();
            let stranger = SlotId::new();

            assert!(raid.reorder(stranger, known).is_err());
            assert_eq!(
                raid.reorder(known, stranger).unwrap_err(),
                RosterError::slot_not_found(stranger)
            );
        }
    }

    #[test]
    fn parties_group_slots_by_four() {
        let raid = Raid::create_empty(RaidSize::Sixteen);
        let parties: Vec<_> = raid.parties().collect();

        assert_eq!(parties.len(), 4);
        assert!(parties.iter().all(|party| party.len() == 4));
    }

    #[test]
    fn serializes_in_the_persisted_shape() {
        let raid = filled(RaidSize::Four, &["A"]).rename("Echidna");
        let json = serde_json::to_value(&raid).unwrap();

        assert_eq!(json["name"], "Echidna");
        assert_eq!(json["size"], 4);
        assert_eq!(json["participants"].as_array().unwrap().len(), 4);
        assert_eq!(json["participants"][0]["character"]["CharacterName"], "A");
        assert!(json["participants"][1]["character"].is_null());
        assert_eq!(
            json["participants"][0]["id"],
            raid.slots()[0].id().to_string()
        );
    }
}

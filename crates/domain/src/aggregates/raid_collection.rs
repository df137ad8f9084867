//! RaidCollection aggregate - the ordered list of raids a player manages

use std::collections::HashSet;

use serde::Serialize;

use crate::aggregates::Raid;
use crate::value_objects::RaidSize;
use raidmint_domain::RaidId;

/// Raids in display order, most recently added last.
///
/// # Invariants
///
/// - No two raids share a [`RaidId`]
///
/// Like [`Raid`], every operation returns a new collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RaidCollection {
    raids: Vec<Raid>,
}

impl RaidCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from raids in display order.
    ///
    /// A raid whose id was already seen gets a fresh one, so the ids stay
    /// unique even when stored data was hand-edited.
    pub fn from_raids(raids: impl IntoIterator<Item = Raid>) -> Self {
        let mut seen = HashSet::new();
        let raids = raids
            .into_iter()
            .map(|raid| {
                if seen.insert(raid.id()) {
                    raid
                } else {
                    let raid = raid.with_fresh_id();
                    seen.insert(raid.id());
                    raid
                }
            })
            .collect();
        Self { raids }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, raid_id: RaidId) -> Option<&Raid> {
        self.raids.iter().find(|raid| raid.id() == raid_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Raid> {
        self.raids.iter()
    }

    pub fn as_slice(&self) -> &[Raid] {
        &self.raids
    }

    pub fn last(&self) -> Option<&Raid> {
        self.raids.last()
    }

    pub fn len(&self) -> usize {
        self.raids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raids.is_empty()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Append a new empty, unnamed raid of the given size.
    pub fn add_raid(&self, size: RaidSize) -> RaidCollection {
        self.append(Raid::create_empty(size))
    }

    /// Append a raid at the end. A raid whose id is already taken is re-keyed.
    pub fn append(&self, raid: Raid) -> RaidCollection {
        let raid = if self.get(raid.id()).is_some() {
            raid.with_fresh_id()
        } else {
            raid
        };
        let mut raids = self.raids.clone();
        raids.push(raid);
        Self { raids }
    }

    /// Replace the raid with the same id. Unknown ids leave the collection as is.
    pub fn update_raid(&self, raid: Raid) -> RaidCollection {
        let raids = self
            .raids
            .iter()
            .map(|existing| {
                if existing.id() == raid.id() {
                    raid.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        Self { raids }
    }

    /// Drop the raid with the given id, if present.
    pub fn remove_raid(&self, raid_id: RaidId) -> RaidCollection {
        let raids = self
            .raids
            .iter()
            .filter(|raid| raid.id() != raid_id)
            .cloned()
            .collect();
        Self { raids }
    }
}

impl<'a> IntoIterator for &'a RaidCollection {
    type Item = &'a Raid;
    type IntoIter = std::slice::Iter<'a, Raid>;

    fn into_iter(self) -> Self::IntoIter {
        self.raids.iter()
    }
}

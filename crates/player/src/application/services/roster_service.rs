//! Roster Service - holds the raid collection and persists every accepted edit
//!
//! The collection value is the single source of truth. Each edit looks up the
//! raid, runs the engine operation, swaps in the new collection and writes it
//! to storage. A rejected edit keeps the previous collection and writes
//! nothing.

use raidmint_domain::{
    CharacterProfile, Raid, RaidCollection, RaidId, RaidSize, RosterError, SlotId,
};

use crate::application::services::migration_service::{LegacyStateMigrator, MigrationSource};
use crate::ports::outbound::{storage_keys, StorageProvider};

pub struct RosterService<S: StorageProvider> {
    storage: S,
    collection: RaidCollection,
}

impl<S: StorageProvider> RosterService<S> {
    /// Load the stored collection, migrating older shapes first.
    pub fn load(storage: S) -> Self {
        let migration = LegacyStateMigrator::new(storage.clone()).migrate();
        if migration.source == MigrationSource::Unreadable {
            tracing::warn!("Starting with an empty roster");
        }

        Self {
            storage,
            collection: migration.collection,
        }
    }

    /// The latest collection value.
    pub fn collection(&self) -> &RaidCollection {
        &self.collection
    }

    pub fn raid(&self, raid_id: RaidId) -> Option<&Raid> {
        self.collection.get(raid_id)
    }

    /// Append an empty raid and return its id.
    pub fn add_raid(&mut self, size: RaidSize) -> RaidId {
        let raid = Raid::create_empty(size);
        let raid_id = raid.id();
        tracing::debug!(%raid_id, size = size.get(), "Added raid");
        self.commit(self.collection.append(raid));
        raid_id
    }

    pub fn remove_raid(&mut self, raid_id: RaidId) -> Result<(), RosterError> {
        if self.collection.get(raid_id).is_none() {
            return Err(RosterError::raid_not_found(raid_id));
        }
        tracing::debug!(%raid_id, "Removed raid");
        self.commit(self.collection.remove_raid(raid_id));
        Ok(())
    }

    pub fn rename_raid(&mut self, raid_id: RaidId, name: &str) -> Result<(), RosterError> {
        self.edit(raid_id, |raid| Ok(raid.rename(name)))
    }

    /// Change capacity. Shrinking drops trailing slots and their occupants.
    pub fn resize_raid(&mut self, raid_id: RaidId, size: RaidSize) -> Result<(), RosterError> {
        self.edit(raid_id, |raid| Ok(raid.resize(size)))
    }

    pub fn add_participant(
        &mut self,
        raid_id: RaidId,
        profile: CharacterProfile,
    ) -> Result<(), RosterError> {
        self.edit(raid_id, |raid| raid.fill_first_empty(profile))
    }

    pub fn remove_participant(
        &mut self,
        raid_id: RaidId,
        slot_id: SlotId,
    ) -> Result<(), RosterError> {
        self.edit(raid_id, |raid| raid.clear_slot(slot_id))
    }

    /// Drag `moved` onto `target`.
    pub fn move_participant(
        &mut self,
        raid_id: RaidId,
        moved: SlotId,
        target: SlotId,
    ) -> Result<(), RosterError> {
        self.edit(raid_id, |raid| raid.reorder(moved, target))
    }

    fn edit(
        &mut self,
        raid_id: RaidId,
        operation: impl FnOnce(&Raid) -> Result<Raid, RosterError>,
    ) -> Result<(), RosterError> {
        let raid = self
            .collection
            .get(raid_id)
            .ok_or_else(|| RosterError::raid_not_found(raid_id))?;

        match operation(raid) {
            Ok(edited) => {
                self.commit(self.collection.update_raid(edited));
                Ok(())
            }
            Err(e) => {
                tracing::debug!(%raid_id, "Rejected roster edit: {}", e);
                Err(e)
            }
        }
    }

    fn commit(&mut self, collection: RaidCollection) {
        self.collection = collection;
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.collection) {
            Ok(json) => self.storage.save(storage_keys::RAIDS, &json),
            Err(e) => tracing::error!("Failed to serialize raids: {}", e),
        }
    }
}

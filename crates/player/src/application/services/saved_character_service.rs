//! Saved Characters - profiles bookmarked from the standalone search

use raidmint_domain::{safe_validate, CharacterProfile, ValidationOutcome};
use serde_json::Value;

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Bookmarked profiles, unique by character name, in the order they were saved.
pub struct SavedCharacters<S: StorageProvider> {
    storage: S,
    characters: Vec<CharacterProfile>,
}

impl<S: StorageProvider> SavedCharacters<S> {
    /// Load the saved list. Unreadable data yields an empty list.
    pub fn load(storage: S) -> Self {
        let characters = storage
            .load(storage_keys::SAVED_CHARACTERS)
            .map(|raw| parse_saved(&raw))
            .unwrap_or_default();

        Self {
            storage,
            characters,
        }
    }

    pub fn list(&self) -> &[CharacterProfile] {
        &self.characters
    }

    pub fn contains(&self, name: &str) -> bool {
        self.characters.iter().any(|c| c.name() == name)
    }

    /// Save a profile unless one with the same name is already saved.
    /// Returns whether it was added.
    pub fn add(&mut self, profile: CharacterProfile) -> bool {
        if self.contains(profile.name()) {
            return false;
        }
        tracing::debug!(name = profile.name(), "Saved character");
        self.characters.push(profile);
        self.persist();
        true
    }

    /// Returns whether a profile with that name was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| c.name() != name);
        let removed = self.characters.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        match serde_json::to_string(&self.characters) {
            Ok(json) => self.storage.save(storage_keys::SAVED_CHARACTERS, &json),
            Err(e) => tracing::error!("Failed to serialize saved characters: {}", e),
        }
    }
}

fn parse_saved(raw: &str) -> Vec<CharacterProfile> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to parse saved characters: {}", e);
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| match safe_validate(entry) {
            ValidationOutcome::Valid(profile) => Some(profile),
            ValidationOutcome::Invalid(e) => {
                tracing::warn!(field = %e.field, "Skipping saved character: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorageProvider;
    use raidmint_domain::testing::{sample_profile, sample_profile_json};
    use serde_json::json;

    #[test]
    fn add_deduplicates_by_name() {
        let storage = MemoryStorageProvider::new();
        let mut saved = SavedCharacters::load(storage.clone());

        assert!(saved.add(sample_profile("A")));
        assert!(saved.add(sample_profile("B")));
        assert!(!saved.add(sample_profile("A")));

        let names: Vec<_> = saved.list().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn remove_by_name() {
        let storage = MemoryStorageProvider::new();
        let mut saved = SavedCharacters::load(storage.clone());
        saved.add(sample_profile("A"));

        assert!(!saved.remove("Z"));
        assert!(saved.remove("A"));
        assert!(saved.list().is_empty());
        assert_eq!(storage.load(storage_keys::SAVED_CHARACTERS).as_deref(), Some("[]"));
    }

    #[test]
    fn reloads_what_was_persisted() {
        let storage = MemoryStorageProvider::new();
        let mut saved = SavedCharacters::load(storage.clone());
        saved.add(sample_profile("A"));

        let reloaded = SavedCharacters::load(storage);
        assert_eq!(reloaded.list(), &[sample_profile("A")]);
    }

    #[test]
    fn unreadable_data_yields_an_empty_list() {
        let storage =
            MemoryStorageProvider::new().with_entry(storage_keys::SAVED_CHARACTERS, "{oops");
        assert!(SavedCharacters::load(storage).list().is_empty());
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let raw = json!([sample_profile_json("A"), { "CharacterName": 3 }]).to_string();
        let storage =
            MemoryStorageProvider::new().with_entry(storage_keys::SAVED_CHARACTERS, &raw);

        let saved = SavedCharacters::load(storage);
        assert_eq!(saved.list().len(), 1);
        assert!(saved.contains("A"));
    }
}

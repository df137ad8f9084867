//! Platform abstraction ports for cross-platform persistence
//!
//! The roster runs against browser `localStorage` on the web and a JSON file
//! on desktop. Application services only see the [`StorageProvider`] trait, so
//! tests can swap in an in-memory map.

/// Persistent storage abstraction (localStorage/file-based)
///
/// Writes are synchronous and fire-and-forget. Writing the same value twice
/// must be harmless.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These match the keys earlier releases of the web client wrote, so existing
/// browser data is picked up on first load.
pub mod storage_keys {
    /// Current-shape raid collection
    pub const RAIDS: &str = "loa-mint-raids";
    /// Single raid written before multiple raids existed; read only by migration
    pub const LEGACY_RAID_STATE: &str = "loa-mint-raid-state";
    /// Characters bookmarked from the standalone search
    pub const SAVED_CHARACTERS: &str = "loa-mint-characters";
}

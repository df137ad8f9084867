//! In-memory storage provider
//!
//! Used by tests and by sessions that must not touch disk.

use crate::ports::outbound::StorageProvider;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Storage provider holding values in a shared map. Clones share the map.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<RwLock<usize>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if an earlier session had written it.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `save`/`remove` calls seen so far.
    pub fn write_count(&self) -> usize {
        *self.writes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_write(&self) {
        *self.writes.write().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self.record_write();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        self.record_write();
    }
}

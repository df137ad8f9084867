//! Desktop storage - one JSON object of string values in the user config dir

use crate::ports::outbound::StorageProvider;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/raidmint/storage.json
/// - macOS: ~/Library/Application Support/io.raidmint.raidmint/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\raidmint\raidmint\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "raidmint", "raidmint") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("raidmint_storage.json")
        };

        Self::at_path(storage_path)
    }

    /// Create a storage provider backed by the given file
    ///
    /// Loads existing data from the file if it exists. An unreadable or
    /// malformed file starts an empty store; it is overwritten on first save.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_store(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Apply `edit` to the cache, then write the whole store to disk.
    fn write_through(&self, edit: impl FnOnce(&mut HashMap<String, String>)) {
        let snapshot = {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            edit(&mut cache);
            serde_json::to_string_pretty(&*cache)
        };

        let data = match snapshot {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
                return;
            }
        };

        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory {:?}: {}", parent, e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.storage_path, data) {
            tracing::error!("Failed to write storage file {:?}: {}", self.storage_path, e);
        }
    }
}

fn read_store(path: &Path) -> HashMap<String, String> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!("Failed to read storage file {:?}: {}", path, e);
            return HashMap::new();
        }
    };

    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!("Discarding malformed storage file {:?}: {}", path, e);
        HashMap::new()
    })
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.write_through(|cache| {
            cache.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.write_through(|cache| {
            cache.remove(key);
        });
    }
}

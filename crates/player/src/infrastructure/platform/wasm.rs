//! WASM platform implementations backed by browser `localStorage`

use crate::ports::outbound::StorageProvider;

/// Browser storage provider using `window.localStorage`
///
/// When storage is unavailable (private mode, sandboxed iframes) reads return
/// `None` and writes are dropped with a warning.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

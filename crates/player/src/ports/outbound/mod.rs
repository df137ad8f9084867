//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod character_lookup_port;
pub mod platform;

pub use character_lookup_port::{CharacterLookupPort, LookupError};
pub use platform::{storage_keys, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use character_lookup_port::MockCharacterLookupPort;

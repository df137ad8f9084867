//! Infrastructure adapters - storage backends, the armory HTTP client, and
//! process setup.

pub mod config;
pub mod logging;
pub mod lostark;
pub mod platform;

pub use config::LostArkConfig;
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
pub use lostark::LostArkClient;
pub use platform::{MemoryStorageProvider, PlatformStorage};

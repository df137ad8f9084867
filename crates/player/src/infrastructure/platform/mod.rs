//! Platform-specific storage implementations
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStorageProvider;

pub use memory::MemoryStorageProvider;

/// The storage provider for the current build target
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = WasmStorageProvider;

/// The storage provider for the current build target
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = DesktopStorageProvider;

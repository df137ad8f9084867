//! Character lookup port - the armory profile endpoint

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level lookup failures. "Character not found" is not an error:
/// it is `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Lost Ark API key is missing")]
    MissingApiKey,

    #[error("Lookup request failed: {0}")]
    Request(String),

    #[error("Lookup returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Lookup returned an unreadable body: {0}")]
    InvalidResponse(String),
}

/// Fetch a character's raw profile by name.
///
/// The payload is returned untyped; callers must run it through the profile
/// validator before using it.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CharacterLookupPort: Send + Sync {
    async fn fetch_character(&self, name: &str) -> Result<Option<Value>, LookupError>;
}

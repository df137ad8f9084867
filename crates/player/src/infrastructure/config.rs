//! Lookup client configuration from the environment

use std::time::Duration;

/// Default base URL of the Lost Ark open API.
pub const DEFAULT_LOSTARK_BASE_URL: &str = "https://developer-lostark.game.onstove.com";

/// Default request timeout in seconds.
pub const DEFAULT_LOSTARK_TIMEOUT_SECS: u64 = 10;

/// Settings for [`LostArkClient`](super::lostark::LostArkClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostArkConfig {
    pub base_url: String,
    /// Bearer token issued by the developer portal. Lookups fail fast without it.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for LostArkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOSTARK_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_LOSTARK_TIMEOUT_SECS),
        }
    }
}

impl LostArkConfig {
    /// Load configuration from environment variables, reading `.env` first.
    ///
    /// - `LOSTARK_API_BASE_URL`
    /// - `LOSTARK_API_KEY`, or `PUBLIC_LOA_API_KEY` as used by the web build
    /// - `LOSTARK_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty("LOSTARK_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_LOSTARK_BASE_URL.to_string());
        let api_key = non_empty("LOSTARK_API_KEY").or_else(|| non_empty("PUBLIC_LOA_API_KEY"));
        let timeout_secs = match non_empty("LOSTARK_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid LOSTARK_TIMEOUT_SECS={:?}, using {}",
                    raw,
                    DEFAULT_LOSTARK_TIMEOUT_SECS
                );
                DEFAULT_LOSTARK_TIMEOUT_SECS
            }),
            None => DEFAULT_LOSTARK_TIMEOUT_SECS,
        };

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

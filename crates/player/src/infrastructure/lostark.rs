//! Lost Ark open API client for armory profiles

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::infrastructure::config::LostArkConfig;
use crate::ports::outbound::{CharacterLookupPort, LookupError};

/// Client for `GET /armories/characters/{name}/profiles`
#[derive(Clone)]
pub struct LostArkClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LostArkClient {
    pub fn new(config: LostArkConfig) -> Self {
        let builder = Client::builder();
        // The browser fetch backend has no client-side timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Create client from environment variables.
    ///
    /// See [`LostArkConfig::from_env`] for the variables read.
    pub fn from_env() -> Self {
        Self::new(LostArkConfig::from_env())
    }

    fn profile_url(&self, name: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Request(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Request("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["armories", "characters", name, "profiles"]);
        Ok(url)
    }
}

impl Default for LostArkClient {
    fn default() -> Self {
        Self::new(LostArkConfig::default())
    }
}

#[async_trait]
impl CharacterLookupPort for LostArkClient {
    async fn fetch_character(&self, name: &str) -> Result<Option<Value>, LookupError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(LookupError::MissingApiKey);
        };
        let url = self.profile_url(name)?;

        tracing::debug!("Fetching armory profile for {}", name);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("bearer {}", api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            tracing::warn!("Armory lookup for {} failed with {}", name, status);
            return Err(LookupError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        // Unknown characters come back as 200 with a `null` body
        if body.is_null() {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

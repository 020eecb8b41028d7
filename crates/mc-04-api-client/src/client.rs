//! Character API client over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use shared_types::{CatalogError, CharacterApi, CharacterId, CharacterResponse};

use crate::config::HttpClientConfig;

/// Error body the API returns with non-success statuses.
///
/// `code` is a number for some failures and a string for others
/// (`"InvalidCredentials"`), so it is left untyped.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Marvel character API client.
pub struct MarvelHttpClient {
    client: Client,
    base_url: String,
    requests_sent: AtomicU64,
}

impl MarvelHttpClient {
    /// Create a new client.
    pub fn new(config: HttpClientConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            requests_sent: AtomicU64::new(0),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests issued since creation.
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.load(Ordering::Relaxed)
    }

    fn characters_url(&self) -> String {
        format!("{}/characters", self.base_url)
    }

    fn character_url(&self, id: CharacterId) -> String {
        format!("{}/characters/{}", self.base_url, id)
    }

    async fn fetch(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<CharacterResponse, CatalogError> {
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Network(format!("Request to {} timed out", url))
                } else if e.is_connect() {
                    CatalogError::Network(format!("Cannot connect to {}", self.base_url))
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !status.is_success() {
            let err = http_error(status, &body);
            warn!(status = status.as_u16(), error = %err, "Character API rejected request");
            return Err(err);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Map a non-success status and its body to `CatalogError::Http`.
fn http_error(status: StatusCode, body: &[u8]) -> CatalogError {
    let message = serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            let text = parsed.message.or(parsed.status)?;
            Some(match parsed.code {
                Some(serde_json::Value::String(code)) => format!("{}: {}", code, text),
                _ => text,
            })
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        });

    CatalogError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl CharacterApi for MarvelHttpClient {
    async fn get_characters(
        &self,
        timestamp: &str,
        public_key: &str,
        hash: &str,
        limit: u32,
    ) -> Result<CharacterResponse, CatalogError> {
        let query = [
            ("ts", timestamp.to_string()),
            ("apikey", public_key.to_string()),
            ("hash", hash.to_string()),
            ("limit", limit.to_string()),
        ];
        self.fetch(self.characters_url(), &query).await
    }

    async fn get_character_detail(
        &self,
        id: CharacterId,
        timestamp: &str,
        public_key: &str,
        hash: &str,
    ) -> Result<CharacterResponse, CatalogError> {
        let query = [
            ("ts", timestamp.to_string()),
            ("apikey", public_key.to_string()),
            ("hash", hash.to_string()),
        ];
        self.fetch(self.character_url(id), &query).await
    }
}

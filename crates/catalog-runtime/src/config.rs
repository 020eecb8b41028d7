//! # Catalog Configuration
//!
//! Unified configuration for the API adapter and the list controller.
//!
//! ## Sources (later wins)
//!
//! 1. `Default` impls
//! 2. Environment: `MARVEL_PUBLIC_KEY`, `MARVEL_PRIVATE_KEY`,
//!    `MARVEL_API_BASE_URL`, `MARVEL_TIMEOUT_SECS`, `MARVEL_PAGE_SIZE`
//!
//! ## Security Requirements
//!
//! - Both API keys MUST be set before any request is signed.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use mc_01_request_signing::ApiCredentials;
use mc_02_character_list::ListConfig;
use mc_04_api_client::{HttpClientConfig, DEFAULT_BASE_URL};

pub const ENV_PUBLIC_KEY: &str = "MARVEL_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "MARVEL_PRIVATE_KEY";
pub const ENV_BASE_URL: &str = "MARVEL_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "MARVEL_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "MARVEL_PAGE_SIZE";

/// Complete catalog configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// API adapter configuration.
    pub api: ApiConfig,
    /// Pagination configuration.
    pub paging: PagingConfig,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An API key is empty.
    #[error("{0} is not set. Export it before starting the catalog.")]
    MissingKey(&'static str),
}

/// API adapter configuration.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub public_key: String,
    /// Never logged.
    pub private_key: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            public_key: String::new(),
            private_key: String::new(),
            timeout_secs: 15,
            connect_timeout_secs: 5,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    pub fn credentials(&self) -> ApiCredentials {
        ApiCredentials::new(self.public_key.clone(), self.private_key.clone())
    }

    pub fn http(&self) -> HttpClientConfig {
        HttpClientConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..HttpClientConfig::default()
        }
        .with_base_url(self.base_url.clone())
        .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Pagination configuration.
#[derive(Debug, Clone, Default)]
pub struct PagingConfig {
    pub list: ListConfig,
}

impl CatalogConfig {
    /// Reject configurations that cannot sign a request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.public_key.trim().is_empty() {
            return Err(ConfigError::MissingKey(ENV_PUBLIC_KEY));
        }
        if self.api.private_key.trim().is_empty() {
            return Err(ConfigError::MissingKey(ENV_PRIVATE_KEY));
        }
        Ok(())
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Unparseable numeric values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_PUBLIC_KEY) {
            self.api.public_key = key;
        }
        if let Some(key) = lookup(ENV_PRIVATE_KEY) {
            self.api.private_key = key;
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            info!(base_url = %url, "Using API base URL from environment");
            self.api.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "{} must be a whole number of seconds", ENV_TIMEOUT_SECS),
            }
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.parse() {
                Ok(size) => self.paging.list = self.paging.list.clone().with_page_size(size),
                Err(_) => warn!(value = %raw, "{} must be a positive integer", ENV_PAGE_SIZE),
            }
        }
    }
}

/// Load configuration from defaults and the process environment.
pub fn load_config() -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.apply_overrides(|name| std::env::var(name).ok());
    config
}

//! HTTP adapter configuration.

use std::time::Duration;

/// Public API root.
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl HttpClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

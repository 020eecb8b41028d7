//! # Error Types
//!
//! Defines the error kinds shared by every catalog crate.
//!
//! An empty result page is not an error: it is a valid empty list.

use thiserror::Error;

/// Errors surfaced to the screen that initiated a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure (connect, TLS, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Malformed navigation payload or response body.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The owning controller was unsubscribed before the request completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Deserialization(err.to_string())
    }
}

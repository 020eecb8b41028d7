//! # MC-04 API Client
//!
//! reqwest-based adapter implementing the `CharacterApi` driven port against
//! the Marvel public API.
//!
//! ## Endpoints
//!
//! | Port method | Request |
//! |-------------|---------|
//! | `get_characters` | `GET {base}/characters?ts=&apikey=&hash=&limit=` |
//! | `get_character_detail` | `GET {base}/characters/{id}?ts=&apikey=&hash=` |
//!
//! ## Error Mapping
//!
//! - connect/TLS/timeout/body read → `CatalogError::Network`
//! - non-2xx status → `CatalogError::Http` (message taken from the error body)
//! - undecodable body → `CatalogError::Deserialization`

mod client;
mod config;

pub use client::MarvelHttpClient;
pub use config::{HttpClientConfig, DEFAULT_BASE_URL};

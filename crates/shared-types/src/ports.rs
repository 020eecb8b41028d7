//! # Ports
//!
//! - `CharacterApi`: driven port implemented by the REST client adapter.
//! - `ProgressListener`: callback port implemented by a screen.

use async_trait::async_trait;

use crate::entities::{CharacterId, CharacterResponse};
use crate::errors::CatalogError;

/// Character REST API (Driven Port)
///
/// Transport, HTTP status mapping and timeouts are the implementor's job.
/// Every call carries the signature triple produced by the request signer.
#[async_trait]
pub trait CharacterApi: Send + Sync {
    /// List characters from offset 0 with the given page size.
    async fn get_characters(
        &self,
        timestamp: &str,
        public_key: &str,
        hash: &str,
        limit: u32,
    ) -> Result<CharacterResponse, CatalogError>;

    /// Fetch extended detail for one character.
    async fn get_character_detail(
        &self,
        id: CharacterId,
        timestamp: &str,
        public_key: &str,
        hash: &str,
    ) -> Result<CharacterResponse, CatalogError>;
}

/// Screen callback fired once per completed request.
///
/// Called on both the success and failure paths so a loading indicator can
/// never hang. Not called for requests cancelled by `unsubscribe()`.
pub trait ProgressListener: Send + Sync {
    fn end_call_progress(&self, outcome: Result<&CharacterResponse, &CatalogError>);
}

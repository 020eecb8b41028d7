//! # Core Domain Entities
//!
//! Defines the character entities returned by the comics API.
//!
//! ## Clusters
//!
//! - **Characters**: `Character`, `Thumbnail`
//! - **Responses**: `CharacterResponse`, `CharacterDataContainer`
//! - **Images**: `ImageVariant`, `character_to_image_url`

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: CHARACTERS
// =============================================================================

/// Marvel character identifier.
pub type CharacterId = u64;

/// Image location as the API splits it: a base path and a file extension.
///
/// The variant segment is inserted between the two when building a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    /// Base path without variant or extension.
    pub path: String,
    /// File extension without the dot (e.g. `jpg`).
    pub extension: String,
}

/// A character as listed by the API.
///
/// Unknown fields sent by the API (`modified`, `resourceURI`, `comics`, ...)
/// are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Unique character id.
    pub id: CharacterId,
    /// Display name, the only field the local search looks at.
    pub name: String,
    /// Free-text description. The API sends `""` or `null` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Thumbnail location.
    pub thumbnail: Thumbnail,
}

impl Character {
    /// Create a character without description.
    pub fn new(id: CharacterId, name: impl Into<String>, thumbnail: Thumbnail) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            thumbnail,
        }
    }

    /// Description text, empty when the API had none.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// CLUSTER B: RESPONSES
// =============================================================================

/// The `data` container of a character list or detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CharacterDataContainer {
    /// Offset the server applied.
    #[serde(default)]
    pub offset: u32,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u32,
    /// Total number of characters available.
    #[serde(default)]
    pub total: u32,
    /// Number of results in this page.
    #[serde(default)]
    pub count: u32,
    /// Characters, in server order.
    #[serde(default)]
    pub results: Vec<Character>,
}

/// Envelope returned by every character endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CharacterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "attributionText",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribution_text: Option<String>,
    /// Result container.
    pub data: CharacterDataContainer,
}

impl CharacterResponse {
    /// Build a response around a result list, as a server would for `limit`.
    pub fn from_results(results: Vec<Character>, limit: u32) -> Self {
        let count = results.len() as u32;
        Self {
            code: Some(200),
            status: Some("Ok".to_string()),
            attribution_text: None,
            data: CharacterDataContainer {
                offset: 0,
                limit,
                total: count,
                count,
                results,
            },
        }
    }

    /// Results of this response.
    pub fn results(&self) -> &[Character] {
        &self.data.results
    }
}

// =============================================================================
// CLUSTER C: IMAGES
// =============================================================================

/// Image renditions offered by the API's image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    /// Wide rendition used by list rows.
    LandscapeIncredible,
    /// Square rendition used by the detail screen.
    StandardFantastic,
}

impl ImageVariant {
    /// Path segment naming this variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::LandscapeIncredible => "landscape_incredible",
            ImageVariant::StandardFantastic => "standard_fantastic",
        }
    }
}

impl std::fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the image URL for a character: `path/variant.extension`.
pub fn character_to_image_url(character: &Character, variant: ImageVariant) -> String {
    format!(
        "{}/{}.{}",
        character.thumbnail.path, variant, character.thumbnail.extension
    )
}

//! # Navigation Payload
//!
//! A character crosses the list → detail screen boundary as JSON text using
//! the same schema the API uses for a character object.

use crate::entities::Character;
use crate::errors::CatalogError;

/// Serialize a character for handoff to the detail screen.
pub fn to_navigation_payload(character: &Character) -> Result<String, CatalogError> {
    Ok(serde_json::to_string(character)?)
}

/// Decode a navigation payload.
///
/// A missing payload is reported the same way as a malformed one.
pub fn from_navigation_payload(payload: Option<&str>) -> Result<Character, CatalogError> {
    let payload = payload
        .ok_or_else(|| CatalogError::Deserialization("navigation payload missing".to_string()))?;
    Ok(serde_json::from_str(payload)?)
}

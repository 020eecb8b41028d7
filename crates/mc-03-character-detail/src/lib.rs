//! # MC-03 Character Detail
//!
//! Controller behind the detail screen. It is constructed from the JSON
//! navigation payload the list screen hands over, then fetches extended
//! detail for that character.
//!
//! ## Behavior
//!
//! - A missing or malformed payload fails construction with
//!   `CatalogError::Deserialization`; no request is ever issued.
//! - The detail response is reported to the listener. It is not merged into
//!   the held character.

pub mod service;

pub use service::CharacterDetailController;

//! Domain Layer - Pure signing logic
//!
//! RULES:
//! - No I/O operations
//! - No clock reads; timestamps are inputs

pub mod credentials;
pub mod signature;

pub use credentials::ApiCredentials;
pub use signature::{sign, SignedRequest};

//! # Request Signature
//!
//! `hash = md5(timestamp + private_key + public_key)`, lowercase hex.

use md5::{Digest, Md5};

use super::credentials::ApiCredentials;

/// Compute the API signature for one request.
pub fn sign(timestamp: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// The `ts` / `apikey` / `hash` triple attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub timestamp: String,
    pub public_key: String,
    pub hash: String,
}

impl SignedRequest {
    /// Sign `timestamp` with the given credentials.
    pub fn new(timestamp: impl Into<String>, credentials: &ApiCredentials) -> Self {
        let timestamp = timestamp.into();
        let hash = sign(&timestamp, &credentials.private_key, &credentials.public_key);
        Self {
            timestamp,
            public_key: credentials.public_key.clone(),
            hash,
        }
    }
}

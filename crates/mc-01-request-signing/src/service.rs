//! Request Signer Service
//!
//! Reads the clock once per request and signs the timestamp with the
//! configured credentials.

use std::sync::Arc;

use tracing::trace;

use crate::adapters::SystemClock;
use crate::domain::{ApiCredentials, SignedRequest};
use crate::ports::Clock;

/// Produces a fresh `SignedRequest` for every outgoing call.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: ApiCredentials,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a signer with an injected clock.
    pub fn new(credentials: ApiCredentials, clock: Arc<dyn Clock>) -> Self {
        Self { credentials, clock }
    }

    /// Create a signer backed by the system clock.
    pub fn with_system_clock(credentials: ApiCredentials) -> Self {
        Self::new(credentials, Arc::new(SystemClock))
    }

    /// Sign the current instant.
    pub fn sign_now(&self) -> SignedRequest {
        let timestamp = self.clock.now_millis().to_string();
        trace!(timestamp = %timestamp, "Signing request");
        SignedRequest::new(timestamp, &self.credentials)
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

//! API key pair.

/// Public/private key pair issued by the API provider.
///
/// Supplied externally (environment or build-time secrets) and passed
/// explicitly to the signer.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    /// Sent in clear as `apikey`.
    pub public_key: String,
    /// Only ever used as hash input.
    pub private_key: String,
}

impl ApiCredentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Whether both keys are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.public_key.trim().is_empty() && !self.private_key.trim().is_empty()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

//! Plain shared-secret comparison.

use nook_core::ports::{AuthError, CredentialVerifier};

/// Grants access when the presented credential equals the configured secret
/// byte for byte.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretVerifier")
            .field("secret", &"***")
            .finish()
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, presented: &[u8]) -> Result<bool, AuthError> {
        Ok(presented == self.secret.as_bytes())
    }
}

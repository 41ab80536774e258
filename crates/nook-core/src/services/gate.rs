//! Admin access gate.

use std::sync::Arc;

use crate::ports::{AuthError, CredentialVerifier};

/// Single yes/no check in front of every admin operation.
#[derive(Clone)]
pub struct AccessGate {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccessGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Check the credential presented with a request, if any.
    pub fn check(&self, presented: Option<&[u8]>) -> Result<(), AuthError> {
        let presented = presented.ok_or(AuthError::MissingCredential)?;

        if self.verifier.verify(presented)? {
            Ok(())
        } else {
            Err(AuthError::InvalidCredential)
        }
    }
}

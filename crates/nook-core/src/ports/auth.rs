//! Admin credential port.

/// Decides whether a presented credential grants admin access.
///
/// The server only ever asks this one question, so swapping the shared
/// secret for a real identity provider means implementing this trait.
pub trait CredentialVerifier: Send + Sync {
    /// Check a presented credential, given as the raw header bytes.
    fn verify(&self, presented: &[u8]) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing admin credential")]
    MissingCredential,

    #[error("Invalid admin credential")]
    InvalidCredential,

    #[error("Credential verifier failed: {0}")]
    Verifier(String),
}

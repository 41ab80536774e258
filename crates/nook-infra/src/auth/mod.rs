//! Admin credential verifiers.

mod shared_secret;

#[cfg(feature = "auth")]
mod password;

pub use shared_secret::SharedSecretVerifier;

#[cfg(feature = "auth")]
pub use password::Argon2SecretVerifier;

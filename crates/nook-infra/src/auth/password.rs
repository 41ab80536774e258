//! Argon2-hashed admin secret.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use nook_core::ports::{AuthError, CredentialVerifier};

/// Verifies the presented credential against an Argon2 PHC string, so the
/// plain secret never has to sit in the environment.
pub struct Argon2SecretVerifier {
    argon2: Argon2<'static>,
    hash: String,
}

impl Argon2SecretVerifier {
    /// Build from a PHC string, rejecting hashes that do not parse.
    pub fn new(hash: impl Into<String>) -> Result<Self, AuthError> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|e| AuthError::Verifier(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::default(),
            hash,
        })
    }
}

impl CredentialVerifier for Argon2SecretVerifier {
    fn verify(&self, presented: &[u8]) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(&self.hash).map_err(|e| AuthError::Verifier(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(presented, &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    fn hash_of(secret: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_against_hash() {
        let verifier = Argon2SecretVerifier::new(hash_of("admin_secret")).unwrap();

        assert!(verifier.verify(b"admin_secret").unwrap());
        assert!(!verifier.verify(b"wrong_secret").unwrap());
    }

    #[test]
    fn test_rejects_malformed_hash() {
        assert!(matches!(
            Argon2SecretVerifier::new("not-a-phc-string"),
            Err(AuthError::Verifier(_))
        ));
    }
}

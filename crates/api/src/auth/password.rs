//! Argon2id password hashing and the hashed admin credential.
//!
//! Hashes use the Argon2id variant with a random salt from [`OsRng`] and are
//! stored in PHC string format, so parameters and salt travel with the hash.

use ahlam_core::credentials::CredentialCheck;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Admin credential stored as an Argon2id PHC hash (`ADMIN_PASSWORD_HASH`).
pub struct Argon2Secret {
    hash: String,
}

impl Argon2Secret {
    /// Fails if `hash` is not a parseable PHC string.
    pub fn new(hash: impl Into<String>) -> Result<Self, argon2::password_hash::Error> {
        let hash = hash.into();
        PasswordHash::new(&hash)?;
        Ok(Self { hash })
    }
}

impl CredentialCheck for Argon2Secret {
    fn verify(&self, presented: &str) -> bool {
        match verify_password(presented, &self.hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(error = %e, "Admin password hash could not be verified");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = hash_password("masala").unwrap();
        let b = hash_password("masala").unwrap();
        assert_ne!(a, b, "each hash must use a fresh salt");
    }

    #[test]
    fn argon2_secret_checks_presented_password() {
        let secret = Argon2Secret::new(hash_password("dosa-night").unwrap()).unwrap();
        assert!(secret.verify("dosa-night"));
        assert!(!secret.verify("idli-night"));
    }

    #[test]
    fn argon2_secret_rejects_malformed_hash() {
        assert!(Argon2Secret::new("plaintext-not-a-hash").is_err());
    }
}

use argon2::password_hash;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use crate::errors::HashError;

/// Secret hashing implementation.
///
/// Produces PHC-format Argon2id hashes with a fresh random salt per call,
/// so hashing the same plaintext twice yields two different strings that
/// both verify against the original.
pub struct SecretHasher;

impl SecretHasher {
    /// Create a new hasher configured with the algorithm defaults.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext secret for storage.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to hash
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, secret: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext secret against a stored hash.
    ///
    /// A non-matching secret is `Ok(false)`, not an error.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to verify
    /// * `hash` - Stored hash in PHC string format
    ///
    /// # Errors
    /// * `InvalidHash` - `hash` is not a product of this hasher
    pub fn verify(&self, secret: &str, hash: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| HashError::InvalidHash(e.to_string()))?;

        match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::InvalidHash(e.to_string())),
        }
    }
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = SecretHasher::new();
        let secret = "my_secure_secret";

        let hash = hasher.hash(secret).expect("Failed to hash secret");

        assert!(hasher.verify(secret, &hash).expect("Failed to verify"));
        assert!(!hasher
            .verify("wrong_secret", &hash)
            .expect("Failed to verify"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = SecretHasher::new();
        let secret = "same_secret";

        let first = hasher.hash(secret).expect("Failed to hash secret");
        let second = hasher.hash(secret).expect("Failed to hash secret");

        // Fresh salt per call: different strings, both verifiable
        assert_ne!(first, second);
        assert!(hasher.verify(secret, &first).expect("Failed to verify"));
        assert!(hasher.verify(secret, &second).expect("Failed to verify"));
    }

    #[test]
    fn test_hash_format() {
        let hasher = SecretHasher::new();
        let hash = hasher.hash("secret").expect("Failed to hash secret");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_mismatched_secrets() {
        let hasher = SecretHasher::new();
        let hash = hasher.hash("first_secret").expect("Failed to hash secret");
        assert!(!hasher
            .verify("second_secret", &hash)
            .expect("Failed to verify"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = SecretHasher::new();
        let result = hasher.verify("secret", "not_a_phc_string");
        assert!(matches!(result, Err(HashError::InvalidHash(_))));
    }
}

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

// Well-formed hash with the default cost parameters that no password is known
// to match. Verifying against it costs the same as verifying a real record.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$al5e+Cv3WW/R3gE0gRtgMg$yAlnFjhxvI0u4uI1Es9lsFd81li4HsTZAVsBeanMtW4";

/// Salted, adaptive password hashing (Argon2id).
///
/// Hashes are PHC strings, so the salt and cost parameters travel with the
/// hash and verification needs nothing else.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that cannot be parsed counts as a mismatch, so a corrupted
    /// record behaves like a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        // The parameters come from the PHC string, the default instance only
        // supplies the algorithm implementation.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Run a full verification whose result is discarded.
    ///
    /// Lets a caller with no stored hash spend the same time as one that has a
    /// hash to check.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, DECOY_HASH);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

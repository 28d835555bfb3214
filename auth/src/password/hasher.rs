use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;

use super::errors::PasswordError;

/// Modular-crypt prefixes of bcrypt hashes written by older deployments.
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

/// Argon2id hash of a throwaway password, computed on first use.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Password hashing implementation.
///
/// New hashes are Argon2id PHC strings. Verification also accepts legacy
/// bcrypt hashes so accounts created before the switch keep working.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
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

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The digest comparison is constant-time in both backends. A stored hash
    /// that cannot be parsed never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored hash, Argon2 PHC string or bcrypt modular-crypt string
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        if is_bcrypt(hash) {
            return bcrypt::verify(password, hash).unwrap_or(false);
        }

        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Spend the cost of one Argon2 verification without a stored hash.
    ///
    /// Used when no account matches, so a missing account costs as much time
    /// as a wrong password. Always returns false.
    pub fn dummy_verify(&self, password: &str) -> bool {
        let dummy = DUMMY_HASH.get_or_init(|| self.hash("dummy-password-never-matches").ok());

        if let Some(hash) = dummy {
            let _ = self.verify(password, hash);
        }

        false
    }

    /// Whether a stored hash should be replaced by a fresh Argon2id hash.
    ///
    /// True for legacy bcrypt hashes, other Argon2 variants and anything
    /// unparseable.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        if is_bcrypt(hash) {
            return true;
        }

        match PasswordHash::new(hash) {
            Ok(parsed_hash) => parsed_hash.algorithm != Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_bcrypt(hash: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
}

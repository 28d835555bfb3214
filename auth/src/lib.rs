//! Session authentication primitives
//!
//! Provides the two stateless building blocks of session authentication:
//! - Password hashing (Argon2id, with verification of legacy bcrypt hashes)
//! - Signed, expiring access tokens (JWT over an HMAC algorithm)
//!
//! Neither type touches storage. Credential lookup and token revocation belong
//! to the service that composes them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", "HS256", Duration::minutes(30))
//!     .unwrap();
//! let token = codec.issue("alice@example.com").unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for authentication operations consumed by inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `email` - Email address the user registered with
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Bearer access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    ///
    /// A successful login with a legacy password hash also replaces the stored
    /// hash with a current one. Failing to do so does not fail the login.
    /// * `StoreUnavailable` - Credential store call failed or timed out
    /// * `Encoding` - Token signing failed
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve the user a presented token belongs to.
    ///
    /// # Arguments
    /// * `token` - Bearer token string
    ///
    /// # Returns
    /// User the token was issued to
    ///
    /// # Errors
    /// * `InvalidToken` - Signature check failed or token is malformed
    /// * `ExpiredToken` - Token has expired or has been revoked
    /// * `InvalidCredentials` - Token subject no longer exists
    /// * `StoreUnavailable` - Credential store call failed or timed out
    async fn resolve(&self, token: &str) -> Result<User, AuthError>;

    /// Revoke a token on behalf of its owner.
    ///
    /// # Arguments
    /// * `token` - Token to revoke
    /// * `user` - Owner of the token
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` - Credential store call failed or timed out
    async fn revoke(&self, token: &str, user: &User) -> Result<(), AuthError>;
}

/// Persistence operations for users and revoked tokens.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Check whether `token` has been revoked by the user with `email`.
    ///
    /// Answers `false` both when the token is unknown and when the user is
    /// unknown.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn is_token_blacklisted(&self, token: &str, email: &str) -> Result<bool, AuthError>;

    /// Record `token` as revoked for the user with `user_id`.
    ///
    /// Recording an already revoked token succeeds without adding a second entry.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` - Store operation failed
    async fn add_blacklist_entry(&self, token: &str, user_id: &UserId) -> Result<(), AuthError>;

    /// Replace the stored password hash of the user with `user_id`.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` - Store operation failed
    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &str,
    ) -> Result<(), AuthError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;

use crate::domain::auth::deadline::bounded;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::AuthSettings;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::revocation::RevocationManager;
use crate::domain::user::models::User;

/// Domain service implementation for session authentication.
///
/// Holds no request state: every durable fact lives in the credential store,
/// so one instance can serve any number of concurrent requests.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    token_codec: TokenCodec,
    password_hasher: PasswordHasher,
    revocation: RevocationManager<CS>,
    settings: AuthSettings,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential store implementation
    /// * `token_codec` - Configured token signer/verifier
    /// * `settings` - Store deadline settings
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(store: Arc<CS>, token_codec: TokenCodec, settings: AuthSettings) -> Self {
        Self {
            revocation: RevocationManager::new(Arc::clone(&store), settings),
            store,
            token_codec,
            password_hasher: PasswordHasher::new(),
            settings,
        }
    }

    async fn find_user(&self, email: &str) -> Result<Option<User>, AuthError> {
        bounded(
            self.settings.store_timeout,
            self.store.find_user_by_email(email),
        )
        .await
    }

    /// Store a fresh Argon2id hash for a user who logged in with a legacy one.
    async fn upgrade_password_hash(&self, user: &User, password: &str) {
        let result = match self.password_hasher.hash(password) {
            Ok(hash) => {
                bounded(
                    self.settings.store_timeout,
                    self.store.update_password_hash(&user.id, &hash),
                )
                .await
            }
            Err(e) => Err(AuthError::Encoding(e.to_string())),
        };

        if let Err(e) = result {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to upgrade password hash");
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let Some(user) = self.find_user(email).await? else {
            // Unknown accounts pay for a hash check too
            self.password_hasher.dummy_verify(password);
            return Err(AuthError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        if self.password_hasher.needs_rehash(&user.password_hash) {
            self.upgrade_password_hash(&user, password).await;
        }

        let access_token = self.token_codec.issue(user.email.as_str())?;

        Ok(AccessToken::bearer(access_token))
    }

    async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_codec.verify(token)?;

        let user = self
            .find_user(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let revoked = bounded(
            self.settings.store_timeout,
            self.store.is_token_blacklisted(token, user.email.as_str()),
        )
        .await?;

        if revoked {
            return Err(AuthError::ExpiredToken);
        }

        Ok(user)
    }

    async fn revoke(&self, token: &str, user: &User) -> Result<(), AuthError> {
        self.revocation.revoke(token, user).await
    }
}

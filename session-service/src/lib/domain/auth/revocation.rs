use std::sync::Arc;

use crate::domain::auth::deadline::bounded;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSettings;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::user::models::User;

/// Adds tokens to the blacklist on behalf of their owners.
pub struct RevocationManager<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    settings: AuthSettings,
}

impl<CS> RevocationManager<CS>
where
    CS: CredentialStore,
{
    pub fn new(store: Arc<CS>, settings: AuthSettings) -> Self {
        Self { store, settings }
    }

    /// Blacklist `token` for `user`.
    ///
    /// Revoking an already revoked token is a no-op.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist in the store
    /// * `StoreUnavailable` - Store call failed or timed out
    pub async fn revoke(&self, token: &str, user: &User) -> Result<(), AuthError> {
        bounded(
            self.settings.store_timeout,
            self.store.add_blacklist_entry(token, &user.id),
        )
        .await
    }
}

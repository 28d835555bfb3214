use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::BlacklistEntry;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Credential store kept entirely in process memory.
///
/// Clones share the same underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    /// Map of email -> User
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Map of token -> BlacklistEntry
    blacklist: Arc<RwLock<HashMap<String, BlacklistEntry>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user, keyed by email address.
    pub async fn insert_user(&self, user: User) {
        self.users
            .write()
            .await
            .insert(user.email.as_str().to_string(), user);
    }

    /// Number of revoked tokens currently recorded.
    pub async fn blacklist_len(&self) -> usize {
        self.blacklist.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn is_token_blacklisted(&self, token: &str, email: &str) -> Result<bool, AuthError> {
        let owner = match self.users.read().await.get(email) {
            Some(user) => user.id,
            None => return Ok(false),
        };

        Ok(self
            .blacklist
            .read()
            .await
            .get(token)
            .is_some_and(|entry| entry.user_id == owner))
    }

    async fn add_blacklist_entry(&self, token: &str, user_id: &UserId) -> Result<(), AuthError> {
        let users = self.users.read().await;
        if !users.values().any(|user| user.id == *user_id) {
            return Err(AuthError::NotFound(user_id.to_string()));
        }

        // Hold the user map until the entry is in, so the owner cannot vanish in between
        self.blacklist
            .write()
            .await
            .entry(token.to_string())
            .or_insert_with(|| BlacklistEntry {
                token: token.to_string(),
                user_id: *user_id,
            });

        drop(users);
        Ok(())
    }

    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &str,
    ) -> Result<(), AuthError> {
        let mut users = self.users.write().await;
        let user = users
            .values_mut()
            .find(|user| user.id == *user_id)
            .ok_or_else(|| AuthError::NotFound(user_id.to_string()))?;

        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

use std::time::Duration;

use serde::Serialize;

use crate::domain::user::models::UserId;

/// Token type reported alongside every issued access token.
pub const BEARER: &str = "bearer";

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    /// Wrap a freshly issued token string as a bearer token.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: BEARER.to_string(),
        }
    }
}

/// Revoked token tied to the user it was issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistEntry {
    pub token: String,
    pub user_id: UserId,
}

/// Runtime settings of the authentication core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// Upper bound on every credential store call
    pub store_timeout: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
        }
    }
}

use thiserror::Error;

/// Terminal failure of a login, resolve or revoke request.
///
/// The three authentication failures carry no detail about which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Authentication failures
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    // Revocation failures
    #[error("User not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Whether this error means "the caller is not authenticated" rather than
    /// a server-side failure.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::ExpiredToken
        )
    }
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Expired => AuthError::ExpiredToken,
            auth::TokenError::Invalid(_) => AuthError::InvalidToken,
            other => AuthError::Encoding(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_map_to_auth_errors() {
        assert_eq!(
            AuthError::from(auth::TokenError::Expired),
            AuthError::ExpiredToken
        );
        assert_eq!(
            AuthError::from(auth::TokenError::Invalid("bad signature".to_string())),
            AuthError::InvalidToken
        );
        assert!(matches!(
            AuthError::from(auth::TokenError::Encoding("boom".to_string())),
            AuthError::Encoding(_)
        ));
    }

    #[test]
    fn test_is_unauthenticated() {
        assert!(AuthError::InvalidCredentials.is_unauthenticated());
        assert!(AuthError::InvalidToken.is_unauthenticated());
        assert!(AuthError::ExpiredToken.is_unauthenticated());
        assert!(!AuthError::NotFound("id".to_string()).is_unauthenticated());
        assert!(!AuthError::StoreUnavailable("down".to_string()).is_unauthenticated());
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Revoke the token the request was authenticated with.
pub async fn logout(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<StatusCode, ApiError> {
    state
        .auth_service
        .revoke(&authenticated.token, &authenticated.user)
        .await?;

    tracing::info!(user_id = %authenticated.user.id, "Token revoked");

    Ok(StatusCode::NO_CONTENT)
}

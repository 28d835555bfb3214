use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::auth::models::AccessToken;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a bearer access token.
///
/// The body is the bare `{access_token, token_type}` pair clients of bearer
/// authentication expect, not the usual response envelope.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequestBody>,
) -> Result<Json<AccessToken>, ApiError> {
    let token = state
        .auth_service
        .login(&body.email, &body.password)
        .await
        .map_err(|e| {
            if e.is_unauthenticated() {
                tracing::info!("Login rejected");
            }
            ApiError::from(e)
        })?;

    Ok(Json(token))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequestBody {
    email: String,
    password: String,
}

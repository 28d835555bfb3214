use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved user and the token it presented
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Middleware that resolves bearer tokens and adds the user to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_string();

    let user = state.auth_service.resolve(&token).await.map_err(|e| {
        tracing::warn!(error = %e, "Token resolution failed");
        ApiError::from(e).into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user, token });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            ApiError::not_authenticated().into_response()
        })?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::not_authenticated().into_response())?;

    parse_bearer(auth_str).ok_or_else(|| ApiError::not_authenticated().into_response())
}

/// Extract the token from an `Authorization` value of the form `Bearer <token>`.
///
/// The scheme is matched case-insensitively.
fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

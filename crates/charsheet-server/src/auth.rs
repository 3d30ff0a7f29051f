//! Bearer Token Authentication
//!
//! Route layer for protected endpoints. Requests without a valid token are
//! rejected here and never reach a handler.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::routes::infrastructure_error;
use crate::AppState;

/// Extract the credential from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
/// Validates the Bearer token with the configured IdentityVerifier
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::warn!("Missing or malformed Authorization header");
        return Err((StatusCode::UNAUTHORIZED, "Bearer token required".to_string()));
    };

    let valid = state
        .identity
        .validate(token)
        .await
        .map_err(infrastructure_error)?;

    if valid {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Invalid bearer token attempted");
        Err((StatusCode::UNAUTHORIZED, "Invalid bearer token".to_string()))
    }
}

//! Authentication Routes

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{AuthenticateRequest, TokenResponse};
use crate::routes::infrastructure_error;
use crate::AppState;

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/authenticate",
    request_body = AuthenticateRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, String)> {
    let issued = state
        .auth_service
        .authenticate(&payload.email, &payload.password)
        .await
        .map_err(infrastructure_error)?
        .ok_or((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()))?;

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/authenticate", post(authenticate))
}

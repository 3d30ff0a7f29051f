//! Character Routes
//!
//! HTTP handlers that delegate to CharacterService. Every business outcome
//! is a 200 carrying an envelope. Transport status changes only for
//! infrastructure failures, authentication, and malformed ids under the
//! `bad_request` policy.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use charsheet::{CharacterEnvelope, Envelope};

use crate::config::MalformedIdPolicy;
use crate::models::{CharacterQuery, CreateCharacterRequest};
use crate::routes::infrastructure_error;
use crate::{auth, AppState};

/// Get Character by ID
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    params(
        ("id" = String, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Envelope with the character, or `{}` and a not_found error", body = serde_json::Value),
        (status = 400, description = "Malformed id (only with CHARSHEET_MALFORMED_ID=bad_request)", body = serde_json::Value),
        (status = 500, description = "Internal server error")
    ),
    tag = "Character"
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let envelope = state
        .character_service
        .get_by_raw_id(&raw_id)
        .await
        .map_err(infrastructure_error)?;

    if let Some(envelope) = envelope {
        return Ok(Json(envelope).into_response());
    }

    tracing::warn!("Malformed character id: {}", raw_id);
    let status = match state.config.malformed_id {
        MalformedIdPolicy::NotFound => StatusCode::OK,
        MalformedIdPolicy::BadRequest => StatusCode::BAD_REQUEST,
    };
    Ok((status, Json(Envelope::invalid_identifier(&raw_id))).into_response())
}

/// Find one Character by filter
#[utoipa::path(
    get,
    path = "/api/characters",
    params(CharacterQuery),
    responses(
        (status = 200, description = "Envelope with the most recent matching character, or `{}` and a not_found error", body = serde_json::Value),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = [])),
    tag = "Character"
)]
pub async fn find_character(
    State(state): State<AppState>,
    Query(query): Query<CharacterQuery>,
) -> Result<Json<CharacterEnvelope>, (StatusCode, String)> {
    let envelope = state
        .character_service
        .find_one(query.into())
        .await
        .map_err(infrastructure_error)?;

    Ok(Json(envelope))
}

/// Create Character
#[utoipa::path(
    post,
    path = "/api/characters",
    request_body = CreateCharacterRequest,
    responses(
        (status = 200, description = "Envelope with the created character, or a ValidationFailed envelope", body = serde_json::Value),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = [])),
    tag = "Character"
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<Json<CharacterEnvelope>, (StatusCode, String)> {
    let envelope = state
        .character_service
        .create(payload.data)
        .await
        .map_err(infrastructure_error)?;

    Ok(Json(envelope))
}

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/api/characters",
            get(find_character).post(create_character),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_bearer));

    Router::new()
        .route("/api/characters/:id", get(get_character))
        .merge(protected)
}

//! Charsheet API Routes
//!
//! - /api/characters - Character lookup and creation
//! - /api/authenticate - Bearer token issuance

pub mod authenticate;
pub mod character;
pub mod swagger;

use axum::http::StatusCode;
use charsheet::DomainError;

/// Map a failure the envelope cannot express to a transport error
pub fn infrastructure_error(e: DomainError) -> (StatusCode, String) {
    tracing::error!("Request failed: {}", e);
    let status = match e {
        DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

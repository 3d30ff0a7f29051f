//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credential exchange request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token response
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

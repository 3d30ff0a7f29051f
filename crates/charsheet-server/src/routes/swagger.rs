//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::models::{AuthenticateRequest, CreateCharacterRequest, TokenResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Character endpoints
        super::character::get_character,
        super::character::find_character,
        super::character::create_character,
        // Auth endpoints
        super::authenticate::authenticate,
    ),
    info(
        title = "Charsheet API",
        version = "0.1.0",
        description = "Characters owned by users.\n\nEvery character endpoint answers with a `{status, data, message, errors}` envelope; not-found is a 200 with `data: {}`.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Character", description = "Character lookup and creation"),
        (name = "Auth", description = "Bearer token issuance"),
    ),
    components(
        schemas(
            // Character
            CreateCharacterRequest,
            // Auth
            AuthenticateRequest,
            TokenResponse,
        )
    ),
    modifiers(&BearerSecurity),
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

use anyhow::Context;
use axum::{routing::get, Json, Router};
use charsheet::IdentityVerifier;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{HmacTokenService, PgCharacterRepository, PgDuplicateChecker, PgUserDirectory};
use application::{AuthService, CharacterService};
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub character_service: Arc<CharacterService>,
    pub auth_service: Arc<AuthService>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub config: Arc<ServerConfig>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Charsheet API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let api = Router::new()
        .route("/health", get(health_check))
        .merge(routes::character::router(state.clone()))
        .merge(routes::authenticate::router())
        .with_state(state);

    // `/api/authenticate/` and `/api/authenticate` are the same route.
    // Swagger UI redirects `/swagger-ui` to `/swagger-ui/`, so it stays
    // outside the trimming.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .fallback_service(NormalizePath::trim_trailing_slash(api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📜 Charsheet API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .context("Invalid server configuration")?;

    tracing::info!(
        "🔐 Bearer tokens enabled (ttl {}s, malformed ids -> {:?})",
        config.token_ttl.num_seconds(),
        config.malformed_id
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize adapters and application services
    let tokens = Arc::new(HmacTokenService::new(&config.token_secret, config.token_ttl));
    let users = Arc::new(PgUserDirectory::new(pool.clone()));
    let character_repo = Arc::new(PgCharacterRepository::new(pool.clone()));
    let duplicates = Arc::new(PgDuplicateChecker::new(pool));

    let character_service = Arc::new(CharacterService::new(
        character_repo,
        users.clone(),
        duplicates,
    ));
    let auth_service = Arc::new(AuthService::new(users, tokens.clone()));

    // Create application state
    let state = AppState {
        character_service,
        auth_service,
        identity: tokens,
        config: Arc::new(config),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Charsheet API ready");

    Ok(router.into())
}

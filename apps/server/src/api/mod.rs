//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Root endpoint
        .route("/", get(root))
        // Search API
        .route("/search", post(handlers::search::search))
        .route("/search/autocomplete", get(handlers::search::autocomplete))
        .route("/search/suggest", get(handlers::search::suggest))
        // Search history audit log
        .route("/historial", post(handlers::history::create))
        .route("/historial/:id", get(handlers::history::get_by_id))
        .route(
            "/historial/usuario/:usuario_id",
            get(handlers::history::get_by_usuario_id),
        )
        .with_state(state)
        // Middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        // Limit request body size to prevent DoS via large payloads
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "buscador"
    }))
}

async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "server": "Buscador Search Service",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running"
        })),
    )
}

//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/internalconcordances",
            get(handlers::concordances::internal_concordances),
        )
        // Health endpoints
        .route("/__health", get(handlers::health::health))
        .route("/__gtg", get(handlers::health::gtg))
        // Root endpoint
        .route("/", get(root))
        .with_state(state)
        // Add middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::trace())
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "systemCode": state.config.app.system_code,
        "name": state.config.app.name,
        "description": state.config.app.description,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{categories, health, index};
use crate::state::AppState;

/// Create the router with every public route and the 404 fallback
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .nest("/api", api_routes())
        .fallback(index::not_found)
}

/// Routes mounted under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .merge(health_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

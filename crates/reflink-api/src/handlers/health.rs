//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use reflink_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check with dependency health
///
/// GET /api/health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.database().ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database readiness check failed");
            false
        }
    };

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

//! Service banner and fallback handlers

use axum::Json;
use reflink_service::dto::IndexResponse;

use crate::response::ApiError;

/// Service banner listing the public endpoints
///
/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::current())
}

/// Any route that is not mounted
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

//! Category handlers

use axum::{extract::State, Json};
use reflink_service::dto::CategorySummaryResponse;
use reflink_service::CatalogService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Active categories in display order
///
/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategorySummaryResponse>>> {
    let categories = CatalogService::new(state.service_context())
        .list_active()
        .await?;
    Ok(Json(categories))
}

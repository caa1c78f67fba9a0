//! Test fixtures and data generators
//!
//! Seeds catalog data through the service layer and mirrors the API's
//! response bodies for deserialization.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use reflink_core::value_objects::{CategoryId, LinkId, LinkStatus, UserId};
use reflink_service::dto::{AddCategoryRequest, CategoryResponse, SubmitLinkRequest};
use reflink_service::{CatalogService, ModerationService, ServiceContext, UserService};
use serde::Deserialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique across test runs
pub fn unique_suffix() -> u64 {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as u64)
        .unwrap_or_default();
    started * 1000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create a category with a unique name
pub async fn seed_category(ctx: &ServiceContext, emoji: &str) -> Result<CategoryResponse> {
    let request = AddCategoryRequest {
        name: format!("Category {}", unique_suffix()),
        emoji: Some(emoji.to_string()),
        position: None,
    };
    Ok(CatalogService::new(ctx).add_category(request).await?)
}

/// Create a link in the given status; pending links get a fresh author
pub async fn seed_link(
    ctx: &ServiceContext,
    category_id: CategoryId,
    status: LinkStatus,
) -> Result<LinkId> {
    let suffix = unique_suffix();
    let request = SubmitLinkRequest {
        category_id,
        name: format!("Link {suffix}"),
        url: format!("https://link{suffix}.example"),
        description: None,
    };

    let author = UserId::new(suffix as i64);
    UserService::new(ctx).touch(author, Some("tester"), None).await?;

    let moderation = ModerationService::new(ctx);
    let id = moderation.submit_link(author, request).await?;
    match status {
        LinkStatus::Pending => {}
        LinkStatus::Approved => {
            moderation.approve(id).await?;
        }
        LinkStatus::Rejected => {
            moderation.reject(id, None).await?;
        }
    }
    Ok(id)
}

/// Body of `GET /api/categories` entries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub emoji: String,
}

/// Body of `GET /`
#[derive(Debug, Deserialize)]
pub struct IndexBody {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Body of every error response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

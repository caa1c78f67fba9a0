//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain
//! JSON numbers.

use chrono::{DateTime, Utc};
use reflink_core::value_objects::{CategoryId, LinkId, LinkStatus, UserId};
use serde::Serialize;

// ============================================================================
// Category Responses
// ============================================================================

/// Public projection of an active category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummaryResponse {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
}

/// Full category view for administration
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
    pub position: i32,
    pub is_active: bool,
    /// Approved links; only present on listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Link Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionCountsResponse {
    pub total: i64,
    pub thumbs_up: i64,
    pub thumbs_down: i64,
    pub fire: i64,
    pub heart: i64,
}

/// Link as shown inside a category
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub id: LinkId,
    pub category_id: CategoryId,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: LinkStatus,
    pub clicks_count: i64,
    pub reactions: ReactionCountsResponse,
    pub created_at: DateTime<Utc>,
}

/// Entry of the moderation queue
#[derive(Debug, Clone, Serialize)]
pub struct PendingLinkResponse {
    pub id: LinkId,
    pub category_id: CategoryId,
    pub category_name: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author_id: Option<UserId>,
    /// First name, falling back to `@username`
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of a moderation decision
#[derive(Debug, Clone, Serialize)]
pub struct ModerationResponse {
    pub id: LinkId,
    pub name: String,
    pub status: LinkStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Submitter to notify, if any
    pub author_id: Option<UserId>,
}

// ============================================================================
// Statistics Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_categories: i64,
    pub total_links: i64,
    pub pending_links: i64,
    pub total_clicks: i64,
    pub total_reactions: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopLinkResponse {
    pub id: LinkId,
    pub name: String,
    pub url: String,
    pub clicks_count: i64,
    pub category: Option<String>,
}

// ============================================================================
// Mini-app Responses
// ============================================================================

/// Outcome of a mini-app payload
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum WebAppResponse {
    LinkSubmitted { link_id: LinkId },
    CategoryAdded { category: CategoryResponse },
}

// ============================================================================
// Service Responses
// ============================================================================

/// Liveness response; the body is fixed
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Service banner served at `/`
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 2],
}

impl IndexResponse {
    pub fn current() -> Self {
        Self {
            message: "Referral Links Bot API",
            version: "1.0",
            endpoints: ["/api/categories", "/api/health"],
        }
    }
}

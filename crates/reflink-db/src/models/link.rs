//! Link database models
//!
//! Every read of links is a join, so each view has its own row model that
//! flattens `LinkModel` plus the joined columns.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub id: i64,
    pub category_id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Status: 'pending', 'approved' or 'rejected'
    pub status: String,
    pub rejection_reason: Option<String>,
    pub clicks_count: i64,
    pub moderated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated reaction columns
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReactionCountsModel {
    pub reactions_count: i64,
    pub thumbs_up: i64,
    pub thumbs_down: i64,
    pub fire: i64,
    pub heart: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct LinkWithCategoryModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LinkWithReactionsModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    #[sqlx(flatten)]
    pub reactions: ReactionCountsModel,
}

#[derive(Debug, Clone, FromRow)]
pub struct LinkDetailsModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub author_username: Option<String>,
    pub author_name: Option<String>,
    #[sqlx(flatten)]
    pub reactions: ReactionCountsModel,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserLinkModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub reactions_count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PendingLinkModel {
    #[sqlx(flatten)]
    pub link: LinkModel,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub author_username: Option<String>,
    pub author_name: Option<String>,
}

//! Aggregate query rows

use sqlx::FromRow;

#[derive(Debug, Clone, Copy, FromRow)]
pub struct GlobalStatsModel {
    pub total_users: i64,
    pub total_categories: i64,
    pub total_links: i64,
    pub pending_links: i64,
    pub total_clicks: i64,
    pub total_reactions: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TopLinkModel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub clicks_count: i64,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
}

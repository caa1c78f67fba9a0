//! Aggregate statistics

use crate::value_objects::LinkId;

/// Catalog-wide counters, computed in one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalStats {
    pub total_users: i64,
    /// Active categories only
    pub total_categories: i64,
    /// Approved links only
    pub total_links: i64,
    pub pending_links: i64,
    pub total_clicks: i64,
    pub total_reactions: i64,
}

/// Entry of the most-clicked ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLink {
    pub id: LinkId,
    pub name: String,
    pub url: String,
    pub clicks_count: i64,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
}

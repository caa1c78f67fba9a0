//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use reflink_core::entities::{
    Category, CategoryWithCount, GlobalStats, LinkDetails, LinkWithReactions, PendingLink,
    ReactionCounts, TopLink,
};

use super::responses::{
    CategoryResponse, CategorySummaryResponse, LinkResponse, ModerationResponse,
    PendingLinkResponse, ReactionCountsResponse, StatsResponse, TopLinkResponse,
};

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategorySummaryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            emoji: category.emoji.clone(),
        }
    }
}

impl From<CategoryWithCount> for CategorySummaryResponse {
    fn from(entry: CategoryWithCount) -> Self {
        Self::from(&entry.category)
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            emoji: category.emoji,
            position: category.position,
            is_active: category.is_active,
            links_count: None,
            created_at: category.created_at,
        }
    }
}

impl From<CategoryWithCount> for CategoryResponse {
    fn from(entry: CategoryWithCount) -> Self {
        Self {
            links_count: Some(entry.links_count),
            ..Self::from(entry.category)
        }
    }
}

// ============================================================================
// Link Mappers
// ============================================================================

impl From<ReactionCounts> for ReactionCountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            total: counts.total,
            thumbs_up: counts.thumbs_up,
            thumbs_down: counts.thumbs_down,
            fire: counts.fire,
            heart: counts.heart,
        }
    }
}

impl From<LinkWithReactions> for LinkResponse {
    fn from(row: LinkWithReactions) -> Self {
        let link = row.link;
        Self {
            id: link.id,
            category_id: link.category_id,
            name: link.name,
            url: link.url,
            description: link.description,
            status: link.status,
            clicks_count: link.clicks_count,
            reactions: row.reactions.into(),
            created_at: link.created_at,
        }
    }
}

impl From<PendingLink> for PendingLinkResponse {
    fn from(row: PendingLink) -> Self {
        let author = row
            .author_name
            .filter(|name| !name.is_empty())
            .or_else(|| row.author_username.map(|username| format!("@{username}")));
        let link = row.link;
        Self {
            id: link.id,
            category_id: link.category_id,
            category_name: row.category_name,
            name: link.name,
            url: link.url,
            description: link.description,
            author_id: link.user_id,
            author,
            created_at: link.created_at,
        }
    }
}

impl From<LinkDetails> for ModerationResponse {
    fn from(details: LinkDetails) -> Self {
        let link = details.link;
        Self {
            id: link.id,
            name: link.name,
            status: link.status,
            rejection_reason: link.rejection_reason,
            author_id: link.user_id,
        }
    }
}

// ============================================================================
// Statistics Mappers
// ============================================================================

impl From<GlobalStats> for StatsResponse {
    fn from(stats: GlobalStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_categories: stats.total_categories,
            total_links: stats.total_links,
            pending_links: stats.pending_links,
            total_clicks: stats.total_clicks,
            total_reactions: stats.total_reactions,
        }
    }
}

impl From<TopLink> for TopLinkResponse {
    fn from(top: TopLink) -> Self {
        let category = match (top.category_emoji, top.category_name) {
            (Some(emoji), Some(name)) => Some(format!("{emoji} {name}")),
            (None, Some(name)) => Some(name),
            _ => None,
        };
        Self {
            id: top.id,
            name: top.name,
            url: top.url,
            clicks_count: top.clicks_count,
            category,
        }
    }
}

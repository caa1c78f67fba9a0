//! Statistics mapper

use reflink_core::entities::{GlobalStats, TopLink};
use reflink_core::value_objects::LinkId;

use crate::models::{GlobalStatsModel, TopLinkModel};

impl From<GlobalStatsModel> for GlobalStats {
    fn from(model: GlobalStatsModel) -> Self {
        GlobalStats {
            total_users: model.total_users,
            total_categories: model.total_categories,
            total_links: model.total_links,
            pending_links: model.pending_links,
            total_clicks: model.total_clicks,
            total_reactions: model.total_reactions,
        }
    }
}

impl From<TopLinkModel> for TopLink {
    fn from(model: TopLinkModel) -> Self {
        TopLink {
            id: LinkId::new(model.id),
            name: model.name,
            url: model.url,
            clicks_count: model.clicks_count,
            category_name: model.category_name,
            category_emoji: model.category_emoji,
        }
    }
}

//! Link entity <-> model mapper

use reflink_core::entities::{
    Link, LinkDetails, LinkWithCategory, LinkWithReactions, PendingLink, ReactionCounts, UserLink,
};
use reflink_core::value_objects::{CategoryId, LinkId, LinkStatus, UserId};

use crate::models::{
    LinkDetailsModel, LinkModel, LinkWithCategoryModel, LinkWithReactionsModel, PendingLinkModel,
    ReactionCountsModel, UserLinkModel,
};

/// Convert a stored status string; unknown values are kept out of the catalog
pub fn parse_link_status(status: &str) -> LinkStatus {
    LinkStatus::parse(status).unwrap_or(LinkStatus::Pending)
}

impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            id: LinkId::new(model.id),
            category_id: CategoryId::new(model.category_id),
            user_id: model.user_id.map(UserId::new),
            name: model.name,
            url: model.url,
            description: model.description,
            status: parse_link_status(&model.status),
            rejection_reason: model.rejection_reason,
            clicks_count: model.clicks_count,
            moderated_at: model.moderated_at,
            created_at: model.created_at,
        }
    }
}

impl From<ReactionCountsModel> for ReactionCounts {
    fn from(model: ReactionCountsModel) -> Self {
        ReactionCounts {
            total: model.reactions_count,
            thumbs_up: model.thumbs_up,
            thumbs_down: model.thumbs_down,
            fire: model.fire,
            heart: model.heart,
        }
    }
}

impl From<LinkWithCategoryModel> for LinkWithCategory {
    fn from(model: LinkWithCategoryModel) -> Self {
        LinkWithCategory {
            link: model.link.into(),
            category_name: model.category_name,
            category_emoji: model.category_emoji,
        }
    }
}

impl From<LinkWithReactionsModel> for LinkWithReactions {
    fn from(model: LinkWithReactionsModel) -> Self {
        LinkWithReactions {
            link: model.link.into(),
            category_name: model.category_name,
            category_emoji: model.category_emoji,
            reactions: model.reactions.into(),
        }
    }
}

impl From<LinkDetailsModel> for LinkDetails {
    fn from(model: LinkDetailsModel) -> Self {
        LinkDetails {
            link: model.link.into(),
            category_name: model.category_name,
            category_emoji: model.category_emoji,
            author_username: model.author_username,
            author_name: model.author_name,
            reactions: model.reactions.into(),
        }
    }
}

impl From<UserLinkModel> for UserLink {
    fn from(model: UserLinkModel) -> Self {
        UserLink {
            link: model.link.into(),
            category_name: model.category_name,
            category_emoji: model.category_emoji,
            reactions_count: model.reactions_count,
        }
    }
}

impl From<PendingLinkModel> for PendingLink {
    fn from(model: PendingLinkModel) -> Self {
        PendingLink {
            link: model.link.into(),
            category_name: model.category_name,
            category_emoji: model.category_emoji,
            author_username: model.author_username,
            author_name: model.author_name,
        }
    }
}

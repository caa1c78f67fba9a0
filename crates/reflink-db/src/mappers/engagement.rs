//! Click and reaction entity <-> model mapper

use reflink_core::entities::{Click, Reaction};
use reflink_core::value_objects::{LinkId, UserId};

use crate::models::{ClickModel, ReactionModel};

impl From<ClickModel> for Click {
    fn from(model: ClickModel) -> Self {
        Click {
            id: model.id,
            link_id: LinkId::new(model.link_id),
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
        }
    }
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            link_id: LinkId::new(model.link_id),
            user_id: UserId::new(model.user_id),
            emoji: model.reaction,
            created_at: model.created_at,
        }
    }
}

//! Engagement entities - clicks and reactions

use chrono::{DateTime, Utc};

use crate::value_objects::{LinkId, ReactionKind, UserId};

/// Immutable click event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub id: i64,
    pub link_id: LinkId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A user's reaction to a link; at most one per (link, user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub link_id: LinkId,
    pub user_id: UserId,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Tracked kind of this reaction, if it is one of the four
    #[inline]
    pub fn kind(&self) -> Option<ReactionKind> {
        ReactionKind::from_emoji(&self.emoji)
    }
}

//! Tracked reaction kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four reaction kinds aggregated per link.
///
/// Reactions are stored as their emoji; any other emoji is still counted in
/// `reactions_count` but not broken out per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    ThumbsUp,
    ThumbsDown,
    Fire,
    Heart,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::ThumbsUp,
        ReactionKind::ThumbsDown,
        ReactionKind::Fire,
        ReactionKind::Heart,
    ];

    /// Stored emoji value
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::ThumbsDown => "👎",
            Self::Fire => "🔥",
            Self::Heart => "❤️",
        }
    }

    /// Column alias used by aggregate queries
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::ThumbsUp => "thumbs_up",
            Self::ThumbsDown => "thumbs_down",
            Self::Fire => "fire",
            Self::Heart => "heart",
        }
    }

    /// Look up a kind by its emoji
    #[must_use]
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.emoji() == emoji)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

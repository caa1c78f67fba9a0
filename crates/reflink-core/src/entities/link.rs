//! Link entity - a referral link inside a category

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryId, LinkId, LinkStatus, Patch, ReactionKind, UserId};

/// Link entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub category_id: CategoryId,
    pub user_id: Option<UserId>,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub status: LinkStatus,
    pub rejection_reason: Option<String>,
    pub clicks_count: i64,
    pub moderated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub category_id: CategoryId,
    pub user_id: Option<UserId>,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub status: LinkStatus,
}

impl NewLink {
    /// New approved link with no author
    pub fn new(category_id: CategoryId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            category_id,
            user_id: None,
            name: name.into(),
            url: url.into(),
            description: None,
            status: LinkStatus::default(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_author(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: LinkStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial link update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl LinkPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
    }

    /// Column assignments for the supplied fields
    #[must_use]
    pub fn to_patch(&self) -> Patch {
        Patch::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("url", self.url.as_deref())
            .set_opt("description", self.description.as_deref())
            .set_opt("category_id", self.category_id.map(CategoryId::into_inner))
    }
}

/// Reaction totals for one link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionCounts {
    /// All reactions, including untracked emoji
    pub total: i64,
    pub thumbs_up: i64,
    pub thumbs_down: i64,
    pub fire: i64,
    pub heart: i64,
}

impl ReactionCounts {
    #[must_use]
    pub fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::ThumbsDown => self.thumbs_down,
            ReactionKind::Fire => self.fire,
            ReactionKind::Heart => self.heart,
        }
    }
}

/// Link joined with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWithCategory {
    pub link: Link,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
}

/// Link joined with its category and reaction totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWithReactions {
    pub link: Link,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub reactions: ReactionCounts,
}

/// Full link view: category, author identity and reaction totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDetails {
    pub link: Link,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub author_username: Option<String>,
    pub author_name: Option<String>,
    pub reactions: ReactionCounts,
}

/// A link as listed for its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLink {
    pub link: Link,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub reactions_count: i64,
}

/// Entry of the moderation queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLink {
    pub link: Link,
    pub category_name: Option<String>,
    pub category_emoji: Option<String>,
    pub author_username: Option<String>,
    pub author_name: Option<String>,
}

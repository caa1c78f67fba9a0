//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Reads report absence as `None` or an empty
//! `Vec`; mutations report whether a row was touched. Store failures are
//! returned, never swallowed.

use async_trait::async_trait;

use crate::entities::{
    Category, CategoryPatch, CategoryWithCount, Click, GlobalStats, LinkDetails, LinkPatch,
    LinkWithCategory, LinkWithReactions, NewCategory, NewLink, PendingLink, Reaction, TopLink,
    User, UserLink,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, LinkId, LinkStatus, UserId, UserRole};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or refresh username and first name if it exists.
    /// `role` only applies to the first insert.
    async fn upsert(
        &self,
        id: UserId,
        username: Option<&str>,
        first_name: Option<&str>,
        role: UserRole,
    ) -> RepoResult<()>;

    /// Find user by external id
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category and return its generated id
    async fn create(&self, category: &NewCategory) -> RepoResult<CategoryId>;

    /// List categories ordered by position then id, each with its approved link count
    async fn find_all(&self, only_active: bool) -> RepoResult<Vec<CategoryWithCount>>;

    /// Find category by id
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// Apply the supplied fields; an empty patch issues no statement and returns `false`
    async fn update(&self, id: CategoryId, patch: &CategoryPatch) -> RepoResult<bool>;

    /// Flip the active flag
    async fn toggle_active(&self, id: CategoryId) -> RepoResult<bool>;

    /// Delete unconditionally; links of the category are left in place
    async fn delete(&self, id: CategoryId) -> RepoResult<bool>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Insert a link and return its generated id.
    /// Fails with `CategoryNotFound` when the category does not exist.
    async fn create(&self, link: &NewLink) -> RepoResult<LinkId>;

    /// Links of a category in the given status with reaction totals, newest first
    async fn find_by_category(
        &self,
        category_id: CategoryId,
        status: LinkStatus,
    ) -> RepoResult<Vec<LinkWithReactions>>;

    /// All links, optionally filtered by status, newest first
    async fn find_all(&self, status: Option<LinkStatus>) -> RepoResult<Vec<LinkWithCategory>>;

    /// Link with category, author identity and reaction totals
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<LinkDetails>>;

    /// Every link owned by a user regardless of status, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<UserLink>>;

    /// Moderation queue: pending links, oldest first
    async fn find_pending(&self) -> RepoResult<Vec<PendingLink>>;

    /// Apply the supplied fields; an empty patch issues no statement and returns `false`.
    /// Moving to another category fails with `CategoryNotFound` when it does not exist.
    async fn update(&self, id: LinkId, patch: &LinkPatch) -> RepoResult<bool>;

    /// Set status, rejection reason and moderation timestamp in one statement
    async fn set_status(
        &self,
        id: LinkId,
        status: LinkStatus,
        rejection_reason: Option<&str>,
    ) -> RepoResult<bool>;

    /// Like `set_status`, but only while the link is still `pending`.
    /// Returns `false` when the link is missing or was already moderated.
    async fn transition_pending(
        &self,
        id: LinkId,
        status: LinkStatus,
        rejection_reason: Option<&str>,
    ) -> RepoResult<bool>;

    /// Delete unconditionally
    async fn delete(&self, id: LinkId) -> RepoResult<bool>;
}

// ============================================================================
// Click Repository
// ============================================================================

#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Append a click event and bump the link's counter atomically
    async fn record(&self, link_id: LinkId, user_id: UserId) -> RepoResult<()>;

    /// Number of click events for a link
    async fn count_for_link(&self, link_id: LinkId) -> RepoResult<i64>;

    /// Click events of a link, oldest first
    async fn find_by_link(&self, link_id: LinkId) -> RepoResult<Vec<Click>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert or replace the user's reaction on a link
    async fn upsert(&self, link_id: LinkId, user_id: UserId, emoji: &str) -> RepoResult<()>;

    /// The user's current reaction on a link
    async fn find_for_user(&self, link_id: LinkId, user_id: UserId) -> RepoResult<Option<String>>;

    /// Number of reactions on a link
    async fn count_for_link(&self, link_id: LinkId) -> RepoResult<i64>;

    /// All reactions on a link, oldest first
    async fn find_by_link(&self, link_id: LinkId) -> RepoResult<Vec<Reaction>>;
}

// ============================================================================
// Stats Repository
// ============================================================================

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Catalog-wide counters
    async fn global(&self) -> RepoResult<GlobalStats>;

    /// Most-clicked approved links, ties broken by id
    async fn top_links(&self, limit: i64) -> RepoResult<Vec<TopLink>>;
}

//! Engagement service
//!
//! Clicks and reactions on published links.

use reflink_core::entities::LinkDetails;
use reflink_core::value_objects::{LinkId, ReactionKind, UserId};
use tracing::{debug, info, instrument};

use crate::dto::ReactionCountsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a click and return the URL to open
    #[instrument(skip(self))]
    pub async fn click(&self, link_id: LinkId, user_id: UserId) -> ServiceResult<String> {
        let details = self.published(link_id).await?;
        self.ctx.click_repo().record(link_id, user_id).await?;
        debug!(link_id = %link_id, user_id = %user_id, "Click recorded");
        Ok(details.link.url)
    }

    /// Set the user's reaction, replacing any earlier one, and return the new totals
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        link_id: LinkId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionCountsResponse> {
        self.published(link_id).await?;
        self.ctx
            .reaction_repo()
            .upsert(link_id, user_id, kind.emoji())
            .await?;
        info!(link_id = %link_id, user_id = %user_id, reaction = %kind, "Reaction set");

        let details = self.published(link_id).await?;
        Ok(details.reactions.into())
    }

    /// The user's current reaction, if it is one of the tracked kinds
    #[instrument(skip(self))]
    pub async fn reaction_of(
        &self,
        link_id: LinkId,
        user_id: UserId,
    ) -> ServiceResult<Option<ReactionKind>> {
        let emoji = self
            .ctx
            .reaction_repo()
            .find_for_user(link_id, user_id)
            .await?;
        Ok(emoji.as_deref().and_then(ReactionKind::from_emoji))
    }

    /// Approved link or `NotFound`
    async fn published(&self, link_id: LinkId) -> ServiceResult<LinkDetails> {
        self.ctx
            .link_repo()
            .find_by_id(link_id)
            .await?
            .filter(|details| details.link.status.is_visible())
            .ok_or_else(|| ServiceError::not_found("Link", link_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryStore;
    use reflink_core::entities::{NewCategory, NewLink};
    use reflink_core::value_objects::{LinkStatus, UserRole};

    async fn seed_link(ctx: &ServiceContext, status: LinkStatus) -> LinkId {
        let category_id = ctx
            .category_repo()
            .create(&NewCategory::new("Tools"))
            .await
            .unwrap();
        ctx.link_repo()
            .create(&NewLink::new(category_id, "Example", "https://example.com").with_status(status))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_click_returns_url_and_counts() {
        let store = InMemoryStore::new();
        let user = store.add_user(5, UserRole::User);
        let ctx = store.context();
        let link_id = seed_link(&ctx, LinkStatus::Approved).await;
        let service = EngagementService::new(&ctx);

        for _ in 0..3 {
            let url = service.click(link_id, user).await.unwrap();
            assert_eq!(url, "https://example.com");
        }

        assert_eq!(store.link(link_id).unwrap().clicks_count, 3);
        assert_eq!(ctx.click_repo().count_for_link(link_id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_click_pending_link_not_found() {
        let store = InMemoryStore::new();
        let user = store.add_user(5, UserRole::User);
        let ctx = store.context();
        let link_id = seed_link(&ctx, LinkStatus::Pending).await;

        let err = EngagementService::new(&ctx)
            .click(link_id, user)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(store.link(link_id).unwrap().clicks_count, 0);
    }

    #[tokio::test]
    async fn test_react_replaces_previous() {
        let store = InMemoryStore::new();
        let user = store.add_user(5, UserRole::User);
        let other = store.add_user(6, UserRole::User);
        let ctx = store.context();
        let link_id = seed_link(&ctx, LinkStatus::Approved).await;
        let service = EngagementService::new(&ctx);

        service.react(link_id, user, ReactionKind::Fire).await.unwrap();
        service.react(link_id, other, ReactionKind::Fire).await.unwrap();
        let counts = service
            .react(link_id, user, ReactionKind::Heart)
            .await
            .unwrap();

        assert_eq!(
            counts,
            ReactionCountsResponse {
                total: 2,
                thumbs_up: 0,
                thumbs_down: 0,
                fire: 1,
                heart: 1,
            }
        );
        assert_eq!(
            service.reaction_of(link_id, user).await.unwrap(),
            Some(ReactionKind::Heart)
        );
    }

    #[tokio::test]
    async fn test_reaction_of_without_reaction() {
        let store = InMemoryStore::new();
        let user = store.add_user(5, UserRole::User);
        let ctx = store.context();
        let link_id = seed_link(&ctx, LinkStatus::Approved).await;

        let reaction = EngagementService::new(&ctx)
            .reaction_of(link_id, user)
            .await
            .unwrap();
        assert!(reaction.is_none());
    }

    #[tokio::test]
    async fn test_react_missing_link() {
        let store = InMemoryStore::new();
        let user = store.add_user(5, UserRole::User);
        let ctx = store.context();

        let err = EngagementService::new(&ctx)
            .react(LinkId::new(9), user, ReactionKind::ThumbsUp)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}

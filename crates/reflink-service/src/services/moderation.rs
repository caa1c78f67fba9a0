//! Moderation service
//!
//! User submissions enter the queue as `pending`; admins approve or reject
//! them. Links added by an admin skip the queue.

use reflink_core::entities::NewLink;
use reflink_core::value_objects::{LinkId, LinkStatus, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ModerationResponse, PendingLinkResponse, SubmitLinkRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Queue a user's link for review
    #[instrument(skip(self, request), fields(category_id = %request.category_id))]
    pub async fn submit_link(
        &self,
        author: UserId,
        request: SubmitLinkRequest,
    ) -> ServiceResult<LinkId> {
        let link = Self::build_link(request)?
            .with_author(author)
            .with_status(LinkStatus::Pending);

        let id = self.ctx.link_repo().create(&link).await?;
        info!(link_id = %id, author = %author, "Link submitted for moderation");
        Ok(id)
    }

    /// Publish a link directly on behalf of an admin
    #[instrument(skip(self, request), fields(category_id = %request.category_id))]
    pub async fn add_link(&self, admin: UserId, request: SubmitLinkRequest) -> ServiceResult<LinkId> {
        UserService::new(self.ctx).require_admin(admin).await?;

        let link = Self::build_link(request)?
            .with_author(admin)
            .with_status(LinkStatus::Approved);

        let id = self.ctx.link_repo().create(&link).await?;
        info!(link_id = %id, admin = %admin, "Link added");
        Ok(id)
    }

    /// Pending links, oldest first
    #[instrument(skip(self))]
    pub async fn queue(&self) -> ServiceResult<Vec<PendingLinkResponse>> {
        let pending = self.ctx.link_repo().find_pending().await?;
        Ok(pending.into_iter().map(PendingLinkResponse::from).collect())
    }

    /// Approve a pending link
    #[instrument(skip(self))]
    pub async fn approve(&self, link_id: LinkId) -> ServiceResult<ModerationResponse> {
        self.moderate(link_id, LinkStatus::Approved, None).await
    }

    /// Reject a pending link; a blank reason is stored as none
    #[instrument(skip(self))]
    pub async fn reject(
        &self,
        link_id: LinkId,
        reason: Option<String>,
    ) -> ServiceResult<ModerationResponse> {
        let reason = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());
        self.moderate(link_id, LinkStatus::Rejected, reason.as_deref())
            .await
    }

    async fn moderate(
        &self,
        link_id: LinkId,
        status: LinkStatus,
        reason: Option<&str>,
    ) -> ServiceResult<ModerationResponse> {
        let moved = self
            .ctx
            .link_repo()
            .transition_pending(link_id, status, reason)
            .await?;
        if !moved {
            // Either missing or moderated first by someone else
            return match self.ctx.link_repo().find_by_id(link_id).await? {
                Some(current) => Err(ServiceError::conflict(format!(
                    "link {link_id} is already {}",
                    current.link.status
                ))),
                None => Err(ServiceError::not_found("Link", link_id)),
            };
        }
        info!(link_id = %link_id, status = %status, "Link moderated");

        self.ctx
            .link_repo()
            .find_by_id(link_id)
            .await?
            .map(ModerationResponse::from)
            .ok_or_else(|| ServiceError::not_found("Link", link_id))
    }

    fn build_link(request: SubmitLinkRequest) -> ServiceResult<NewLink> {
        request.validate()?;

        let description = request
            .description
            .map(|description| description.trim().to_string())
            .filter(|description| !description.is_empty());
        Ok(
            NewLink::new(request.category_id, request.name.trim(), request.url.trim())
                .with_description(description),
        )
    }
}

//! Mini-app payload handling
//!
//! The chat client's embedded web app posts one JSON object per action,
//! tagged by `action`. The sender is recorded before the action runs.

use tracing::{info, instrument, warn};

use crate::dto::{WebAppPayload, WebAppResponse};

use super::catalog::CatalogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::moderation::ModerationService;
use super::user::UserService;

/// Web app service
pub struct WebAppService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebAppService<'a> {
    /// Create a new WebAppService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Decode and dispatch a raw payload
    #[instrument(skip(self, raw))]
    pub async fn handle_json(&self, raw: &str) -> ServiceResult<WebAppResponse> {
        let payload: WebAppPayload = serde_json::from_str(raw).map_err(|e| {
            warn!(error = %e, "Rejected web app payload");
            ServiceError::validation(format!("invalid web app payload: {e}"))
        })?;
        self.handle(payload).await
    }

    /// Dispatch a decoded payload
    #[instrument(skip(self, payload), fields(user_id = %payload.user().user_id))]
    pub async fn handle(&self, payload: WebAppPayload) -> ServiceResult<WebAppResponse> {
        let sender = payload.user();
        let users = UserService::new(self.ctx);
        users
            .touch(
                sender.user_id,
                sender.username.as_deref(),
                sender.first_name.as_deref(),
            )
            .await?;

        match payload {
            WebAppPayload::SubmitLink(submit) => {
                let link_id = ModerationService::new(self.ctx)
                    .submit_link(submit.user.user_id, submit.link)
                    .await?;
                info!(link_id = %link_id, "Web app link submitted");
                Ok(WebAppResponse::LinkSubmitted { link_id })
            }
            WebAppPayload::AddCategory(add) => {
                users.require_admin(add.user.user_id).await?;
                let category = CatalogService::new(self.ctx)
                    .add_category(add.category)
                    .await?;
                info!(category_id = %category.id, "Web app category added");
                Ok(WebAppResponse::CategoryAdded { category })
            }
        }
    }
}

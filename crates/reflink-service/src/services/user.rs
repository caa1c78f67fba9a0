//! User service
//!
//! Keeps the user table in step with the chat platform and answers role checks.

use reflink_core::entities::User;
use reflink_core::value_objects::{UserId, UserRole};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record the user's latest display names, creating them as a plain user
    #[instrument(skip(self))]
    pub async fn touch(
        &self,
        id: UserId,
        username: Option<&str>,
        first_name: Option<&str>,
    ) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .upsert(id, username, first_name, UserRole::User)
            .await?;
        debug!(user_id = %id, "User touched");
        Ok(())
    }

    /// Get a user by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// Fail unless the user exists and is an admin
    #[instrument(skip(self))]
    pub async fn require_admin(&self, id: UserId) -> ServiceResult<User> {
        match self.ctx.user_repo().find_by_id(id).await? {
            Some(user) if user.is_admin() => Ok(user),
            _ => {
                warn!(user_id = %id, "Admin action refused");
                Err(ServiceError::permission_denied("ADMIN"))
            }
        }
    }
}

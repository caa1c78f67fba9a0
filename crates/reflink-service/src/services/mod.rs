//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate repository calls,
//! validation and role checks for the bot and the HTTP layer.

pub mod catalog;
pub mod context;
pub mod engagement;
pub mod error;
pub mod moderation;
pub mod stats;
pub mod user;
pub mod webapp;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use stats::{StatsService, DEFAULT_TOP_LINKS};
pub use user::UserService;
pub use webapp::WebAppService;

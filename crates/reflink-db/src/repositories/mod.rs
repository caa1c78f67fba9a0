//! Repository implementations - PostgreSQL implementations of domain repository traits

mod category;
mod click;
pub(crate) mod error;
mod link;
mod reaction;
mod stats;
mod user;

pub use category::PgCategoryRepository;
pub use click::PgClickRepository;
pub use link::PgLinkRepository;
pub use reaction::PgReactionRepository;
pub use stats::PgStatsRepository;
pub use user::PgUserRepository;

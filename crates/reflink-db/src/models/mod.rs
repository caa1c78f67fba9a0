//! Database models - SQLx-compatible structs for PostgreSQL rows

mod category;
mod engagement;
mod link;
mod stats;
mod user;

pub use category::{CategoryModel, CategoryWithCountModel};
pub use engagement::{ClickModel, ReactionModel};
pub use link::{
    LinkDetailsModel, LinkModel, LinkWithCategoryModel, LinkWithReactionsModel, PendingLinkModel,
    ReactionCountsModel, UserLinkModel,
};
pub use stats::{GlobalStatsModel, TopLinkModel};
pub use user::UserModel;

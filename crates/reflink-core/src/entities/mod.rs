//! Domain entities - core business objects

mod category;
mod engagement;
mod link;
mod stats;
mod user;

pub use category::{Category, CategoryPatch, CategoryWithCount, NewCategory, DEFAULT_CATEGORY_EMOJI};
pub use engagement::{Click, Reaction};
pub use link::{
    Link, LinkDetails, LinkPatch, LinkWithCategory, LinkWithReactions, NewLink, PendingLink,
    ReactionCounts, UserLink,
};
pub use stats::{GlobalStats, TopLink};
pub use user::User;

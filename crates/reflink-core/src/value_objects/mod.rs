//! Value objects - immutable types that represent domain concepts

mod ids;
mod link_status;
mod patch;
mod reaction_kind;

pub use ids::{CategoryId, IdParseError, LinkId, UserId};
pub use link_status::{LinkStatus, UserRole};
pub use patch::{Patch, PatchValue};
pub use reaction_kind::ReactionKind;

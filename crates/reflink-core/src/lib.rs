//! # reflink-core
//!
//! Domain layer for the referral-link catalog: entities, value objects,
//! repository traits and the sparse update description shared by the
//! storage layer. This crate has no dependency on the database or web stack.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Category, CategoryPatch, CategoryWithCount, Click, GlobalStats, Link, LinkDetails, LinkPatch,
    LinkWithCategory, LinkWithReactions, NewCategory, NewLink, PendingLink, Reaction,
    ReactionCounts, TopLink, User, UserLink,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, ClickRepository, LinkRepository, ReactionRepository, RepoResult,
    StatsRepository, UserRepository,
};
pub use value_objects::{
    CategoryId, IdParseError, LinkId, LinkStatus, Patch, PatchValue, ReactionKind, UserId,
    UserRole,
};

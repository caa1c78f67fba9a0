//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryRepository, ClickRepository, LinkRepository, ReactionRepository, RepoResult,
    StatsRepository, UserRepository,
};

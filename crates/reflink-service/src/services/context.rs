//! Service context - dependency container for services
//!
//! Holds the database handle and every repository the services need.

use std::sync::Arc;

use reflink_core::traits::{
    CategoryRepository, ClickRepository, LinkRepository, ReactionRepository, StatsRepository,
    UserRepository,
};
use reflink_db::{Database, PgPool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared behind an `Arc`; repositories are trait
/// objects so tests can swap in fakes.
#[derive(Clone)]
pub struct ServiceContext {
    database: Database,

    user_repo: Arc<dyn UserRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    link_repo: Arc<dyn LinkRepository>,
    click_repo: Arc<dyn ClickRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    stats_repo: Arc<dyn StatsRepository>,
}

impl ServiceContext {
    /// Context backed by the PostgreSQL repositories
    pub fn postgres(database: Database) -> Self {
        let pool = database.pool().clone();
        Self {
            user_repo: Arc::new(reflink_db::PgUserRepository::new(pool.clone())),
            category_repo: Arc::new(reflink_db::PgCategoryRepository::new(pool.clone())),
            link_repo: Arc::new(reflink_db::PgLinkRepository::new(pool.clone())),
            click_repo: Arc::new(reflink_db::PgClickRepository::new(pool.clone())),
            reaction_repo: Arc::new(reflink_db::PgReactionRepository::new(pool.clone())),
            stats_repo: Arc::new(reflink_db::PgStatsRepository::new(pool)),
            database,
        }
    }

    // === Database ===

    /// Get the database handle
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        self.database.pool()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    pub fn click_repo(&self) -> &dyn ClickRepository {
        self.click_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("database", &self.database)
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    database: Option<Database>,
    user_repo: Option<Arc<dyn UserRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    link_repo: Option<Arc<dyn LinkRepository>>,
    click_repo: Option<Arc<dyn ClickRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn click_repo(mut self, repo: Arc<dyn ClickRepository>) -> Self {
        self.click_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            database: required(self.database, "database")?,
            user_repo: required(self.user_repo, "user_repo")?,
            category_repo: required(self.category_repo, "category_repo")?,
            link_repo: required(self.link_repo, "link_repo")?,
            click_repo: required(self.click_repo, "click_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            stats_repo: required(self.stats_repo, "stats_repo")?,
        })
    }
}

//! # reflink-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `reflink-core`. It handles:
//!
//! - The `Database` handle over a bounded connection pool
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Rendering of sparse updates
//! - Repository implementations
//!
//! The schema itself is owned by the deployment; `migrations/` at the
//! workspace root holds the reference DDL the tests apply.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reflink_db::{Database, DatabaseConfig, PgCategoryRepository};
//! use reflink_core::traits::CategoryRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect(&DatabaseConfig::default()).await?;
//!     let categories = PgCategoryRepository::new(db.pool().clone());
//!
//!     let active = categories.find_all(true).await?;
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod patch;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{Database, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgClickRepository, PgLinkRepository, PgReactionRepository,
    PgStatsRepository, PgUserRepository,
};

//! Database connection pool management

mod postgres;

pub use postgres::{Database, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;

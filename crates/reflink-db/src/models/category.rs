//! Category database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub emoji: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Category row with its approved link count
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithCountModel {
    #[sqlx(flatten)]
    pub category: CategoryModel,
    pub links_count: i64,
}

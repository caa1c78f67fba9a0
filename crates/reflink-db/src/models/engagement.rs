//! Click and reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for clicks table
#[derive(Debug, Clone, FromRow)]
pub struct ClickModel {
    pub id: i64,
    pub link_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub link_id: i64,
    pub user_id: i64,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

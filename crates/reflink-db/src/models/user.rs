//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    /// External chat-platform id
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    /// Role: 'user' or 'admin'
    pub role: String,
    pub created_at: DateTime<Utc>,
}

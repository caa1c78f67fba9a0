//! User entity - a chat-platform user known to the bot

use chrono::{DateTime, Utc};

use crate::value_objects::{UserId, UserRole};

/// User entity
///
/// Users are upserted on every interaction; `role` is only ever written on
/// the first insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to show in moderation messages
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.first_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let Some(username) = self.username.as_deref().filter(|n| !n.is_empty()) {
            return format!("@{username}");
        }
        self.id.to_string()
    }

    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

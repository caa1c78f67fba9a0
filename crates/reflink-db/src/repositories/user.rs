//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reflink_core::entities::User;
use reflink_core::traits::{RepoResult, UserRepository};
use reflink_core::value_objects::{UserId, UserRole};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn upsert(
        &self,
        id: UserId,
        username: Option<&str>,
        first_name: Option<&str>,
        role: UserRole,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (user_id, username, first_name, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET username = EXCLUDED.username, first_name = EXCLUDED.first_name
            ",
        )
        .bind(id.into_inner())
        .bind(username)
        .bind(first_name)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, username, first_name, role, created_at
            FROM users
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

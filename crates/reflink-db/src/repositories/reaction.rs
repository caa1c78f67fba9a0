//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reflink_core::entities::Reaction;
use reflink_core::traits::{ReactionRepository, RepoResult};
use reflink_core::value_objects::{LinkId, UserId};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, link_id: LinkId, user_id: UserId, emoji: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reactions (link_id, user_id, reaction)
            VALUES ($1, $2, $3)
            ON CONFLICT (link_id, user_id) DO UPDATE
            SET reaction = EXCLUDED.reaction, created_at = NOW()
            ",
        )
        .bind(link_id.into_inner())
        .bind(user_id.into_inner())
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_for_user(&self, link_id: LinkId, user_id: UserId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT reaction FROM reactions WHERE link_id = $1 AND user_id = $2
            ",
        )
        .bind(link_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_for_link(&self, link_id: LinkId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM reactions WHERE link_id = $1
            ",
        )
        .bind(link_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_link(&self, link_id: LinkId) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT link_id, user_id, reaction, created_at
            FROM reactions
            WHERE link_id = $1
            ORDER BY created_at, user_id
            ",
        )
        .bind(link_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }
}

//! PostgreSQL implementation of ClickRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reflink_core::entities::Click;
use reflink_core::error::DomainError;
use reflink_core::traits::{ClickRepository, RepoResult};
use reflink_core::value_objects::{LinkId, UserId};

use crate::models::ClickModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ClickRepository
#[derive(Clone)]
pub struct PgClickRepository {
    pool: PgPool,
}

impl PgClickRepository {
    /// Create a new PgClickRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    /// The counter bump runs first so a missing link is reported before the
    /// event insert; both statements share one transaction.
    #[instrument(skip(self))]
    async fn record(&self, link_id: LinkId, user_id: UserId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let bumped = sqlx::query(
            r"
            UPDATE links SET clicks_count = clicks_count + 1 WHERE id = $1
            ",
        )
        .bind(link_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if bumped.rows_affected() == 0 {
            return Err(DomainError::LinkNotFound(link_id));
        }

        sqlx::query(
            r"
            INSERT INTO clicks (link_id, user_id) VALUES ($1, $2)
            ",
        )
        .bind(link_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_for_link(&self, link_id: LinkId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM clicks WHERE link_id = $1
            ",
        )
        .bind(link_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_link(&self, link_id: LinkId) -> RepoResult<Vec<Click>> {
        let results = sqlx::query_as::<_, ClickModel>(
            r"
            SELECT id, link_id, user_id, created_at
            FROM clicks
            WHERE link_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(link_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Click::from).collect())
    }
}

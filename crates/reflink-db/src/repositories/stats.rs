//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reflink_core::entities::{GlobalStats, TopLink};
use reflink_core::traits::{RepoResult, StatsRepository};

use crate::models::{GlobalStatsModel, TopLinkModel};

use super::error::map_db_error;

/// Upper bound for ranking queries
const MAX_TOP_LINKS: i64 = 100;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn global(&self) -> RepoResult<GlobalStats> {
        let result = sqlx::query_as::<_, GlobalStatsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM categories WHERE is_active) AS total_categories,
                (SELECT COUNT(*) FROM links WHERE status = 'approved') AS total_links,
                (SELECT COUNT(*) FROM links WHERE status = 'pending') AS pending_links,
                (SELECT COUNT(*) FROM clicks) AS total_clicks,
                (SELECT COUNT(*) FROM reactions) AS total_reactions
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn top_links(&self, limit: i64) -> RepoResult<Vec<TopLink>> {
        let limit = limit.clamp(1, MAX_TOP_LINKS);

        let results = sqlx::query_as::<_, TopLinkModel>(
            r"
            SELECT l.id, l.name, l.url, l.clicks_count,
                   c.name AS category_name, c.emoji AS category_emoji
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            WHERE l.status = 'approved'
            ORDER BY l.clicks_count DESC, l.id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TopLink::from).collect())
    }
}

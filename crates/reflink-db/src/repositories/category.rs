//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reflink_core::entities::{Category, CategoryPatch, CategoryWithCount, NewCategory};
use reflink_core::traits::{CategoryRepository, RepoResult};
use reflink_core::value_objects::CategoryId;

use crate::models::{CategoryModel, CategoryWithCountModel};
use crate::patch::build_update;

use super::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn create(&self, category: &NewCategory) -> RepoResult<CategoryId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO categories (name, emoji, position)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&category.name)
        .bind(&category.emoji)
        .bind(category.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CategoryId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, only_active: bool) -> RepoResult<Vec<CategoryWithCount>> {
        let results = sqlx::query_as::<_, CategoryWithCountModel>(
            r"
            SELECT c.id, c.name, c.emoji, c.position, c.is_active, c.created_at,
                   COUNT(l.id) AS links_count
            FROM categories c
            LEFT JOIN links l ON l.category_id = c.id AND l.status = 'approved'
            WHERE c.is_active OR NOT $1
            GROUP BY c.id
            ORDER BY c.position, c.id
            ",
        )
        .bind(only_active)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CategoryWithCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, emoji, position, is_active, created_at
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: CategoryId, patch: &CategoryPatch) -> RepoResult<bool> {
        let Some(mut query) = build_update("categories", &patch.to_patch(), id.into_inner()) else {
            return Ok(false);
        };

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn toggle_active(&self, id: CategoryId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE categories SET is_active = NOT is_active WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM categories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

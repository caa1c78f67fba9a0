//! PostgreSQL implementation of LinkRepository
//!
//! `links.category_id` carries no foreign key so that deleting a category
//! leaves its links in place. Writes that set a category instead take a
//! `FOR SHARE` lock on the category row inside the same transaction, which
//! both checks existence and blocks a concurrent delete until commit.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use reflink_core::entities::{
    LinkDetails, LinkPatch, LinkWithCategory, LinkWithReactions, NewLink, PendingLink, UserLink,
};
use reflink_core::traits::{LinkRepository, RepoResult};
use reflink_core::value_objects::{
    CategoryId, LinkId, LinkStatus, Patch, PatchValue, ReactionKind, UserId,
};

use crate::models::{
    LinkDetailsModel, LinkWithCategoryModel, LinkWithReactionsModel, PendingLinkModel,
    UserLinkModel,
};
use crate::patch::build_update;

use super::error::{category_not_found, map_db_error};

const LINK_COLUMNS: &str = "l.id, l.category_id, l.user_id, l.name, l.url, l.description, \
    l.status, l.rejection_reason, l.clicks_count, l.moderated_at, l.created_at";

/// Reaction aggregate columns over `reactions r`. The emoji of each tracked
/// kind is bound starting at parameter `$first`, in `ReactionKind::ALL` order.
fn reaction_totals(first: usize) -> String {
    let mut columns = vec![String::from("COUNT(r.link_id) AS reactions_count")];
    for (offset, kind) in ReactionKind::ALL.iter().enumerate() {
        columns.push(format!(
            "COALESCE(SUM(CASE WHEN r.reaction = ${} THEN 1 ELSE 0 END), 0) AS {}",
            first + offset,
            kind.column()
        ));
    }
    columns.join(", ")
}

/// Check the category exists and hold it until the transaction ends
async fn lock_category(conn: &mut PgConnection, id: CategoryId) -> RepoResult<()> {
    sqlx::query_scalar::<_, i64>(
        r"
        SELECT id FROM categories WHERE id = $1 FOR SHARE
        ",
    )
    .bind(id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)?
    .map(|_| ())
    .ok_or_else(|| category_not_found(id))
}

/// Category a link patch moves the link to
fn target_category(patch: &Patch) -> Option<CategoryId> {
    match patch.get("category_id") {
        Some(PatchValue::BigInt(id)) => Some(CategoryId::new(*id)),
        _ => None,
    }
}

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self, link), fields(category_id = %link.category_id, status = %link.status))]
    async fn create(&self, link: &NewLink) -> RepoResult<LinkId> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_category(&mut tx, link.category_id).await?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO links (category_id, user_id, name, url, description, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(link.category_id.into_inner())
        .bind(link.user_id.map(UserId::into_inner))
        .bind(&link.name)
        .bind(&link.url)
        .bind(&link.description)
        .bind(link.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(LinkId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_category(
        &self,
        category_id: CategoryId,
        status: LinkStatus,
    ) -> RepoResult<Vec<LinkWithReactions>> {
        let sql = format!(
            r"
            SELECT {LINK_COLUMNS},
                   c.name AS category_name, c.emoji AS category_emoji,
                   {totals}
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            LEFT JOIN reactions r ON r.link_id = l.id
            WHERE l.category_id = $1 AND l.status = $2
            GROUP BY l.id, c.id
            ORDER BY l.created_at DESC, l.id DESC
            ",
            totals = reaction_totals(3),
        );

        let mut query = sqlx::query_as::<_, LinkWithReactionsModel>(&sql)
            .bind(category_id.into_inner())
            .bind(status.as_str());
        for kind in ReactionKind::ALL {
            query = query.bind(kind.emoji());
        }

        let results = query.fetch_all(&self.pool).await.map_err(map_db_error)?;

        Ok(results.into_iter().map(LinkWithReactions::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, status: Option<LinkStatus>) -> RepoResult<Vec<LinkWithCategory>> {
        let sql = format!(
            r"
            SELECT {LINK_COLUMNS},
                   c.name AS category_name, c.emoji AS category_emoji
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            WHERE $1::TEXT IS NULL OR l.status = $1
            ORDER BY l.created_at DESC, l.id DESC
            "
        );

        let results = sqlx::query_as::<_, LinkWithCategoryModel>(&sql)
            .bind(status.map(LinkStatus::as_str))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(LinkWithCategory::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<LinkDetails>> {
        let sql = format!(
            r"
            SELECT {LINK_COLUMNS},
                   c.name AS category_name, c.emoji AS category_emoji,
                   u.username AS author_username, u.first_name AS author_name,
                   {totals}
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            LEFT JOIN users u ON u.user_id = l.user_id
            LEFT JOIN reactions r ON r.link_id = l.id
            WHERE l.id = $1
            GROUP BY l.id, c.id, u.user_id
            ",
            totals = reaction_totals(2),
        );

        let mut query = sqlx::query_as::<_, LinkDetailsModel>(&sql).bind(id.into_inner());
        for kind in ReactionKind::ALL {
            query = query.bind(kind.emoji());
        }

        let result = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(LinkDetails::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<UserLink>> {
        let sql = format!(
            r"
            SELECT {LINK_COLUMNS},
                   c.name AS category_name, c.emoji AS category_emoji,
                   (SELECT COUNT(*) FROM reactions r WHERE r.link_id = l.id) AS reactions_count
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            WHERE l.user_id = $1
            ORDER BY l.created_at DESC, l.id DESC
            "
        );

        let results = sqlx::query_as::<_, UserLinkModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserLink::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending(&self) -> RepoResult<Vec<PendingLink>> {
        let sql = format!(
            r"
            SELECT {LINK_COLUMNS},
                   c.name AS category_name, c.emoji AS category_emoji,
                   u.username AS author_username, u.first_name AS author_name
            FROM links l
            LEFT JOIN categories c ON c.id = l.category_id
            LEFT JOIN users u ON u.user_id = l.user_id
            WHERE l.status = 'pending'
            ORDER BY l.created_at, l.id
            "
        );

        let results = sqlx::query_as::<_, PendingLinkModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PendingLink::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: LinkId, patch: &LinkPatch) -> RepoResult<bool> {
        let patch = patch.to_patch();
        let Some(mut query) = build_update("links", &patch, id.into_inner()) else {
            return Ok(false);
        };

        let result = if let Some(category_id) = target_category(&patch) {
            let mut tx = self.pool.begin().await.map_err(map_db_error)?;
            lock_category(&mut tx, category_id).await?;
            let result = query
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            tx.commit().await.map_err(map_db_error)?;
            result
        } else {
            query
                .build()
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?
        };

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: LinkId,
        status: LinkStatus,
        rejection_reason: Option<&str>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE links
            SET status = $2, rejection_reason = $3, moderated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .bind(rejection_reason)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn transition_pending(
        &self,
        id: LinkId,
        status: LinkStatus,
        rejection_reason: Option<&str>,
    ) -> RepoResult<bool> {
        // The status guard is re-checked after a concurrent writer commits
        let result = sqlx::query(
            r"
            UPDATE links
            SET status = $2, rejection_reason = $3, moderated_at = NOW()
            WHERE id = $1 AND status = $4
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .bind(rejection_reason)
        .bind(LinkStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: LinkId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM links WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

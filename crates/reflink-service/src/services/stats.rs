//! Stats service

use tracing::instrument;

use crate::dto::{StatsResponse, TopLinkResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of links shown when the caller gives no limit
pub const DEFAULT_TOP_LINKS: i64 = 10;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Catalog-wide counters
    #[instrument(skip(self))]
    pub async fn global(&self) -> ServiceResult<StatsResponse> {
        Ok(self.ctx.stats_repo().global().await?.into())
    }

    /// Most-clicked approved links
    #[instrument(skip(self))]
    pub async fn top_links(&self, limit: i64) -> ServiceResult<Vec<TopLinkResponse>> {
        let links = self.ctx.stats_repo().top_links(limit).await?;
        Ok(links.into_iter().map(TopLinkResponse::from).collect())
    }
}

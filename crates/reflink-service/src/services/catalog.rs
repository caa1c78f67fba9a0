//! Catalog service
//!
//! Category administration and the public category/link listings.

use reflink_core::entities::{CategoryPatch, NewCategory, DEFAULT_CATEGORY_EMOJI};
use reflink_core::value_objects::{CategoryId, LinkStatus};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    AddCategoryRequest, CategoryResponse, CategorySummaryResponse, LinkResponse,
    UpdateCategoryRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active categories in display order
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<CategorySummaryResponse>> {
        let categories = self.ctx.category_repo().find_all(true).await?;
        Ok(categories
            .into_iter()
            .map(CategorySummaryResponse::from)
            .collect())
    }

    /// Every category, including inactive ones, with approved link counts
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all(false).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Get a category by id
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: CategoryId) -> ServiceResult<CategoryResponse> {
        self.ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .map(CategoryResponse::from)
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    /// Create a category; a missing or blank emoji gets the default
    #[instrument(skip(self))]
    pub async fn add_category(&self, request: AddCategoryRequest) -> ServiceResult<CategoryResponse> {
        request.validate()?;

        let emoji = request
            .emoji
            .as_deref()
            .map(str::trim)
            .filter(|emoji| !emoji.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_EMOJI);
        let category = NewCategory::new(request.name.trim())
            .with_emoji(emoji)
            .at_position(request.position.unwrap_or_default());

        let id = self.ctx.category_repo().create(&category).await?;
        info!(category_id = %id, name = %category.name, "Category created");

        self.get_category(id).await
    }

    /// Change name and/or emoji
    #[instrument(skip(self))]
    pub async fn rename_category(
        &self,
        id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        request.validate()?;

        let patch = CategoryPatch {
            name: request.name.map(|name| name.trim().to_string()),
            emoji: request.emoji.map(|emoji| emoji.trim().to_string()),
        };
        if patch.is_empty() {
            return Err(ServiceError::validation("Nothing to update"));
        }

        if !self.ctx.category_repo().update(id, &patch).await? {
            return Err(ServiceError::not_found("Category", id));
        }
        info!(category_id = %id, "Category updated");

        self.get_category(id).await
    }

    /// Flip visibility and return the category in its new state
    #[instrument(skip(self))]
    pub async fn toggle_category(&self, id: CategoryId) -> ServiceResult<CategoryResponse> {
        if !self.ctx.category_repo().toggle_active(id).await? {
            return Err(ServiceError::not_found("Category", id));
        }

        let category = self.get_category(id).await?;
        info!(category_id = %id, is_active = category.is_active, "Category toggled");
        Ok(category)
    }

    /// Delete a category; its links stay in place
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> ServiceResult<()> {
        if !self.ctx.category_repo().delete(id).await? {
            return Err(ServiceError::not_found("Category", id));
        }
        info!(category_id = %id, "Category deleted");
        Ok(())
    }

    /// Approved links of a category, newest first
    #[instrument(skip(self))]
    pub async fn links_in_category(&self, id: CategoryId) -> ServiceResult<Vec<LinkResponse>> {
        if self.ctx.category_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Category", id));
        }

        let links = self
            .ctx
            .link_repo()
            .find_by_category(id, LinkStatus::Approved)
            .await?;
        Ok(links.into_iter().map(LinkResponse::from).collect())
    }
}

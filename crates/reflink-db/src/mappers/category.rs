//! Category entity <-> model mapper

use reflink_core::entities::{Category, CategoryWithCount};
use reflink_core::value_objects::CategoryId;

use crate::models::{CategoryModel, CategoryWithCountModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::new(model.id),
            name: model.name,
            emoji: model.emoji,
            position: model.position,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<CategoryWithCountModel> for CategoryWithCount {
    fn from(model: CategoryWithCountModel) -> Self {
        CategoryWithCount {
            category: model.category.into(),
            links_count: model.links_count,
        }
    }
}

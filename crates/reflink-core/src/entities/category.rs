//! Category entity - a named, ordered group of links

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryId, Patch};

/// Emoji used when a category is created without one
pub const DEFAULT_CATEGORY_EMOJI: &str = "📁";

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub emoji: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Category annotated with the number of its approved links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub links_count: i64,
}

/// Values for inserting a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub emoji: String,
    pub position: i32,
}

impl NewCategory {
    /// New category with the default emoji at position 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: DEFAULT_CATEGORY_EMOJI.to_string(),
            position: 0,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Partial category update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub emoji: Option<String>,
}

impl CategoryPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.emoji.is_none()
    }

    /// Column assignments for the supplied fields
    #[must_use]
    pub fn to_patch(&self) -> Patch {
        Patch::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("emoji", self.emoji.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_defaults() {
        let c = NewCategory::new("Games");
        assert_eq!(c.emoji, DEFAULT_CATEGORY_EMOJI);
        assert_eq!(c.position, 0);

        let c = NewCategory::new("Tools").with_emoji("🛠").at_position(3);
        assert_eq!(c.emoji, "🛠");
        assert_eq!(c.position, 3);
    }

    #[test]
    fn test_category_patch() {
        assert!(CategoryPatch::default().is_empty());
        assert!(CategoryPatch::default().to_patch().is_empty());

        let patch = CategoryPatch {
            name: None,
            emoji: Some("🎮".to_string()),
        };
        assert!(!patch.is_empty());
        let columns: Vec<_> = patch.to_patch().iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["emoji"]);
    }
}

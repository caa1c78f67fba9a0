//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use reflink_core::value_objects::{CategoryId, UserId};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject values that are empty after trimming
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Accept only absolute http(s) URLs without whitespace
fn http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(()),
        _ => Err(ValidationError::new("http_url")
            .with_message(Cow::Borrowed("URL must start with http:// or https://"))),
    }
}

// ============================================================================
// Category Requests
// ============================================================================

/// Add category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCategoryRequest {
    #[validate(
        length(min = 1, max = 100, message = "Category name must be 1-100 characters"),
        custom(function = "not_blank", message = "Category name must not be blank")
    )]
    pub name: String,

    /// Defaults to 📁 when absent or blank
    #[validate(length(max = 16, message = "Emoji must be at most 16 characters"))]
    pub emoji: Option<String>,

    #[serde(default)]
    pub position: Option<i32>,
}

/// Update category request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(
        length(min = 1, max = 100, message = "Category name must be 1-100 characters"),
        custom(function = "not_blank", message = "Category name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16, message = "Emoji must be 1-16 characters"))]
    pub emoji: Option<String>,
}

// ============================================================================
// Link Requests
// ============================================================================

/// Link submission, used both for user submissions and admin additions
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitLinkRequest {
    pub category_id: CategoryId,

    #[validate(
        length(min = 1, max = 200, message = "Link name must be 1-200 characters"),
        custom(function = "not_blank", message = "Link name must not be blank")
    )]
    pub name: String,

    #[validate(
        length(max = 2048, message = "URL must be at most 2048 characters"),
        custom(function = "http_url")
    )]
    pub url: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Mini-app Payloads
// ============================================================================

/// Identity of the user who sent a mini-app payload
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppUser {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebAppSubmitLink {
    #[serde(flatten)]
    pub user: WebAppUser,
    #[serde(flatten)]
    pub link: SubmitLinkRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebAppAddCategory {
    #[serde(flatten)]
    pub user: WebAppUser,
    #[serde(flatten)]
    pub category: AddCategoryRequest,
}

/// Data sent by the mini-app, discriminated by `action`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WebAppPayload {
    SubmitLink(WebAppSubmitLink),
    AddCategory(WebAppAddCategory),
}

impl WebAppPayload {
    /// The sending user
    pub fn user(&self) -> &WebAppUser {
        match self {
            Self::SubmitLink(payload) => &payload.user,
            Self::AddCategory(payload) => &payload.user,
        }
    }
}

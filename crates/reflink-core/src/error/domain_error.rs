//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, LinkId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Link not found: {0}")]
    LinkNotFound(LinkId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Store Errors (raw message preserved)
    // =========================================================================
    /// Unique, foreign-key or check constraint rejected the statement
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::LinkNotFound(_) => "UNKNOWN_LINK",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_) | Self::LinkNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

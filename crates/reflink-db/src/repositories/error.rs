//! Error handling utilities for repositories

use reflink_core::error::DomainError;
use reflink_core::value_objects::CategoryId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Integrity violations keep the database's own message.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return DomainError::ConstraintViolation(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "category not found" error
pub fn category_not_found(id: CategoryId) -> DomainError {
    DomainError::CategoryNotFound(id)
}

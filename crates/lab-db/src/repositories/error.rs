//! Error handling utilities for repositories

use lab_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError.
///
/// Constraint violations surface as their domain equivalents
/// (SQLSTATE 23505 and 23503); everything else is a database error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::DuplicateEntry;
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::ReferencedResourceMissing;
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

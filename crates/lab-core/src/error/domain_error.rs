//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::BookingStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Package not found")]
    PackageNotFound(String),

    #[error("Booking not found")]
    BookingNotFound(Uuid),

    #[error("Report not found")]
    ReportNotFound(Uuid),

    #[error("Blog post not found")]
    BlogPostNotFound(String),

    /// A referenced row does not exist (foreign-key violation)
    #[error("Resource not found")]
    ReferencedResourceMissing,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Preferred date cannot be in the past")]
    PreferredDateInPast,

    #[error("Booking cannot be cancelled once {0}")]
    BookingNotCancellable(BookingStatus),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists with this email")]
    EmailAlreadyExists,

    /// Any other unique-constraint violation
    #[error("Duplicate field value entered")]
    DuplicateEntry,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PackageNotFound(_) => "UNKNOWN_PACKAGE",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::BlogPostNotFound(_) => "UNKNOWN_BLOG_POST",
            Self::ReferencedResourceMissing => "RESOURCE_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::PreferredDateInPast => "PREFERRED_DATE_IN_PAST",
            Self::BookingNotCancellable(_) => "BOOKING_NOT_CANCELLABLE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PackageNotFound(_)
                | Self::BookingNotFound(_)
                | Self::ReportNotFound(_)
                | Self::BlogPostNotFound(_)
                | Self::ReferencedResourceMissing
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::PreferredDateInPast | Self::BookingNotCancellable(_)
        )
    }

    /// Check if this is a duplicate-key conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::DuplicateEntry)
    }

    /// HTTP status for this error. Duplicate-key conflicts are reported as 400.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() || self.is_conflict() {
            400
        } else {
            500
        }
    }
}

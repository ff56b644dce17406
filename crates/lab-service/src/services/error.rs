//! Service layer error type

use lab_common::AppError;
use lab_core::DomainError;

/// Everything a service call can fail with
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Business rule or repository failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credentials, tokens, hashing
    #[error(transparent)]
    App(#[from] AppError),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },

    /// Cross-field checks the request DTOs cannot express
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status_code(),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

//! Application error types
//!
//! Authentication, configuration and infrastructure failures. Business rule
//! violations stay in `DomainError` and are wrapped unchanged.

use lab_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown email, inactive account or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Pool creation, migrations
    #[error("Database error: {0}")]
    Database(String),

    /// Bad settings or a listener that could not be bound
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials
            | Self::IncorrectPassword
            | Self::InvalidToken
            | Self::TokenExpired => 401,
            Self::Domain(e) => e.status_code(),
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Domain(e) => e.code(),
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

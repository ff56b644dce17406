//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as
//! `{"success": false, "message": ..., "code": ..., "errors"?: {...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lab_common::AppError;
use lab_core::DomainError;
use lab_service::ServiceError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Message sent in place of any 5xx detail
const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation errors")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    InvalidPath(String),

    #[error("Access denied. No token provided.")]
    MissingAuth,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("API endpoint not found")]
    RouteNotFound,

    #[error("Too many requests from this IP, please try again later.")]
    RateLimited,

    #[error("Too many authentication attempts, please try again later.")]
    AuthRateLimited,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => to_status(e.status_code()),
            Self::Service(e) => to_status(e.status_code()),
            Self::Domain(e) => to_status(e.status_code()),
            Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::InvalidQuery(_)
            | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::MissingAuth | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::RateLimited | Self::AuthRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::MissingAuth => "MISSING_AUTH",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::RateLimited => "RATE_LIMIT_EXCEEDED",
            Self::AuthRateLimited => "AUTH_RATE_LIMIT_EXCEEDED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message; server errors never expose their cause
    #[must_use]
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

fn to_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// `{field: [message, ...]}` for each failed field
fn field_errors(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    Value::String(
                        e.message
                            .as_ref()
                            .map_or_else(|| e.code.to_string(), ToString::to_string),
                    )
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect::<Map<String, Value>>();

    Value::Object(fields)
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let errors = match &self {
            Self::Validation(errors) => Some(field_errors(errors)),
            _ => None,
        };

        let body = ErrorBody {
            success: false,
            message: self.message(),
            code: self.error_code().to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod blogs;
pub mod bookings;
pub mod contact;
pub mod health;
pub mod locations;
pub mod packages;
pub mod reports;
pub mod users;

use crate::response::ApiError;

/// Unmatched `/api/*` paths
pub async fn api_not_found() -> ApiError {
    ApiError::RouteNotFound
}

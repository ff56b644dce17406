//! Pagination extractor
//!
//! Extracts `page` / `limit` offset pagination from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use lab_core::value_objects::{PageRequest, DEFAULT_PER_PAGE};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Page request built from the query; `PageRequest` does the clamping
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl Default for Pagination {
    fn default() -> Self {
        Self(PageRequest::default())
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self(PageRequest::new(
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_PER_PAGE),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}

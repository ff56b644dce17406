//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// A single UUID path segment, e.g. `/bookings/:id`
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Invalid id format"))?;

        Ok(UuidPath(id))
    }
}

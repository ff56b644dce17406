//! Validated JSON and query extractors
//!
//! Deserialize the input, then run the `validator` rules on it.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::JsonSyntaxError(_) => ApiError::invalid_body("Malformed JSON body"),
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::invalid_body("Expected request with `Content-Type: application/json`")
            }
            JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
            _ => ApiError::invalid_body("Invalid JSON body"),
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Validated query string extractor
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| ApiError::invalid_query(e.body_text()))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}

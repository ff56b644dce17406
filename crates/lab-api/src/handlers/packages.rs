//! Package catalogue handlers

use axum::{
    extract::{Path, State},
    Json,
};
use lab_service::dto::{PackageListQuery, PackageListResponse, PackageResponse, PackageSearchQuery};
use lab_service::PackageService;

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Active packages, optionally featured-only or by category
///
/// GET /api/packages
///
/// The body is a bare JSON array; the catalogue pages map over it directly.
pub async fn list_packages(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PackageListQuery>,
) -> ApiResult<Json<Vec<PackageResponse>>> {
    let service = PackageService::new(state.service_context());
    Ok(Json(service.list(query).await?))
}

/// GET /api/packages/:slug
///
/// Bare package object; a miss still gets the error envelope.
pub async fn get_package(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PackageResponse>> {
    let service = PackageService::new(state.service_context());
    Ok(Json(service.get_by_slug(&slug).await?))
}

/// GET /api/search/packages?q=
pub async fn search_packages(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PackageSearchQuery>,
) -> ApiResult<Json<PackageListResponse>> {
    let service = PackageService::new(state.service_context());
    Ok(Json(service.search(query).await?))
}

//! Collection centre handler

use axum::{
    extract::{Query, State},
    Json,
};
use lab_service::dto::{LocationListResponse, LocationQuery};
use lab_service::LocationService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/locations?city=
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> ApiResult<Json<LocationListResponse>> {
    let service = LocationService::new(state.service_context());
    Ok(Json(service.list(query).await?))
}

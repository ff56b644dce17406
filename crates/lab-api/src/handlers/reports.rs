//! Report handlers

use axum::{extract::State, Json};
use lab_service::dto::{ReportEnvelope, ReportListResponse};
use lab_service::ReportService;

use crate::extractors::{AuthUser, Pagination, UuidPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<ReportListResponse>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.list(auth.id(), page).await?))
}

/// GET /api/reports/:id
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(report_id): UuidPath,
) -> ApiResult<Json<ReportEnvelope>> {
    let service = ReportService::new(state.service_context());
    let report = service.get(auth.id(), report_id).await?;
    Ok(Json(ReportEnvelope::new(report)))
}

//! Health check handler

use axum::{extract::State, http::StatusCode, Json};
use lab_service::dto::HealthResponse;
use tracing::error;

use crate::state::AppState;

/// Database round-trip health check
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match lab_db::ping(state.service_context().pool()).await {
        Ok(server_time) => (StatusCode::OK, Json(HealthResponse::healthy(server_time))),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            )
        }
    }
}

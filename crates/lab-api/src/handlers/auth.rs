//! Authentication handlers
//!
//! Registration, login and the current-user lookup.

use axum::{extract::State, Json};
use lab_service::dto::{AuthResponse, LoginRequest, RegisterRequest, UserEnvelope, UserResponse};
use lab_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// The authenticated user
///
/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserEnvelope> {
    Json(UserEnvelope::new(UserResponse::from(&auth.user)))
}

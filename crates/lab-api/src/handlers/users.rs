//! User profile handlers

use axum::{extract::State, Json};
use lab_service::dto::{ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserEnvelope};
use lab_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let user = service.get_profile(auth.id()).await?;
    Ok(Json(UserEnvelope::new(user)))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let user = service.update_profile(auth.id(), request).await?;
    Ok(Json(UserEnvelope::with_message(
        "Profile updated successfully",
        user,
    )))
}

/// PUT /api/users/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.change_password(auth.id(), request).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

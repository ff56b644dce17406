//! User service
//!
//! Handles the signed-in user's profile and password.

use lab_common::auth::{hash_password, verify_password};
use lab_common::AppError;
use lab_core::entities::User;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChangePasswordRequest, UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load(&self, user_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_active_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self.load(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update name and/or phone
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.load(user_id).await?;
        let mut changed = false;

        if let Some(name) = request.name.map(|n| n.trim().to_string()) {
            if name != user.name {
                user.set_name(name);
                changed = true;
            }
        }

        if let Some(phone) = request.phone.map(|p| p.trim().to_string()) {
            if phone != user.phone {
                user.set_phone(phone);
                changed = true;
            }
        }

        if changed {
            self.ctx.user_repo().update_profile(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(UserResponse::from(&user))
    }

    /// Replace the password after checking the current one
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if !verify_password(&request.current_password, &current_hash)? {
            warn!(user_id = %user_id, "Password change rejected: wrong current password");
            return Err(ServiceError::App(AppError::IncorrectPassword));
        }

        let new_hash = hash_password(&request.new_password)?;
        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}

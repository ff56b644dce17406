//! Authentication service
//!
//! Handles user registration, login, and bearer-token resolution.

use chrono::Utc;
use lab_common::auth::{hash_password, verify_password};
use lab_common::AppError;
use lab_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Emails are compared case-insensitively
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Registration rejected: email already registered");
            return Err(lab_core::DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            request.name.trim().to_string(),
            email,
            request.phone.trim().to_string(),
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        let token = self.ctx.jwt_service().generate_token(user.id)?;

        Ok(AuthResponse::new(
            "User registered successfully",
            token,
            UserResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let (mut user, password_hash) = self
            .ctx
            .user_repo()
            .find_active_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: no active user");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let now = Utc::now();
        self.ctx.user_repo().record_login(user.id, now).await?;
        user.last_login = Some(now);

        info!(user_id = %user.id, "User logged in successfully");

        let token = self.ctx.jwt_service().generate_token(user.id)?;

        Ok(AuthResponse::new(
            "Login successful",
            token,
            UserResponse::from(&user),
        ))
    }

    /// Resolve a bearer token to an active user.
    ///
    /// Every failure (bad signature, expiry, unknown or inactive user) is
    /// reported as `InvalidToken`.
    #[instrument(skip(self, token))]
    pub async fn user_from_token(&self, token: &str) -> ServiceResult<User> {
        let user_id = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map(|claims| claims.user_id)
            .map_err(|e| {
                warn!(error = %e, "Rejected bearer token");
                ServiceError::App(AppError::InvalidToken)
            })?;

        self.ctx
            .user_repo()
            .find_active_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Token subject is not an active user");
                ServiceError::App(AppError::InvalidToken)
            })
    }
}

//! Authentication extractor
//!
//! Resolves the bearer token in the Authorization header to an active user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use lab_core::entities::User;
use lab_service::AuthService;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated, active user
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The caller's user id
    #[inline]
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

/// Verify the token and load its user.
///
/// Lookup failures caused by the server (database down) keep their status;
/// everything else is an invalid token.
async fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    AuthService::new(state.service_context())
        .user_from_token(token)
        .await
        .map(AuthUser::new)
        .map_err(|e| {
            if e.status_code() >= 500 {
                ApiError::Service(e)
            } else {
                ApiError::InvalidToken
            }
        })
}

fn rejection_to_error(rejection: &TypedHeaderRejection) -> ApiError {
    if rejection.is_missing() {
        ApiError::MissingAuth
    } else {
        ApiError::InvalidToken
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| rejection_to_error(&e))?;

        let app_state = AppState::from_ref(state);
        authenticate(&app_state, bearer.token()).await
    }
}

/// Optional authenticated user
///
/// `None` when no Authorization header is sent. A header carrying a bad
/// token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn id(&self) -> Option<Uuid> {
        self.0.as_ref().map(AuthUser::id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let user = authenticate(&app_state, bearer.token()).await?;
                Ok(OptionalAuthUser(Some(user)))
            }
            Err(e) if e.is_missing() => Ok(OptionalAuthUser(None)),
            Err(_) => Err(ApiError::InvalidToken),
        }
    }
}

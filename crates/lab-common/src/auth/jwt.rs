//! Bearer tokens
//!
//! HS256 tokens whose payload is `{"userId": ..., "iat": ..., "exp": ...}`,
//! the shape the web client and previously issued tokens already use.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issues and verifies tokens with a shared secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: i64,
}

impl JwtService {
    /// `expires_in` is the token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, expires_in: i64) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expires_in,
        }
    }

    #[must_use]
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    pub fn generate_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expires_in)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Token encoding failed: {e}")))
    }

    /// Verify signature and expiry; a payload without a UUID `userId` is invalid
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

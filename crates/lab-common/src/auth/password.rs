//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random salt per hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash.
///
/// A hash that is not in PHC format (e.g. a legacy bcrypt hash) never matches.
///
/// # Errors
/// Currently infallible; the `Result` leaves room for hashers that can fail.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not in PHC format");
        return Ok(false);
    };

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use validator::ValidateEmail;

use crate::error::WebError;

const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// At least eight characters, with at least one letter and one digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(char::is_alphabetic)
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Hashes with Argon2id on the blocking pool.
pub async fn hash(password: String) -> Result<String, WebError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| WebError::InternalServerError(format!("Password hashing failed: {e}")))
    })
    .await
    .map_err(|e| WebError::InternalServerError(format!("Password hashing task failed: {e}")))?
}

/// `false` for a mismatch and for a stored hash that cannot be parsed.
pub async fn verify(password: String, password_hash: String) -> Result<bool, WebError> {
    tokio::task::spawn_blocking(move || {
        PasswordHash::new(&password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    })
    .await
    .map_err(|e| WebError::InternalServerError(format!("Password verification task failed: {e}")))
}

use std::sync::LazyLock;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hash of a password no account has, at the cost used for real accounts.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash("no-account-has-this-password", DEFAULT_COST).ok());

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Spends one bcrypt verification on a throwaway hash, so rejecting an
/// unknown user takes as long as rejecting a wrong password.
pub fn verify_dummy_password(password: &str) {
    if let Some(dummy) = DUMMY_HASH.as_deref() {
        let _ = verify(password, dummy);
    }
}

//! JWT (JSON Web Token) utilities.
//!
//! Tokens are HS256-signed with the configured secret and carry the
//! username as subject. Lifecycle:
//!
//! ```text
//! Issued --(now < exp, signature ok)--> Valid --(now >= exp)--> Expired
//!                                         |
//!                                         +--refresh--> Issued (fresh exp)
//! ```
//!
//! Every function has an `_at` variant taking the current Unix time, so the
//! expiry boundary can be exercised without sleeping.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use recipes_config::JwtConfig;
use recipes_core::AppError;

use crate::claims::Claims;

/// A signed token together with its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues a token for `username` expiring `expiration_seconds` from now.
pub fn create_token(username: &str, jwt_config: &JwtConfig) -> Result<IssuedToken, AppError> {
    create_token_at(username, jwt_config, Utc::now().timestamp())
}

/// Issues a token as if the current time were `now`.
///
/// # Errors
///
/// Returns an internal error if encoding fails or the expiry is not a
/// representable timestamp.
pub fn create_token_at(
    username: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<IssuedToken, AppError> {
    let exp = now + jwt_config.expiration_seconds;

    let claims = Claims {
        sub: username.to_string(),
        iss: jwt_config.issuer.clone(),
        iat: now,
        exp,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))?;

    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AppError::internal(anyhow!("Token expiry {} is out of range", exp)))?;

    Ok(IssuedToken { token, expires_at })
}

/// Verifies a token against the current time.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    verify_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Verifies signature and issuer, then rejects the token if `now >= exp`.
///
/// Expiry is checked here rather than by `jsonwebtoken`, whose check keeps a
/// token valid during the second it expires and applies a default leeway.
pub fn verify_token_at(token: &str, jwt_config: &JwtConfig, now: i64) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_issuer(&[jwt_config.issuer.as_str()]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))?;

    if !claims.is_valid_at(now) {
        return Err(AppError::unauthorized(anyhow!("Invalid or expired token")));
    }

    Ok(claims)
}

/// Exchanges a currently valid token for a new one with a fresh expiry.
pub fn refresh_token(token: &str, jwt_config: &JwtConfig) -> Result<IssuedToken, AppError> {
    refresh_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Refresh as if the current time were `now`. Expired or forged tokens fail
/// closed with 401.
pub fn refresh_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<IssuedToken, AppError> {
    let claims = verify_token_at(token, jwt_config, now)?;
    create_token_at(&claims.sub, jwt_config, now)
}

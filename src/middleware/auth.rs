//! Authentication gate for protected routes.
//!
//! Which credential is accepted depends on the configured [`AuthScheme`]:
//!
//! | Scheme | Header | Check |
//! |--------|--------|-------|
//! | `jwt` | `Authorization: Bearer <token>` (or the bare token) | signature, issuer, expiry |
//! | `api_key` | `X-API-KEY: <key>` | exact match with `API_KEY` |

use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use recipes_auth::{Claims, verify_token};
use recipes_config::{AuthScheme, auth::API_KEY_HEADER};
use recipes_core::AppError;
use recipes_observability::track_jwt_validation;

use crate::state::AppState;

/// Reads the token from the `Authorization` header, with or without the
/// `Bearer ` prefix.
pub fn token_from_headers(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();

    if token.is_empty() || token.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthorized(anyhow!(
            "Invalid authorization header format"
        )));
    }

    Ok(token)
}

/// Caller identity on a protected route.
#[derive(Debug, Clone)]
pub enum AuthUser {
    /// Holder of a valid bearer token.
    Token(Claims),
    /// Holder of the shared API key.
    ApiKey,
}

impl AuthUser {
    /// Username for token holders, a fixed label for API key callers.
    pub fn subject(&self) -> &str {
        match self {
            AuthUser::Token(claims) => &claims.sub,
            AuthUser::ApiKey => "api-key",
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.auth_config.scheme {
            AuthScheme::Jwt => {
                let token = token_from_headers(&parts.headers)?;
                let result = verify_token(token, &state.jwt_config);
                track_jwt_validation(result.is_ok());

                Ok(AuthUser::Token(result?))
            }
            AuthScheme::ApiKey => {
                let provided = parts
                    .headers
                    .get(API_KEY_HEADER)
                    .and_then(|value| value.to_str().ok());

                match (provided, state.auth_config.api_key.as_deref()) {
                    (Some(provided), Some(expected)) if provided == expected => {
                        Ok(AuthUser::ApiKey)
                    }
                    _ => Err(AppError::unauthorized(anyhow!("Invalid or missing API key"))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_prefix_is_stripped() {
        assert_eq!(token_from_headers(&headers("Bearer abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn test_raw_token_is_accepted() {
        assert_eq!(token_from_headers(&headers("abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn test_missing_or_empty_header_is_unauthorized() {
        let err = token_from_headers(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);

        assert!(token_from_headers(&headers("Bearer ")).is_err());
    }

    #[test]
    fn test_subject() {
        let claims = Claims {
            sub: "chef".into(),
            iss: "recipes-api".into(),
            iat: 0,
            exp: 1,
        };
        assert_eq!(AuthUser::Token(claims).subject(), "chef");
        assert_eq!(AuthUser::ApiKey.subject(), "api-key");
    }
}

//! Application error type.
//!
//! Every handler and service step returns `Result<_, AppError>`. The error
//! carries the HTTP status it maps to, so the conversion into a response is a
//! single function ([`IntoResponse::into_response`]).
//!
//! | Kind | Constructor | Status |
//! |------|-------------|--------|
//! | Validation | [`AppError::bad_request`] | 400 |
//! | Authentication | [`AppError::unauthorized`] | 401 |
//! | Not found | [`AppError::not_found`] | 404 |
//! | Conflict | [`AppError::conflict`] | 409 |
//! | Internal | [`AppError::internal`] | 500 |

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Whether this error should be treated as a server-side failure.
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.error.to_string(),
        });

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(error: AppError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let (status, body) = body_of(AppError::not_found(anyhow::anyhow!("Recipe not found"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Recipe not found");
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let (status, _) = body_of(AppError::conflict(anyhow::anyhow!("taken"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_401() {
        let (status, body) = body_of(AppError::unauthorized(anyhow::anyhow!("nope"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "nope");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(AppError::internal(anyhow::anyhow!("boom")).is_server_error());
        assert!(AppError::database(anyhow::anyhow!("boom")).is_server_error());
        assert!(!AppError::bad_request(anyhow::anyhow!("bad")).is_server_error());
    }
}

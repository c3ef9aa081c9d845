use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::instrument;

use recipes_core::{AppError, ErrorResponse};
use recipes_models::{CredentialsRequest, TokenResponse, UserResponse};

use crate::middleware::auth::token_from_headers;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = AuthService::sign_up(state.users.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Sign-in successful", body = TokenResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::sign_in(state.users.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(token))
}

/// Exchange a valid token for one with a fresh expiry
#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "Token refreshed", body = TokenResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AppError> {
    let token = token_from_headers(&headers)?;
    Ok(Json(AuthService::refresh(token, &state.jwt_config)?))
}

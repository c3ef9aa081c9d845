//! Response-level error handling: masking 5xx details in production and
//! turning handler panics into JSON 500s.

use std::any::Any;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use recipes_core::ErrorResponse;

use crate::state::AppState;

const MASKED_MESSAGE: &str = "Internal Server Error";

/// Replaces the body of any 5xx response with a generic message when the
/// server runs in production. Development responses pass through untouched.
pub async fn mask_internal_errors(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    if state.server_config.environment.is_production() && response.status().is_server_error() {
        let status = response.status();
        return (
            status,
            Json(ErrorResponse {
                error: MASKED_MESSAGE.to_string(),
            }),
        )
            .into_response();
    }

    response
}

/// Panic handler for `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %details, "Panic recovered while handling request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("An unexpected error occurred: {}", details),
        }),
    )
        .into_response()
}

use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{refresh, sign_in, sign_up};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/refresh", post(refresh))
}

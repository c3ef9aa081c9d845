//! Recipes Observability Module
//!
//! Provides configurable observability features including:
//! - Structured logging to the console and rolling files
//! - Distributed tracing via OpenTelemetry
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//! In both cases console logging stays on.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging, OpenTelemetry export, and metrics
//!
//! # Examples
//!
//! ```no_run
//! use recipes_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

mod basic_logging;
mod request_log;

pub use basic_logging::init_basic_console_logging;
pub use request_log::logging_middleware;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    MetricsHandle, init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_cache_hit, track_cache_miss, track_jwt_issued, track_jwt_validation,
    track_recipe_created, track_recipe_deleted, track_recipe_updated, track_user_created,
    track_user_login_failure, track_user_login_success,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle.
    pub type MetricsHandle = ();

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Console logging only.
    pub fn init_tracing() -> anyhow::Result<()> {
        super::init_basic_console_logging();
        Ok(())
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> anyhow::Result<Option<MetricsHandle>> {
        Ok(None)
    }

    pub fn metrics_app(_handle: MetricsHandle) -> Router {
        Router::new()
    }

    // No-op tracking functions
    pub fn track_recipe_created() {}
    pub fn track_recipe_updated() {}
    pub fn track_recipe_deleted() {}
    pub fn track_cache_hit() {}
    pub fn track_cache_miss() {}
    pub fn track_user_created() {}
    pub fn track_user_login_success() {}
    pub fn track_user_login_failure(_reason: &str) {}
    pub fn track_jwt_issued() {}
    pub fn track_jwt_validation(_success: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives for console output: `LOG_LEVEL` for application code,
/// noisy dependencies pinned to warn.
pub(crate) fn console_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{log_level},tower_http=warn,hyper=warn,tonic=warn,h2=warn,mongodb=warn,redis=warn"
        ))
    })
}

/// Initialize basic console logging when observability is off.
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable (default: "info")
/// - **Format**: Compact format with ANSI colors
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(console_filter());

    // A subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}

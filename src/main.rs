use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use recipes::recipes_observability::{init_metrics, init_tracing, metrics_app, shutdown_tracer};
use recipes::router::init_router;
use recipes::state::{init_app_state, seed_store};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {:#}", e);
        std::process::exit(1);
    }

    let result = run().await;
    shutdown_tracer().await;

    if let Err(e) = result {
        error!(error = %format!("{:#}", e), "Server terminated with an error");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let state = init_app_state().await?;

    if state.server_config.initialize_db {
        seed_store(&state).await?;
    } else {
        info!("INITIALIZE_DB not set, skipping fixture import");
    }

    if let Some(handle) = init_metrics()? {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.server_config.metrics_port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", addr))?;
        info!("Prometheus metrics available at http://{}/metrics", addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let port = state.server_config.port;
    let environment = state.server_config.environment;
    let app = init_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(environment = environment.as_str(), "🚀 Server running on http://localhost:{}", port);
    info!("📚 Swagger UI available at http://localhost:{}/swagger-ui", port);
    info!("📖 Scalar UI available at http://localhost:{}/scalar", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, RestConfig, router};
use chargedfile_files::FileStore;

/// Main entry point for the ChargedFile service
///
/// Resolves configuration once, then serves the REST API until Ctrl-C (or SIGTERM on Unix).
/// Every stored file lives in this process's memory and is gone once it exits.
///
/// # Environment Variables
/// - `CHARGEDFILE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CHARGEDFILE_MAX_UPLOAD_BYTES`: request body limit in bytes (default: 64 MiB)
/// - `RUST_LOG`: additional tracing directives
///
/// A `.env` file in the working directory is loaded first, if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chargedfile=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RestConfig::from_env()?;

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("++ Starting ChargedFile REST on {}", listener.local_addr()?);
    tracing::info!(
        "++ Accepting uploads up to {} bytes",
        config.max_upload_bytes()
    );

    let app = router(AppState::new(FileStore::new()), &config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- ChargedFile REST stopped; stored files discarded");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("-- Shutdown signal received");
}

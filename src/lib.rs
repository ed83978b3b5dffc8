pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Proxy service module
mod utils;

use anyhow::Context;
use proxy::{AppState, AxumServer};
use tracing::{error, info};

pub use error::{AppError, AppResult};

/// Serve until Ctrl-C / SIGTERM, then stop.
pub async fn run(config: models::AppConfig) -> anyhow::Result<()> {
    info!(
        "Loaded Spotify credentials for client {}",
        config.credentials.client_id
    );

    let upstream = proxy::upstream::UpstreamClient::from_config(&config.proxy);
    let state = AppState::new(config.credentials, upstream);

    let (server, handle) =
        AxumServer::start(config.proxy.get_bind_address(), config.proxy.port, state)
            .await
            .map_err(anyhow::Error::msg)
            .context("Failed to start preview proxy")?;

    shutdown_signal().await;
    info!("Shutdown signal received");
    server.stop();
    handle.await.context("Server task panicked")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

//! HTTP server lifecycle.

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::{AppState, ServerConfig, router};

/// Serves the API until Ctrl-C, then drains in-flight requests and returns.
#[instrument(skip_all, fields(addr = %config.bind_addr()))]
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server ready at http://{}/", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}

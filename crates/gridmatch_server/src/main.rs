//! Gridmatch server binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridmatch_server::{AppState, ServerConfig, serve};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?.with_overrides(cli.host, cli.port);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(?config, "Starting gridmatch server");
    serve(&config, AppState::default()).await
}

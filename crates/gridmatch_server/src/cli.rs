//! Command-line interface for gridmatch_server.

use clap::Parser;

/// Gridmatch - tic-tac-toe game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "gridmatch_server")]
#[command(about = "Tic-tac-toe game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Host to bind to (overrides config and environment)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config and environment)
    #[arg(short, long)]
    pub port: Option<u16>,
}

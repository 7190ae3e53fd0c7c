//! Gridmatch server - REST transport around the game registry.
//!
//! # Architecture
//!
//! - **Routes**: axum handlers translating JSON requests into registry calls
//! - **Players**: in-memory player directory with per-player statistics
//! - **Config**: layered server configuration (defaults, TOML, env, CLI)
//!
//! # Example
//!
//! ```no_run
//! use gridmatch_server::{AppState, ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! serve(&config, AppState::default()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod players;
mod routes;
mod server;
mod state;

pub use config::{ConfigError, HOST_VAR, LOG_VAR, PORT_VAR, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use players::{GameOutcome, Player, PlayerDirectory, PlayerStats};
pub use routes::{
    CreateGameRequest, CreatePlayerRequest, GameListResponse, GameResponse, JoinGameRequest,
    ListGamesQuery, MakeMoveRequest, MoveResponse, PlayerListResponse, PlayerResponse, router,
};
pub use server::serve;
pub use state::AppState;

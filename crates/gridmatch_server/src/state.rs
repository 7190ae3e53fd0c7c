//! Shared application state handed to every handler.

use std::time::Instant;

use gridmatch_core::GameRegistry;
use tracing::{info, instrument};

use crate::PlayerDirectory;

/// Registry, player directory and process start time.
///
/// Cloning is cheap; the registry and directory are shared handles.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All games.
    pub games: GameRegistry,
    /// All registered players.
    pub players: PlayerDirectory,
    /// When the server started, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wraps an existing registry and directory.
    #[instrument(skip_all)]
    pub fn new(games: GameRegistry, players: PlayerDirectory) -> Self {
        info!("Creating application state");
        Self {
            games,
            players,
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameRegistry::new(), PlayerDirectory::new())
    }
}

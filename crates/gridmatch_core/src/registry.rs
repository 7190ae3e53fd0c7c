//! Registry owning every game.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::invariants::check_game;
use crate::rules::WinResult;
use crate::{Game, GameId, GameStatus, MatchError, Participant, PlayerId};

/// Result of a successful move: the updated game and what the move achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Dissolve)]
pub struct MoveOutcome {
    /// Snapshot of the game after the move.
    game: Game,
    /// Whether the move completed a line, and which.
    win_result: WinResult,
}

/// Owns all games and serializes mutation per game.
///
/// Each game sits behind its own mutex, so validate-then-mutate runs as one
/// critical section for that game while operations on other games proceed
/// independently. Cloning the registry yields another handle to the same
/// games.
///
/// Every accessor returns an owned snapshot; callers never hold references
/// into registry state.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<DashMap<GameId, Arc<Mutex<Game>>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    /// Creates a new game waiting for players.
    #[instrument(skip(self))]
    pub fn create_game(&self, name: Option<String>) -> Game {
        let game = Game::new(name);
        self.games
            .insert(game.id().clone(), Arc::new(Mutex::new(game.clone())));
        info!(game_id = %game.id(), name = %game.name(), "Created game");
        game
    }

    /// Seats a participant in a waiting game.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the game does not exist.
    /// - `Conflict` if the game is not waiting, is full, or already seats
    ///   the participant.
    #[instrument(skip(self, participant), fields(player_id = %participant.id()))]
    pub fn join_game(&self, game_id: &GameId, participant: Participant) -> Result<Game, MatchError> {
        let entry = self.entry(game_id)?;
        let mut game = lock(&entry);
        game.join(participant)?;
        info!(status = %game.status(), players = game.players().len(), "Player joined");
        Ok(game.clone())
    }

    /// Plays a move for `player_id` at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `NotFound` if the game does not exist.
    /// - `Conflict` if the game is not active.
    /// - `NotFound` if the player is not seated at the game.
    /// - `Conflict` if it is not the player's turn.
    /// - `Validation` if a coordinate is outside `0..3`.
    /// - `Conflict` if the cell is occupied.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MatchError> {
        let entry = self.entry(game_id)?;
        let mut game = lock(&entry);
        let win_result = game.play(player_id, row, col)?;
        info!(
            status = %game.status(),
            moves = game.moves().len(),
            won = win_result.won(),
            "Move applied"
        );
        Ok(MoveOutcome {
            game: game.clone(),
            win_result,
        })
    }

    /// Returns a snapshot of the game.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the game does not exist.
    #[instrument(skip(self))]
    pub fn get_game(&self, game_id: &GameId) -> Result<Game, MatchError> {
        let entry = self.entry(game_id)?;
        let game = lock(&entry).clone();
        Ok(game)
    }

    /// Lists game snapshots, oldest first, optionally filtered by status.
    #[instrument(skip(self))]
    pub fn list_games(&self, status: Option<GameStatus>) -> Vec<Game> {
        let entries: Vec<_> = self.games.iter().map(|e| Arc::clone(e.value())).collect();
        let mut games: Vec<Game> = entries
            .iter()
            .map(|entry| lock(entry).clone())
            .filter(|game| status.is_none_or(|s| *game.status() == s))
            .collect();
        games.sort_by(|a, b| a.created_at().cmp(b.created_at()).then_with(|| a.id().cmp(b.id())));
        debug!(count = games.len(), "Listed games");
        games
    }

    /// Re-inserts a previously serialized game.
    ///
    /// # Errors
    ///
    /// - `Validation` if the game violates any entity invariant.
    /// - `Conflict` if a game with the same id is already registered.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn restore(&self, game: Game) -> Result<(), MatchError> {
        if let Err(violations) = check_game(&game) {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            warn!(?reasons, "Rejected invalid game");
            return Err(MatchError::validation(format!(
                "Game {} is inconsistent: {}",
                game.id(),
                reasons.join("; ")
            )));
        }

        match self.games.entry(game.id().clone()) {
            Entry::Occupied(_) => Err(MatchError::conflict(format!(
                "Game {} already exists",
                game.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(game)));
                info!("Restored game");
                Ok(())
            }
        }
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns true if no games are registered.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Fetches the game's lock handle, releasing the map shard before the
    /// caller locks the game itself.
    fn entry(&self, game_id: &GameId) -> Result<Arc<Mutex<Game>>, MatchError> {
        self.games
            .get(game_id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| {
                debug!(%game_id, "Game not found");
                MatchError::not_found(format!("Game {game_id} not found"))
            })
    }
}

/// Locks a game. Transitions validate before mutating, so a game behind a
/// poisoned lock is still consistent.
fn lock(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

//! The game entity and its state transitions.
//!
//! Every transition validates fully before touching any field, so a rejected
//! join or move leaves the game exactly as it was.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Position};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{WinResult, check_win, is_draw};
use crate::{GameId, GameStatus, MatchError, Move, Participant, PlayerId};

/// One two-player tic-tac-toe match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Game {
    /// Game identifier.
    id: GameId,
    /// Display name.
    name: String,
    /// Lifecycle status.
    status: GameStatus,
    /// The board.
    board: Board,
    /// Participants in join order. The first joiner moves first.
    players: Vec<Participant>,
    /// Player whose turn it is; set only while the game is active.
    current_player_id: Option<PlayerId>,
    /// Winner; set only once the game is completed.
    winner_id: Option<PlayerId>,
    /// Move history, oldest first.
    moves: Vec<Move>,
    /// Creation time.
    created_at: DateTime<Utc>,
    /// Time of the last successful transition.
    updated_at: DateTime<Utc>,
}

impl Game {
    /// Maximum number of participants.
    pub const MAX_PLAYERS: usize = 2;

    /// Name given to games created without one.
    pub const DEFAULT_NAME: &'static str = "Tic-Tac-Toe";

    /// Creates a game waiting for players, with an empty board.
    #[instrument]
    pub fn new(name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string());
        let now = Utc::now();
        Self {
            id: GameId::generate(),
            name,
            status: GameStatus::Waiting,
            board: Board::new(),
            players: Vec::new(),
            current_player_id: None,
            winner_id: None,
            moves: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the participant with the given id.
    pub fn participant(&self, player_id: &PlayerId) -> Option<&Participant> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Checks if the player is seated at this game.
    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.participant(player_id).is_some()
    }

    /// Returns the other participant's id.
    pub fn opponent_of(&self, player_id: &PlayerId) -> Option<&PlayerId> {
        self.players
            .iter()
            .map(Participant::id)
            .find(|id| *id != player_id)
    }

    /// Number of moves the given player has made.
    pub fn moves_by(&self, player_id: &PlayerId) -> usize {
        self.moves
            .iter()
            .filter(|m| m.player_id() == player_id)
            .count()
    }

    /// Returns true once the game is completed or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Seats a participant.
    ///
    /// The second join activates the game with the first joiner to move.
    #[instrument(skip(self), fields(game_id = %self.id, player_id = %participant.id()))]
    pub(crate) fn join(&mut self, participant: Participant) -> Result<(), MatchError> {
        if self.status != GameStatus::Waiting {
            warn!(status = %self.status, "Join rejected");
            return Err(MatchError::conflict(
                "Game is not accepting new players",
            ));
        }
        if self.players.len() >= Self::MAX_PLAYERS {
            warn!("Join rejected: game full");
            return Err(MatchError::conflict("Game is full"));
        }
        if self.has_player(participant.id()) {
            warn!("Join rejected: duplicate player");
            return Err(MatchError::conflict(format!(
                "Player {} is already in the game",
                participant.id()
            )));
        }

        self.players.push(participant);
        if self.players.len() == Self::MAX_PLAYERS {
            self.status = GameStatus::Active;
            self.current_player_id = self.players.first().map(|p| p.id().clone());
            info!(first = ?self.current_player_id, "Game started");
        }
        self.updated_at = Utc::now();
        self.debug_check();
        Ok(())
    }

    /// Marks a cell for `player_id` and re-evaluates the game outcome.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub(crate) fn play(
        &mut self,
        player_id: &PlayerId,
        row: i64,
        col: i64,
    ) -> Result<WinResult, MatchError> {
        match self.status {
            GameStatus::Active => {}
            GameStatus::Waiting => {
                return Err(MatchError::conflict(
                    "Game is not active: waiting for players",
                ));
            }
            GameStatus::Completed | GameStatus::Draw => {
                return Err(MatchError::conflict(format!(
                    "Game has ended ({})",
                    self.status
                )));
            }
        }

        if !self.has_player(player_id) {
            warn!("Move by non-participant");
            return Err(MatchError::not_found(format!(
                "Player {player_id} not found in game"
            )));
        }

        if self.current_player_id.as_ref() != Some(player_id) {
            warn!(expected = ?self.current_player_id, "Move out of turn");
            return Err(MatchError::conflict("Not your turn"));
        }

        let pos = Position::new(row, col)?;
        if !self.board.is_empty(pos) {
            return Err(MatchError::conflict(format!(
                "Cell {pos} is already occupied"
            )));
        }

        self.board.place(pos, player_id.clone());
        self.moves
            .push(Move::record(self.id.clone(), player_id.clone(), pos));

        let win = check_win(&self.board, pos);
        if win.won() {
            self.status = GameStatus::Completed;
            self.winner_id = Some(player_id.clone());
            self.current_player_id = None;
            info!(line = ?win.line(), "Game won");
        } else if is_draw(self.moves.len(), win) {
            self.status = GameStatus::Draw;
            self.current_player_id = None;
            info!("Game drawn");
        } else {
            self.current_player_id = self.opponent_of(player_id).cloned();
            debug!(next = ?self.current_player_id, "Turn passed");
        }

        self.updated_at = Utc::now();
        self.debug_check();
        Ok(win)
    }

    fn debug_check(&self) {
        debug_assert_eq!(GameInvariants::check_all(self), Ok(()), "game invariants violated");
    }
}

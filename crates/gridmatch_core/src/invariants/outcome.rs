//! Outcome invariant: the winner field agrees with status and board.

use super::Invariant;
use crate::rules::{find_winner, is_full};
use crate::{Game, GameStatus};

/// Invariant: a completed game has a winner who owns a completed line; a
/// drawn game has a full board with no completed line; any other game has
/// no winner.
pub struct OutcomeStatusInvariant;

impl Invariant<Game> for OutcomeStatusInvariant {
    fn holds(game: &Game) -> bool {
        let line_owner = find_winner(game.board()).map(|(owner, _)| owner);
        match game.status() {
            GameStatus::Completed => {
                game.winner_id().is_some() && game.winner_id().as_ref() == line_owner
            }
            GameStatus::Draw => {
                game.winner_id().is_none() && line_owner.is_none() && is_full(game.board())
            }
            GameStatus::Waiting | GameStatus::Active => {
                game.winner_id().is_none() && line_owner.is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Winner is set only for completed games and matches the board"
    }
}

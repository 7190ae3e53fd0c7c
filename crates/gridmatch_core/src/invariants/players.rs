//! Seating invariant: at most two distinct participants.

use std::collections::HashSet;

use super::Invariant;
use crate::Game;

/// Invariant: a game seats at most two players, none of them twice.
pub struct SeatingInvariant;

impl Invariant<Game> for SeatingInvariant {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        let unique: HashSet<_> = players.iter().map(|p| p.id()).collect();
        players.len() <= Game::MAX_PLAYERS && unique.len() == players.len()
    }

    fn description() -> &'static str {
        "At most two players, each seated once"
    }
}

//! History consistency invariant: the move list explains the board.

use std::collections::HashSet;

use super::Invariant;
use crate::Game;

/// Invariant: occupied cells equal the move count, and every recorded move
/// belongs to this game, was made by a participant, and owns its cell.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.moves();
        let distinct_cells: HashSet<_> = moves.iter().map(|m| *m.position()).collect();

        game.board().occupied_count() == moves.len()
            && distinct_cells.len() == moves.len()
            && moves.iter().all(|m| {
                m.game_id() == game.id()
                    && game.has_player(m.player_id())
                    && game.board().get(*m.position()) == Some(m.player_id())
            })
    }

    fn description() -> &'static str {
        "History length matches occupied cells and each move owns its cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRegistry, Participant, PlayerId};

    #[test]
    fn test_holds_after_each_move() {
        let registry = GameRegistry::new();
        let id = registry.create_game(None).id().clone();
        for (pid, name) in [("p1", "Alice"), ("p2", "Bob")] {
            registry
                .join_game(&id, Participant::new(PlayerId::from(pid), name.to_string()))
                .expect("join");
        }

        let p1 = PlayerId::from("p1");
        let p2 = PlayerId::from("p2");
        for (player, row, col) in [(&p1, 1, 1), (&p2, 0, 0), (&p1, 2, 2)] {
            let outcome = registry.make_move(&id, player, row, col).expect("move");
            assert!(HistoryConsistentInvariant::holds(outcome.game()));
        }
    }
}

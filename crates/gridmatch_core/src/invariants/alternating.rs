//! Alternating turn invariant: seats fill before play, then players alternate.

use super::Invariant;
use crate::{CELL_COUNT, Game, GameStatus};

/// Invariant: play starts only with both seats filled and the move history
/// alternates between the players, first joiner first.
///
/// - A waiting game has fewer than two players and no moves.
/// - Any other game has exactly two players.
/// - Move `i` was made by `players[i % 2]`.
/// - An active game has an empty cell left and `players[moves % 2]` to move.
/// - A completed game was won by whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        let moves = game.moves();

        if *game.status() == GameStatus::Waiting {
            return players.len() < Game::MAX_PLAYERS && moves.is_empty();
        }
        if players.len() != Game::MAX_PLAYERS {
            return false;
        }

        let alternates = moves
            .iter()
            .enumerate()
            .all(|(i, m)| m.player_id() == players[i % 2].id());
        if !alternates {
            return false;
        }

        match game.status() {
            GameStatus::Active => {
                moves.len() < CELL_COUNT
                    && game.current_player_id().as_ref()
                        == Some(players[moves.len() % 2].id())
            }
            GameStatus::Completed => {
                moves.last().map(|m| m.player_id()) == game.winner_id().as_ref()
            }
            GameStatus::Draw | GameStatus::Waiting => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first joiner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRegistry, Participant, PlayerId};

    fn seat(registry: &GameRegistry, id: &crate::GameId, pid: &str) -> Game {
        registry
            .join_game(id, Participant::new(PlayerId::from(pid), pid.to_string()))
            .expect("join")
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let registry = GameRegistry::new();
        let game = registry.create_game(None);
        assert!(AlternatingTurnInvariant::holds(&game));

        let id = game.id().clone();
        assert!(AlternatingTurnInvariant::holds(&seat(&registry, &id, "p1")));
        assert!(AlternatingTurnInvariant::holds(&seat(&registry, &id, "p2")));

        let p1 = PlayerId::from("p1");
        let p2 = PlayerId::from("p2");
        let cells = [(&p1, 0, 0), (&p2, 1, 0), (&p1, 0, 1), (&p2, 1, 1), (&p1, 0, 2)];
        for (player, row, col) in cells {
            let outcome = registry.make_move(&id, player, row, col).expect("move");
            assert!(AlternatingTurnInvariant::holds(outcome.game()));
        }
        assert_eq!(
            *registry.get_game(&id).expect("game").status(),
            GameStatus::Completed
        );
    }
}

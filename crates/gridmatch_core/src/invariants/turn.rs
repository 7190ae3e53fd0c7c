//! Turn invariant: a current player exists exactly while the game is active.

use super::Invariant;
use crate::{Game, GameStatus};

/// Invariant: `current_player_id` is set iff the game is active, and then
/// names one of its two participants.
pub struct TurnStatusInvariant;

impl Invariant<Game> for TurnStatusInvariant {
    fn holds(game: &Game) -> bool {
        match (game.status(), game.current_player_id()) {
            (GameStatus::Active, Some(current)) => {
                game.players().len() == Game::MAX_PLAYERS && game.has_player(current)
            }
            (GameStatus::Active, None) => false,
            (_, current) => current.is_none(),
        }
    }

    fn description() -> &'static str {
        "Current player is set exactly while the game is active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRegistry, Participant, PlayerId};

    #[test]
    fn test_holds_through_activation() {
        let registry = GameRegistry::new();
        let game = registry.create_game(None);
        assert!(TurnStatusInvariant::holds(&game));

        let p1 = Participant::new(PlayerId::from("p1"), "Alice".to_string());
        let game = registry.join_game(game.id(), p1).expect("join");
        assert!(TurnStatusInvariant::holds(&game));

        let p2 = Participant::new(PlayerId::from("p2"), "Bob".to_string());
        let game = registry.join_game(game.id(), p2).expect("join");
        assert_eq!(game.current_player_id(), &Some(PlayerId::from("p1")));
        assert!(TurnStatusInvariant::holds(&game));
    }
}

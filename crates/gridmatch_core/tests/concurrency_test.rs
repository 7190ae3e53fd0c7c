//! Tests for concurrent access to the registry.

use std::sync::Barrier;
use std::thread;

use gridmatch_core::{GameId, GameRegistry, GameStatus, MatchErrorKind, Participant, PlayerId};

fn active_game(registry: &GameRegistry) -> GameId {
    let game = registry.create_game(None);
    for id in ["P1", "P2"] {
        registry
            .join_game(game.id(), Participant::new(PlayerId::from(id), id.to_string()))
            .expect("join");
    }
    game.id().clone()
}

#[test]
fn test_racing_moves_on_one_slot_apply_once() {
    const THREADS: usize = 16;
    let registry = GameRegistry::new();
    let id = active_game(&registry);
    let barrier = Barrier::new(THREADS);
    let p1 = PlayerId::from("P1");

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let (registry, barrier, id, p1) = (&registry, &barrier, &id, &p1);
                s.spawn(move || {
                    barrier.wait();
                    registry.make_move(id, p1, 1, 1)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.kind, MatchErrorKind::Conflict);
    }

    let game = registry.get_game(&id).expect("game");
    assert_eq!(game.moves().len(), 1);
    assert_eq!(game.current_player_id(), &Some(PlayerId::from("P2")));
}

#[test]
fn test_racing_joins_seat_exactly_two() {
    const THREADS: usize = 8;
    let registry = GameRegistry::new();
    let game = registry.create_game(None);
    let barrier = Barrier::new(THREADS);

    let joined = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let (registry, barrier, id) = (&registry, &barrier, game.id());
                s.spawn(move || {
                    let player =
                        Participant::new(PlayerId::from(format!("P{i}")), format!("Player {i}"));
                    barrier.wait();
                    registry.join_game(id, player).is_ok()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(joined, 2);
    let game = registry.get_game(game.id()).expect("game");
    assert_eq!(*game.status(), GameStatus::Active);
    assert_eq!(game.players().len(), 2);
}

#[test]
fn test_independent_games_progress_in_parallel() {
    const GAMES: usize = 8;
    let registry = GameRegistry::new();
    let ids: Vec<_> = (0..GAMES).map(|_| active_game(&registry)).collect();
    let p1 = PlayerId::from("P1");
    let p2 = PlayerId::from("P2");

    thread::scope(|s| {
        for id in &ids {
            let (registry, p1, p2) = (&registry, &p1, &p2);
            s.spawn(move || {
                let cells = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
                for (i, (row, col)) in cells.into_iter().enumerate() {
                    let player = if i % 2 == 0 { p1 } else { p2 };
                    registry.make_move(id, player, row, col).expect("move");
                }
            });
        }
    });

    for id in &ids {
        let game = registry.get_game(id).expect("game");
        assert_eq!(*game.status(), GameStatus::Completed);
        assert_eq!(game.winner_id(), &Some(p1.clone()));
    }
    assert_eq!(registry.list_games(Some(GameStatus::Completed)).len(), GAMES);
}

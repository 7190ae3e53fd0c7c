//! Gridmatch core - in-memory tic-tac-toe game registry.
//!
//! This crate owns the game state machine: player admission, turn
//! enforcement, move validation, win and draw detection, and immutability of
//! finished games. Transport, player records and statistics live elsewhere.
//!
//! # Architecture
//!
//! - **Registry**: [`GameRegistry`] owns every [`Game`] and serializes
//!   mutation per game
//! - **Rules**: pure win/draw functions in [`rules`]
//! - **Invariants**: entity guarantees in [`invariants`], checked on restore
//!
//! # Example
//!
//! ```
//! use gridmatch_core::{GameRegistry, GameStatus, Participant, PlayerId};
//!
//! # fn example() -> Result<(), gridmatch_core::MatchError> {
//! let registry = GameRegistry::new();
//! let game = registry.create_game(Some("Lunch break".to_string()));
//!
//! let alice = Participant::new(PlayerId::from("alice"), "Alice".to_string());
//! let bob = Participant::new(PlayerId::from("bob"), "Bob".to_string());
//! registry.join_game(game.id(), alice)?;
//! let game = registry.join_game(game.id(), bob)?;
//! assert_eq!(*game.status(), GameStatus::Active);
//!
//! let outcome = registry.make_move(game.id(), &PlayerId::from("alice"), 1, 1)?;
//! assert!(!outcome.win_result().won());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod registry;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Position};
pub use error::{MatchError, MatchErrorKind};
pub use game::Game;
pub use registry::{GameRegistry, MoveOutcome};
pub use rules::{Line, WinResult};
pub use types::{GameId, GameStatus, Move, MoveId, Participant, PlayerId};

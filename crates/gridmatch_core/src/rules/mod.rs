//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); the game entity composes
//! them into its move transition.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WinResult, check_win, find_winner, line_owner};

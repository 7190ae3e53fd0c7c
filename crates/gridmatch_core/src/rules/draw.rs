//! Draw detection.

use crate::board::{Board, CELL_COUNT};
use crate::rules::WinResult;

/// Checks if every cell is marked.
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELL_COUNT
}

/// A move ends the game in a draw when it wins nothing and was the ninth move.
pub fn is_draw(move_count: usize, win: WinResult) -> bool {
    !win.won() && move_count == CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;
    use crate::board::Position;
    use crate::rules::Line;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, PlayerId::from("p1"));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_needs_nine_moves() {
        assert!(!is_draw(8, WinResult::no_win()));
        assert!(is_draw(9, WinResult::no_win()));
    }

    #[test]
    fn test_winning_ninth_move_is_not_a_draw() {
        assert!(!is_draw(9, WinResult::won_on(Line::AntiDiagonal)));
    }
}

//! Win detection.
//!
//! Only the lines through the last marked cell can have been completed by
//! that move, so the check looks at its row, its column, and the diagonals
//! the cell actually lies on.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{BOARD_SIZE, Board, Position};
use crate::PlayerId;

/// A row, column or diagonal of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Line {
    /// Row with the given index.
    Row(u8),
    /// Column with the given index.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All 8 lines on the board.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells of this line.
    pub fn positions(self) -> [Position; BOARD_SIZE] {
        match self {
            Line::Row(r) => [Position::at(r, 0), Position::at(r, 1), Position::at(r, 2)],
            Line::Column(c) => [Position::at(0, c), Position::at(1, c), Position::at(2, c)],
            Line::Diagonal => [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
            Line::AntiDiagonal => [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
        }
    }

    /// Lines passing through `pos`.
    pub fn through(pos: Position) -> impl Iterator<Item = Line> {
        [
            Some(Line::Row(pos.row())),
            Some(Line::Column(pos.col())),
            pos.on_main_diagonal().then_some(Line::Diagonal),
            pos.on_anti_diagonal().then_some(Line::AntiDiagonal),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {r}"),
            Line::Column(c) => write!(f, "column {c}"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Outcome of the win check for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    won: bool,
    line: Option<Line>,
}

impl WinResult {
    /// The move completed no line.
    pub fn no_win() -> Self {
        Self::default()
    }

    /// The move completed `line`.
    pub fn won_on(line: Line) -> Self {
        Self {
            won: true,
            line: Some(line),
        }
    }

    /// Whether the move won the game.
    pub fn won(&self) -> bool {
        self.won
    }

    /// The completed line, if the move won.
    pub fn line(&self) -> Option<Line> {
        self.line
    }
}

/// Returns the player holding all three cells of `line`, if one does.
pub fn line_owner(board: &Board, line: Line) -> Option<&PlayerId> {
    let [a, b, c] = line.positions();
    let owner = board.get(a)?;
    (board.get(b) == Some(owner) && board.get(c) == Some(owner)).then_some(owner)
}

/// Checks whether the mark just placed at `last` completed a line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, last: Position) -> WinResult {
    match Line::through(last).find(|line| line_owner(board, *line).is_some()) {
        Some(line) => {
            debug!(%line, "Line completed");
            WinResult::won_on(line)
        }
        None => WinResult::no_win(),
    }
}

/// Scans every line for a winner. Used to validate restored games.
pub fn find_winner(board: &Board) -> Option<(&PlayerId, Line)> {
    Line::ALL
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|owner| (owner, line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: &str, cells: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place(Position::at(r, c), PlayerId::from(player));
        }
        board
    }

    #[test]
    fn test_no_win_on_empty_neighbourhood() {
        let board = board_with("p1", &[(1, 1)]);
        assert_eq!(check_win(&board, Position::at(1, 1)), WinResult::no_win());
    }

    #[test]
    fn test_every_line_detected_from_every_cell() {
        for line in Line::ALL {
            let cells: Vec<_> = line.positions().iter().map(|p| (p.row(), p.col())).collect();
            let board = board_with("p1", &cells);
            for last in line.positions() {
                let result = check_win(&board, last);
                assert!(result.won(), "{line} not detected from {last}");
                assert_eq!(result.line(), Some(line));
            }
        }
    }

    #[test]
    fn test_lines_through_cell() {
        let center: Vec<_> = Line::through(Position::at(1, 1)).collect();
        assert_eq!(
            center,
            [Line::Row(1), Line::Column(1), Line::Diagonal, Line::AntiDiagonal]
        );

        let edge: Vec<_> = Line::through(Position::at(1, 0)).collect();
        assert_eq!(edge, [Line::Row(1), Line::Column(0)]);

        let corner: Vec<_> = Line::through(Position::at(2, 0)).collect();
        assert_eq!(corner, [Line::Row(2), Line::Column(0), Line::AntiDiagonal]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with("p1", &[(0, 0), (0, 1)]);
        board.place(Position::at(0, 2), PlayerId::from("p2"));
        assert!(!check_win(&board, Position::at(0, 2)).won());
    }

    #[test]
    fn test_check_ignores_lines_not_through_last_move() {
        // A completed row elsewhere is not credited to an unrelated move.
        let mut board = board_with("p1", &[(0, 0), (0, 1), (0, 2)]);
        board.place(Position::at(2, 1), PlayerId::from("p2"));
        assert!(!check_win(&board, Position::at(2, 1)).won());
        assert_eq!(
            find_winner(&board).map(|(p, l)| (p.as_str(), l)),
            Some(("p1", Line::Row(0)))
        );
    }
}

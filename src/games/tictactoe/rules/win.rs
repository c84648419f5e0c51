//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The eight candidate lines in scan order: rows, columns, diagonals.
///
/// When a board completes more than one line, the earliest entry here
/// is the one reported.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first line of three equal, non-empty squares.
///
/// Returns `None` if no line is complete.
#[instrument]
pub fn find_winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq.mark().is_some() && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the mark that completed the winning line, if any.
#[instrument]
pub fn winner_mark(board: &Board) -> Option<Mark> {
    find_winning_line(board).and_then(|[first, _, _]| board.get(first).mark())
}

#[cfg(test)]
mod tests {
    use super::super::super::Square;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(find_winning_line(&board), None);
        assert_eq!(winner_mark(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(
            find_winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(winner_mark(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        assert_eq!(
            find_winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
        assert_eq!(winner_mark(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // Full X board: every line is complete, the top row comes first.
        let board = Board::from_squares([Square::Occupied(Mark::X); 9]);
        assert_eq!(find_winning_line(&board), Some(WINNING_LINES[0]));

        // Left column and main diagonal both complete: column scans first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::Center,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert_eq!(find_winning_line(&board), Some(WINNING_LINES[3]));
    }
}

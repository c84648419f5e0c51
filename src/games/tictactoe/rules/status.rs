//! Status evaluation: in progress, won, or drawn.

use super::super::{BOARD_CELLS, Board, GameStatus, Mark};
use super::draw::is_full;
use super::win::winner_mark;
use tracing::instrument;

/// Derives the status of a board reached after `step` moves.
///
/// A win takes precedence over a full board. Otherwise the game is
/// drawn once `step` reaches the number of cells, and in progress with
/// the parity-derived mark to move before that.
#[instrument]
pub fn evaluate(board: &Board, step: usize) -> GameStatus {
    if let Some(mark) = winner_mark(board) {
        return GameStatus::Won(mark);
    }

    if step == BOARD_CELLS {
        debug_assert!(is_full(board), "step {step} reached with empty squares");
        return GameStatus::Drawn;
    }

    GameStatus::InProgress(Mark::to_move_at(step))
}

#[cfg(test)]
mod tests {
    use super::super::super::Square;
    use super::*;
    use crate::games::tictactoe::Mark::{O, X};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new(), 0), GameStatus::InProgress(X));
    }

    #[test]
    fn test_next_mark_follows_parity() {
        let board = Board::from_squares([
            Square::Occupied(X),
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
        ]);
        assert_eq!(evaluate(&board, 1), GameStatus::InProgress(O));
    }

    #[test]
    fn test_win_on_last_move_beats_draw() {
        // X O X / O X O / O X X  (X completes the main diagonal on move 9)
        let board = Board::from_squares([X, O, X, O, X, O, O, X, X].map(Square::Occupied));
        assert_eq!(evaluate(&board, 9), GameStatus::Won(X));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let board = Board::from_squares([X, O, X, O, X, X, O, X, O].map(Square::Occupied));
        assert_eq!(evaluate(&board, 9), GameStatus::Drawn);
    }
}

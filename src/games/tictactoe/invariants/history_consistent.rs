//! History consistency invariant: one entry per step, contiguous from zero.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is a contiguous run of steps starting at the empty board.
///
/// Entry `i` carries step number `i`, so lookup by step is unique. The
/// first entry is the empty board with no move; every later entry
/// records the move that produced it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(first) = state.history().first() else {
            return false;
        };

        if *first.board() != Board::new() || first.position().is_some() {
            return false;
        }

        state
            .history()
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.step() == i && (i == 0 || entry.position().is_some()))
    }

    fn description() -> &'static str {
        "History holds one entry per step, contiguous from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_truncated_branch_holds() {
        let state = GameState::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .jump_to_step(1)
            .expect("step 1 exists")
            .apply_move(Position::BottomLeft);
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_gap_violates() {
        let mut state = GameState::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center);
        state.history.remove(1);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}

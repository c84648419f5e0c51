//! Game history: snapshots, replay position, and branch-on-replay moves.
//!
//! [`GameState`] is an immutable value. Every transition returns a new
//! state, so a caller holding an old one never observes a change.
//! Winner, winning line and status are recomputed from the selected
//! snapshot on demand and never stored.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::invariants::{GameStateInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Mark};

/// One snapshot in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) step: usize,
    pub(crate) position: Option<Position>,
}

impl HistoryEntry {
    /// The empty board at step 0.
    fn initial() -> Self {
        Self {
            board: Board::new(),
            step: 0,
            position: None,
        }
    }

    /// Board snapshot after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves made to reach this entry (0 = empty board).
    pub fn step(&self) -> usize {
        self.step
    }

    /// The move that produced this entry; `None` for step 0.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Row of the move that produced this entry.
    pub fn row(&self) -> Option<usize> {
        self.position.map(Position::row)
    }

    /// Column of the move that produced this entry.
    pub fn column(&self) -> Option<usize> {
        self.position.map(Position::column)
    }
}

/// Order in which history entries are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Errors from history navigation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested step has no history entry.
    #[display("Step {step} is out of range (history holds steps 0..{len})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Complete game state: history, selected step, turn flag, sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) next_mark: Mark,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game at step 0 with ascending history order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game listing its history in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            next_mark: Mark::X,
            sort_order,
        }
    }

    /// All entries in step order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The selected step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The mark that moves next from the selected step.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// The order in which history is listed.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Looks up the entry with the given step number.
    pub fn entry(&self, step: usize) -> Option<&HistoryEntry> {
        self.history.get(step)
    }

    /// The entry at the selected step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The board at the selected step.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// The completed line on the selected board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::find_winning_line(self.current_board())
    }

    /// The winner on the selected board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner_mark(self.current_board())
    }

    /// Status derived from the selected board and step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.current_board(), self.current_step)
    }

    /// Entries ordered for display according to the sort order.
    pub fn entries_in_display_order(&self) -> Vec<&HistoryEntry> {
        match self.sort_order {
            SortOrder::Ascending => self.history.iter().collect(),
            SortOrder::Descending => self.history.iter().rev().collect(),
        }
    }

    /// Whether a move at `pos` would be accepted from the selected step.
    pub fn can_move(&self, pos: Position) -> bool {
        self.winner().is_none() && self.current_board().is_empty(pos)
    }

    /// Places the next mark at `pos`.
    ///
    /// Entries after the selected step are discarded before the new one
    /// is appended. If the selected board already has a winner or `pos`
    /// is occupied the move is ignored and an identical state returned.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark))]
    pub fn apply_move(&self, pos: Position) -> Self {
        if !self.can_move(pos) {
            debug!(?pos, "Move rejected");
            return self.clone();
        }

        let board = self.current_board().with_mark(pos, self.next_mark);
        let step = self.current_step + 1;

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry {
            board,
            step,
            position: Some(pos),
        });

        let next = Self {
            history,
            current_step: step,
            next_mark: self.next_mark.opponent(),
            sort_order: self.sort_order,
        };
        debug!(?pos, step, "Move applied");
        next.debug_check();
        next
    }

    /// Selects an existing step without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no entry has that step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_step(&self, step: usize) -> Result<Self, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let next = Self {
            history: self.history.clone(),
            current_step: step,
            next_mark: Mark::to_move_at(step),
            sort_order: self.sort_order,
        };
        debug!(step, "Jumped to step");
        next.debug_check();
        Ok(next)
    }

    /// Flips the history sort order. Nothing else changes.
    #[instrument(skip(self), fields(from = %self.sort_order))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_order: self.sort_order.toggle(),
            ..self.clone()
        }
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameStateInvariants::check_all(self)
        {
            panic!("game state invariants violated: {violations:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play(moves: &[Position]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(), |state, &pos| state.apply_move(pos))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.current_entry().position(), None);
        assert_eq!(state.status(), GameStatus::InProgress(Mark::X));
    }

    #[test]
    fn test_entry_records_row_and_column() {
        let state = play(&[Position::MiddleRight]);
        let entry = state.current_entry();
        assert_eq!(entry.step(), 1);
        assert_eq!(entry.row(), Some(1));
        assert_eq!(entry.column(), Some(2));
        assert_eq!(state.entry(0).and_then(HistoryEntry::row), None);
    }

    #[test]
    fn test_apply_move_leaves_previous_state_untouched() {
        let before = GameState::new();
        let after = before.apply_move(Position::Center);
        assert_eq!(before, GameState::new());
        assert_eq!(after.current_step(), 1);
    }

    #[test]
    fn test_jump_keeps_history_and_recomputes_turn() {
        let state = play(&[Position::TopLeft, Position::Center, Position::TopRight]);
        let jumped = state.jump_to_step(2).expect("step 2 exists");
        assert_eq!(jumped.history(), state.history());
        assert_eq!(jumped.current_step(), 2);
        assert_eq!(jumped.next_mark(), Mark::X);
        assert_eq!(jumped.current_board().occupied_count(), 2);
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = play(&[Position::Center]);
        assert_eq!(
            state.jump_to_step(2),
            Err(HistoryError::StepOutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_rejected_move_after_jump_does_not_truncate() {
        let state = play(&[Position::TopLeft, Position::Center, Position::TopRight]);
        let jumped = state.jump_to_step(1).expect("step 1 exists");
        // Top-left is occupied at step 1, so the branch survives.
        let after = jumped.apply_move(Position::TopLeft);
        assert_eq!(after, jumped);
        assert_eq!(after.history().len(), 4);
    }

    #[test]
    fn test_moves_allowed_again_after_jumping_back_from_a_win() {
        let won = play(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(won.status(), GameStatus::Won(Mark::X));
        assert!(!won.can_move(Position::BottomRight));

        let rewound = won.jump_to_step(4).expect("step 4 exists");
        assert_eq!(rewound.status(), GameStatus::InProgress(Mark::X));
        let branched = rewound.apply_move(Position::BottomRight);
        assert_eq!(branched.history().len(), 6);
        assert_eq!(
            branched.current_board().get(Position::BottomRight),
            Square::Occupied(Mark::X)
        );
        assert_eq!(branched.current_board().get(Position::TopRight), Square::Empty);
    }

    #[test]
    fn test_toggle_sort_order() {
        let state = play(&[Position::Center, Position::TopLeft]);
        let toggled = state.toggle_sort_order();
        assert_eq!(toggled.sort_order(), SortOrder::Descending);
        assert_eq!(toggled.current_step(), state.current_step());
        assert_eq!(toggled.history(), state.history());

        let steps: Vec<usize> = toggled
            .entries_in_display_order()
            .iter()
            .map(|e| e.step())
            .collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(toggled.toggle_sort_order(), state);
    }
}

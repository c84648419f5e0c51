//! Tic-tac-toe: board types, rules, and the move history.

pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod types;

pub use history::{GameState, HistoryEntry, HistoryError, SortOrder};
pub use position::Position;
pub use types::{BOARD_CELLS, Board, GameStatus, Mark, Square};

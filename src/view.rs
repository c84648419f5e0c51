//! Presentation contract derived from the game state.
//!
//! Everything a front end needs to draw the game comes from here: the
//! board with its winning-line highlight, the status line, and the
//! history list. These are pure functions of a [`GameState`], so both
//! the terminal UI and the plain-text renderer share them.

use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

use crate::games::tictactoe::{
    BOARD_CELLS, Board, GameState, GameStatus, HistoryEntry, Mark, Position, Square,
};

/// What a board widget draws.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Squares in row-major order.
    squares: [Square; BOARD_CELLS],
    /// Cells to highlight, if a line is complete.
    winning_line: Option<[Position; 3]>,
}

impl BoardView {
    /// Whether `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos))
    }

    /// The square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }
}

/// Builds the board view from a snapshot and its winning line.
pub fn render(board: &Board, winning_line: Option<[Position; 3]>) -> BoardView {
    BoardView {
        squares: *board.squares(),
        winning_line,
    }
}

/// Builds the board view for the selected step.
pub fn board_view(state: &GameState) -> BoardView {
    render(state.current_board(), state.winning_line())
}

/// The status line: `Winner: X`, `Match Drawn`, or `Next player: O`.
pub fn status_text(status: GameStatus) -> String {
    status.to_string()
}

/// The label of a history entry's jump control.
pub fn history_label(entry: &HistoryEntry) -> String {
    match entry.position() {
        Some(pos) if entry.step() > 0 => {
            format!("Go to move #{} ({},{})", entry.step(), pos.row(), pos.column())
        }
        _ => "Go to game start".to_string(),
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct HistoryItem {
    /// Step this row jumps to.
    step: usize,
    /// Text of the jump control.
    label: String,
    /// Rendered emphasized when true.
    is_current: bool,
}

/// The history list in display order.
#[instrument(skip(state), fields(order = %state.sort_order()))]
pub fn history_items(state: &GameState) -> Vec<HistoryItem> {
    state
        .entries_in_display_order()
        .into_iter()
        .map(|entry| {
            HistoryItem::new(
                entry.step(),
                history_label(entry),
                entry.step() == state.current_step(),
            )
        })
        .collect()
}

/// Symbol drawn for a square.
pub fn square_symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => ".",
        Square::Occupied(Mark::X) => "X",
        Square::Occupied(Mark::O) => "O",
    }
}

/// Renders the whole view as plain text.
///
/// Winning cells are wrapped in brackets and the current history entry
/// in `**` markers.
#[instrument(skip(state))]
pub fn render_text(state: &GameState) -> String {
    let view = board_view(state);
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| {
                let symbol = square_symbol(view.square(pos));
                if view.is_highlighted(pos) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&status_text(state.status()));
    out.push_str("\n\n");
    out.push_str(&format!("Sort: {}\n", state.sort_order()));

    for item in history_items(state) {
        if *item.is_current() {
            out.push_str(&format!("  **{}**\n", item.label()));
        } else {
            out.push_str(&format!("  {}\n", item.label()));
        }
    }

    out
}

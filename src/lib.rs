//! Tic-tac-toe with a browsable move history.
//!
//! The core is an immutable [`GameState`]: every move, jump, or sort
//! toggle returns a new state. Selecting a past step and then moving
//! discards the entries after that step before the new one is appended.
//!
//! # Architecture
//!
//! - **Rules**: win, draw, and status evaluation over a board snapshot
//! - **History**: snapshots, selected step, turn flag, sort order
//! - **Session**: dispatches [`Action`]s and notifies [`StateObserver`]s
//! - **View**: status text, history labels, board highlight
//! - **TUI**: ratatui front end over a session
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameState, GameStatus, Mark, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::Center)
//!     .apply_move(Position::TopLeft);
//! assert_eq!(state.status(), GameStatus::InProgress(Mark::X));
//!
//! let rewound = state.jump_to_step(1).unwrap();
//! assert_eq!(rewound.next_mark(), Mark::O);
//! assert_eq!(rewound.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod script;
mod session;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_CELLS, Board, GameState, GameStatus, HistoryEntry, HistoryError, Mark, Position,
    SortOrder, Square,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{
    WINNING_LINES, evaluate, find_winning_line, is_draw, is_full, winner_mark,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameStateInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Session management
pub use session::{Action, GameSession, StateObserver, TracingObserver, Transition};

// Crate-level exports - Presentation
pub use view::{
    BoardView, HistoryItem, board_view, history_items, history_label, render, render_text,
    square_symbol, status_text,
};

// Crate-level exports - Scripts
pub use script::{ScriptError, parse as parse_script, parse_action, run as run_script};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};

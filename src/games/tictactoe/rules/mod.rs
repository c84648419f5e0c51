//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here is stored on the
//! game state; callers recompute on demand.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::evaluate;
pub use win::{WINNING_LINES, find_winning_line, winner_mark};

//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: The board at step N is the board at step N-1 plus one mark.
///
/// The added mark belongs to the player whose turn it was at step N-1
/// and sits on the entry's recorded position. As a consequence the
/// board at step N has exactly N occupied squares.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.board().occupied_count() == i);

        counts_match
            && history.windows(2).enumerate().all(|(i, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                match next.position() {
                    Some(pos) => {
                        prev.board().is_empty(pos)
                            && prev.board().with_mark(pos, Mark::to_move_at(i)) == *next.board()
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark of the player to move"
    }
}

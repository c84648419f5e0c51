//! Alternating turn invariant: the turn flag follows step parity.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: The current step exists and the turn flag matches its parity.
///
/// X moves next on even steps, O on odd ones. The flag is stored for
/// convenience and must never drift from the selected step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
            && state.next_mark() == Mark::to_move_at(state.current_step())
    }

    fn description() -> &'static str {
        "Current step exists and the turn flag matches its parity"
    }
}

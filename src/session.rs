//! Game session: dispatches UI actions and notifies observers.
//!
//! The session is the single writer of the current [`GameState`]. Each
//! action produces a new state value; observers are told about it only
//! when it differs from the previous one.

use crate::games::tictactoe::{GameState, HistoryError, Position};
use tracing::{debug, info, instrument};

/// A user intent coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A board cell was clicked.
    Place(Position),
    /// A history entry was clicked.
    JumpTo(usize),
    /// The sort control was clicked.
    ToggleSort,
}

/// Whether dispatching an action changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new state was installed and observers were notified.
    Changed,
    /// The action was a no-op (for example, a click on an occupied cell).
    Unchanged,
}

/// Receives every new state installed by a [`GameSession`].
pub trait StateObserver {
    /// Called after the session's state changed.
    fn on_state_changed(&mut self, state: &GameState);
}

/// Logs every state change through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StateObserver for TracingObserver {
    fn on_state_changed(&mut self, state: &GameState) {
        info!(
            step = state.current_step(),
            entries = state.history().len(),
            sort_order = %state.sort_order(),
            status = %state.status(),
            "Game state changed"
        );
    }
}

/// Owner of the current game state.
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameSession {
    /// Creates a session around an initial state.
    #[instrument(skip(state))]
    pub fn new(state: GameState) -> Self {
        debug!("Creating game session");
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers an observer for future state changes.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Applies an action to the current state.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] when jumping to a step that does not exist.
    /// The state is left unchanged in that case.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, HistoryError> {
        let next = match action {
            Action::Place(pos) => self.state.apply_move(pos),
            Action::JumpTo(step) => self.state.jump_to_step(step)?,
            Action::ToggleSort => self.state.toggle_sort_order(),
        };

        if next == self.state {
            debug!("Action left state unchanged");
            return Ok(Transition::Unchanged);
        }

        self.state = next;
        for observer in &mut self.observers {
            observer.on_state_changed(&self.state);
        }
        Ok(Transition::Changed)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

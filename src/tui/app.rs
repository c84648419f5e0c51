//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};
use crate::games::tictactoe::{GameState, Position};
use crate::session::{Action, GameSession, TracingObserver};
use crate::view::{self, HistoryItem};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application around an initial game state.
    #[instrument(skip(state))]
    pub fn new(state: GameState) -> Self {
        let mut session = GameSession::new(state);
        session.subscribe(Box::new(TracingObserver));
        Self::with_session(session)
    }

    fn with_session(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// History rows in display order.
    pub fn history_items(&self) -> Vec<HistoryItem> {
        view::history_items(self.state())
    }

    /// Last error shown to the player, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('s') => {
                self.dispatch(Action::ToggleSort);
                self.select_current();
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let len = self.state().history().len();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = self.history_items().get(self.selected) {
                    self.dispatch(Action::JumpTo(*item.step()));
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        self.dispatch(Action::Place(pos));
        self.select_current();
    }

    fn dispatch(&mut self, action: Action) {
        match self.session.dispatch(action) {
            Ok(transition) => {
                debug!(?action, ?transition, "Action dispatched");
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "Action failed");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Points the history selection at the current step.
    fn select_current(&mut self) {
        if let Some(index) = self
            .history_items()
            .iter()
            .position(|item| *item.is_current())
        {
            self.selected = index;
        }
    }
}

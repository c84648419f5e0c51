//! Headless action scripts.
//!
//! A script is a list of tokens separated by whitespace or commas:
//!
//! - `m<cell>` places the next mark (`m4`, `mcenter`, `mtop-left`)
//! - `j<step>` jumps to a history step (`j0`, `j3`)
//! - `s` toggles the history sort order

use derive_more::{Display, Error, From};
use tracing::{info, instrument};

use crate::games::tictactoe::{GameState, HistoryError, Position};
use crate::session::{Action, GameSession, StateObserver};

/// Errors from parsing or running a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ScriptError {
    /// The token is not a known action.
    #[display("Unknown action '{token}' (expected m<cell>, j<step>, or s)")]
    UnknownAction {
        /// Offending token.
        token: String,
    },
    /// The cell of a move token is not a board position.
    #[display("Invalid cell in '{token}' (expected 0-8 or a label such as center)")]
    InvalidCell {
        /// Offending token.
        token: String,
    },
    /// The step of a jump token is not a number.
    #[display("Invalid step in '{token}'")]
    InvalidStep {
        /// Offending token.
        token: String,
    },
    /// A jump referenced a step that does not exist.
    #[display("{_0}")]
    #[from]
    History(HistoryError),
}

/// Parses a single token into an action.
#[instrument]
pub fn parse_action(token: &str) -> Result<Action, ScriptError> {
    let lowered = token.to_ascii_lowercase();
    if lowered == "s" {
        return Ok(Action::ToggleSort);
    }

    if let Some(cell) = lowered.strip_prefix('m') {
        return Position::from_label_or_number(cell)
            .map(Action::Place)
            .ok_or_else(|| ScriptError::InvalidCell {
                token: token.to_string(),
            });
    }

    if let Some(step) = lowered.strip_prefix('j') {
        return step
            .parse::<usize>()
            .map(Action::JumpTo)
            .map_err(|_| ScriptError::InvalidStep {
                token: token.to_string(),
            });
    }

    Err(ScriptError::UnknownAction {
        token: token.to_string(),
    })
}

/// Parses a whole script.
#[instrument(skip(script))]
pub fn parse(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_action)
        .collect()
}

/// Dispatches every action of `script` against `initial`.
///
/// Observers are subscribed before the first action runs.
#[instrument(skip(script, initial, observers))]
pub fn run(
    script: &str,
    initial: GameState,
    observers: Vec<Box<dyn StateObserver>>,
) -> Result<GameState, ScriptError> {
    let actions = parse(script)?;
    info!(actions = actions.len(), "Running script");

    let mut session = GameSession::new(initial);
    for observer in observers {
        session.subscribe(observer);
    }

    for action in actions {
        session.dispatch(action)?;
    }

    Ok(session.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Mark};

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            parse("m4, mtop-left j1 S\n"),
            Ok(vec![
                Action::Place(Position::Center),
                Action::Place(Position::TopLeft),
                Action::JumpTo(1),
                Action::ToggleSort,
            ])
        );
        assert_eq!(parse("   "), Ok(vec![]));
    }

    #[test]
    fn test_parse_errors_name_the_token() {
        assert_eq!(
            parse("m4 m9"),
            Err(ScriptError::InvalidCell {
                token: "m9".to_string()
            })
        );
        assert_eq!(
            parse("jx"),
            Err(ScriptError::InvalidStep {
                token: "jx".to_string()
            })
        );
        assert_eq!(
            parse("undo"),
            Err(ScriptError::UnknownAction {
                token: "undo".to_string()
            })
        );
    }

    #[test]
    fn test_run_winning_script() {
        let state = run("m0 m4 m1 m3 m2", GameState::new(), Vec::new()).expect("valid script");
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        assert_eq!(state.current_step(), 5);
    }

    #[test]
    fn test_run_bad_jump() {
        let err = run("m0 j5", GameState::new(), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ScriptError::History(HistoryError::StepOutOfRange { step: 5, len: 2 })
        );
    }
}

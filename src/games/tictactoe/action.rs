//! User intents and the reducer that applies them.
//!
//! The view never touches [`GameState`] directly: a click becomes an
//! [`Intent`], and [`reduce`] turns the current state plus an intent into the
//! next state.

use super::{GameState, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was activated.
    CellClicked(Position),
    /// A history entry was activated.
    HistoryJumped(usize),
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::CellClicked(pos) => write!(f, "click {}", pos.label()),
            Intent::HistoryJumped(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// Applies one intent to `state`, producing the next state.
#[instrument(skip(state), fields(step = state.step_number()))]
pub fn reduce(state: &GameState, intent: Intent) -> GameState {
    match intent {
        Intent::CellClicked(pos) => state.apply_move(pos),
        Intent::HistoryJumped(step) => state.jump_to(step),
    }
}

/// Applies intents in order, starting from a new game.
#[instrument(skip(intents))]
pub fn replay<'a>(intents: impl IntoIterator<Item = &'a Intent>) -> GameState {
    intents
        .into_iter()
        .fold(GameState::new(), |state, intent| reduce(&state, *intent))
}

/// Error parsing an intent script.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Intent {
    type Err = ScriptError;

    /// Parses `@N` as a jump to step `N`; anything else must name a cell,
    /// either as an index 0-8 or a position label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(step) = s.strip_prefix('@') {
            return step
                .parse::<usize>()
                .map(Intent::HistoryJumped)
                .map_err(|e| ScriptError::new(format!("Invalid step '{}': {}", step, e)));
        }

        Position::from_label_or_number(s)
            .map(Intent::CellClicked)
            .ok_or_else(|| ScriptError::new(format!("Invalid cell '{}'", s)))
    }
}

/// Parses a script of intents separated by commas or whitespace.
///
/// `"0, 4 1 @1 top-right"` clicks cells 0, 4 and 1, jumps back to step 1,
/// then clicks the top-right cell.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Intent>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(Intent::from_str)
        .collect()
}

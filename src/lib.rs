//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] finds the winner of a board snapshot.
//! - **State**: [`GameState`] records every snapshot and the step on screen;
//!   [`GameState::apply_move`] and [`GameState::jump_to`] return new states.
//! - **Intents**: [`Intent`] values feed [`reduce`], the only way the UI
//!   changes the game.
//! - **TUI**: a ratatui front end that renders the state and turns key
//!   presses into intents.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Player, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center)
//!     .jump_to(1);
//!
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;
mod tui;

// Crate-level exports - Game types
pub use games::tictactoe::{
    evaluate, parse_script, reduce, replay, winning_line, Board, GameInvariants, GameState,
    GameStatus, History, HistoryConsistentInvariant, HistoryEntry, Intent, Invariant,
    InvariantSet, InvariantViolation, Mark, Player, Position, ScriptError, Square,
    StepInRangeInvariant, TurnParityInvariant, LINES,
};

// Crate-level exports - Settings
pub use settings::{Settings, SettingsError};

// Crate-level exports - Terminal UI
pub use tui::{
    digit_position, draw, move_cursor, move_label, move_list, render_text, run_tui, square_label,
    status_line, App, Focus, MoveEntry,
};

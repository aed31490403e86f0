mod action;
mod history;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use action::{parse_script, reduce, replay, Intent, ScriptError};
pub use history::History;
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    StepInRangeInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{evaluate, winning_line, LINES};
pub use state::GameState;
pub use types::{Board, GameStatus, Player, Square};

/// Alias for the value a square can hold.
pub type Mark = Player;

/// Alias for a board recorded in history.
pub type HistoryEntry = Board;

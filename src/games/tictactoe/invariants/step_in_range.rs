//! Step invariant: the displayed step is a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number` indexes into history.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Displayed step is within recorded history"
    }
}

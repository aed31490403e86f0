//! Turn parity invariant: the player to move matches the marks on the board.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is next exactly on even steps, and the displayed board agrees.
///
/// On an even step both players have the same number of marks; on an odd
/// step X has one more.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(board) = state.history().get(state.step_number()) else {
            return false;
        };

        if state.x_is_next() != (state.step_number() % 2 == 0) {
            return false;
        }

        let xs = board.count(Player::X);
        let os = board.count(Player::O);
        if state.x_is_next() { xs == os } else { xs == os + 1 }
    }

    fn description() -> &'static str {
        "Next player matches step parity and mark counts"
    }
}

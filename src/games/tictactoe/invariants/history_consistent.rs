//! History consistency invariant: each snapshot is the previous one plus one mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: history is a legal move sequence from the empty board.
///
/// Entry 0 is empty, and entry `i` differs from entry `i - 1` in exactly one
/// square, which went from empty to the mark of the player whose turn it was
/// (X for odd `i`).
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();

        let Some(first) = entries.first() else {
            return false;
        };
        if first.occupied_count() != 0 {
            return false;
        }

        entries.windows(2).enumerate().all(|(i, pair)| {
            let mover = if i % 2 == 0 { Player::X } else { Player::O };
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                .collect();

            matches!(changed.as_slice(), [pos]
                if pair[0].get(*pos) == Square::Empty
                    && pair[1].get(*pos) == Square::Occupied(mover))
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player whose turn it was"
    }
}

//! Game state with move history and time travel.
//!
//! A [`GameState`] is a value: both transitions borrow the current state and
//! return the next one, so earlier states stay valid and comparable. The
//! player to move is derived from the step parity rather than stored.

use super::history::History;
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// History of snapshots plus the step currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    step_number: usize,
}

impl GameState {
    /// Creates a new game: one empty board, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
        }
    }

    /// Returns the recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X places the next mark (even step).
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history.entries()[self.step_number]
    }

    /// Winner on the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self.current_board())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// The move is ignored (an equal state is returned) when the displayed
    /// board already has a winner or `pos` is occupied. Otherwise snapshots
    /// after the displayed step are discarded before the new one is recorded.
    #[instrument(skip(self), fields(step = self.step_number, history_len = self.history.len()))]
    pub fn apply_move(&self, pos: Position) -> Self {
        let current = self.current_board();

        if let Some(winner) = rules::evaluate(current) {
            debug!(%winner, "Ignoring move, game already won");
            return self.clone();
        }

        if !current.is_empty(pos) {
            debug!("Ignoring move, square occupied");
            return self.clone();
        }

        let player = self.next_player();
        let mut board = current.clone();
        board.set(pos, Square::Occupied(player));

        let history = self.history.branch(self.step_number, board);
        let next = Self {
            step_number: history.last_step(),
            history,
        };
        debug!(%player, step = next.step_number, "Move applied");

        assert_invariants(&next);
        next
    }

    /// Displays the snapshot at `step` without altering history.
    ///
    /// A step outside the recorded history leaves the state unchanged.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, "Ignoring jump past end of history");
            return self.clone();
        }

        let next = Self {
            history: self.history.clone(),
            step_number: step,
        };
        assert_invariants(&next);
        next
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state without any checks, for exercising invariant detection.
    pub(crate) fn from_parts(history: History, step_number: usize) -> Self {
        Self {
            history,
            step_number,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::new(), |state, i| {
            state.apply_move(Position::from_index(*i).expect("valid index"))
        })
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let state = play(&[4]);
        assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.step_number(), 1);
        assert!(!state.x_is_next());
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let state = play(&[4]);
        let again = state.apply_move(Position::Center);
        assert_eq!(again, state);
    }

    #[test]
    fn test_previous_state_is_untouched() {
        let before = play(&[0, 4]);
        let snapshot = before.clone();
        let _after = before.apply_move(Position::TopRight);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let state = play(&[0, 4]);
        assert_eq!(state.jump_to(3), state);
    }

    #[test]
    fn test_jump_back_then_forward() {
        let state = play(&[0, 4, 8]);
        let back = state.jump_to(1);
        assert_eq!(back.history(), state.history());
        assert_eq!(back.next_player(), Player::O);
        let forward = back.jump_to(3);
        assert_eq!(forward, state);
    }
}

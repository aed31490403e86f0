//! Board snapshots recorded after each move.

use super::types::Board;
use serde::Serialize;

/// Ordered list of board snapshots.
///
/// Entry 0 is always the empty starting board and the list is never empty.
/// Entries are never edited once recorded; [`History::branch`] builds a new
/// history instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
        }
    }

    /// Number of recorded snapshots (moves made plus one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.entries.get(step)
    }

    /// All snapshots, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Index of the most recent snapshot.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Keeps snapshots `0..=step` and appends `board` after them.
    ///
    /// Anything recorded after `step` is dropped.
    pub fn branch(&self, step: usize, board: Board) -> Self {
        let keep = (step + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(board);
        Self { entries }
    }
}

#[cfg(test)]
impl History {
    /// Builds a history from raw snapshots without any checks.
    pub(crate) fn from_entries(entries: Vec<Board>) -> Self {
        Self { entries }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    fn marked(pos: Position, player: Player) -> Board {
        let mut board = Board::new();
        board.set(pos, Square::Occupied(player));
        board
    }

    #[test]
    fn test_new_history_has_start_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&Board::new()));
        assert_eq!(history.last_step(), 0);
    }

    #[test]
    fn test_branch_at_tip_appends() {
        let history = History::new().branch(0, marked(Position::Center, Player::X));
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&marked(Position::Center, Player::X)));
    }

    #[test]
    fn test_branch_drops_future_entries() {
        let history = History::new()
            .branch(0, marked(Position::Center, Player::X))
            .branch(1, marked(Position::TopLeft, Player::X))
            .branch(2, marked(Position::TopRight, Player::X));
        assert_eq!(history.len(), 4);

        let branched = history.branch(1, marked(Position::BottomLeft, Player::X));
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.get(1), history.get(1));
        assert_eq!(branched.get(2), Some(&marked(Position::BottomLeft, Player::X)));
        // the source history is untouched
        assert_eq!(history.len(), 4);
    }
}

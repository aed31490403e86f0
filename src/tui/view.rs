//! Text derived from a game state, independent of any terminal.

use crate::games::tictactoe::{GameState, GameStatus, Intent, Position, Square};

/// Label of the history entry for `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// One line per history entry, oldest first.
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    (0..state.history().len())
        .map(|step| MoveEntry {
            step,
            label: move_label(step),
            current: step == state.step_number(),
        })
        .collect()
}

/// An entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index the entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Whether this is the snapshot on screen.
    pub current: bool,
}

impl MoveEntry {
    /// Intent sent when the entry is activated.
    pub fn intent(&self) -> Intent {
        Intent::HistoryJumped(self.step)
    }
}

/// Status line for the displayed snapshot.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::InProgress { next } => format!("Next player: {}", next),
    }
}

/// Text shown in one cell.
///
/// Empty cells are blank, or show their 1-based key when `hints` is set.
pub fn square_label(state: &GameState, pos: Position, hints: bool) -> String {
    match state.current_board().get(pos) {
        Square::Occupied(player) => player.to_string(),
        Square::Empty if hints => (pos.to_index() + 1).to_string(),
        Square::Empty => String::new(),
    }
}

/// Plain-text rendering of the whole game: board, status and move list.
pub fn render_text(state: &GameState) -> String {
    let mut out = state.current_board().display();
    out.push_str("\n\n");
    out.push_str(&status_line(state));
    out.push('\n');
    for entry in move_list(state) {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step + 1, entry.label));
    }
    out
}

//! Application state and key handling.

use crate::games::tictactoe::{reduce, GameState, Intent, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in `state`; the cursor, focus and list selection are
/// presentation only and never affect the rules.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_move: 0,
            show_hints,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether empty cells show their key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an intent and keeps the move-list selection on the shown step.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        let next = reduce(&self.state, intent);
        if next == self.state {
            debug!(%intent, "Intent left state unchanged");
            return;
        }

        info!(%intent, step = next.step_number(), history_len = next.history().len(), "State updated");
        self.state = next;
        self.selected_move = self.state.step_number();
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.state.step_number();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(pos) = digit_position(key) {
            self.cursor = pos;
            self.dispatch(Intent::CellClicked(pos));
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Intent::CellClicked(self.cursor)),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.state.history().last_step();
        match key {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Intent::HistoryJumped(self.selected_move));
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](super::Board), kept apart from
//! the history bookkeeping so they can be reused by the view layer.

pub mod win;

pub use win::{evaluate, winning_line, LINES};

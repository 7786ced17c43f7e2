//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: nothing here mutates a board or
//! touches I/O, so the search can call them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, find_winning_line};

use super::phases::TerminalOutcome;
use super::types::Board;

/// Classifies a board as won, tied, or still in play.
///
/// A completed line takes precedence over a full board, so the last
/// move of a game can be both the ninth cell and a win.
pub fn terminal_outcome(board: &Board) -> TerminalOutcome {
    if let Some((side, line)) = find_winning_line(board) {
        return TerminalOutcome::Win { side, line };
    }
    if is_full(board) {
        return TerminalOutcome::Tie;
    }
    TerminalOutcome::Ongoing
}

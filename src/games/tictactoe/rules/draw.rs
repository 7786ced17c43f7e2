//! Full-board detection for tic-tac-toe.

use super::super::Board;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a tie.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

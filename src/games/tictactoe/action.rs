//! Moves and successor generation for tic-tac-toe.
//!
//! A move never edits a board in place: [`apply_move`] and
//! [`legal_children`] both hand back fresh boards.

use super::types::{BOARD_SIZE, Board, Cell, Side};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.index)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// Index is not in 0-8.
    #[display("index is outside the board")]
    OutOfRange,
    /// The cell is already taken.
    #[display("square is already occupied by {}", _0)]
    Occupied(Side),
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move does not fit the board.
    #[display("Invalid move at index {}: {}", index, reason)]
    InvalidMove {
        /// Requested index.
        index: usize,
        /// What was wrong with it.
        reason: InvalidMoveReason,
    },

    /// The computer was asked to move on a full or finished board.
    #[display("No legal move available")]
    NoLegalMove,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Side),

    /// Symbols can only be swapped between games.
    #[display("Symbols cannot be changed while a game is running")]
    SymbolsLocked,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Places `mover` at `index`, returning the new board.
///
/// Fails with [`MoveError::InvalidMove`] if the index is off the board
/// or the cell is taken.
pub fn apply_move(board: &Board, index: usize, mover: Side) -> Result<Board, MoveError> {
    if index >= BOARD_SIZE {
        return Err(MoveError::InvalidMove {
            index,
            reason: InvalidMoveReason::OutOfRange,
        });
    }
    if let Some(occupant) = board.cells()[index].side() {
        return Err(MoveError::InvalidMove {
            index,
            reason: InvalidMoveReason::Occupied(occupant),
        });
    }
    Ok(board.with_cell(index, Cell::from(mover)))
}

/// Every board reachable by one move of `mover`, in ascending index order.
pub fn legal_children(board: &Board, mover: Side) -> Vec<Board> {
    let cell = Cell::from(mover);
    board
        .empty_indices()
        .map(|index| board.with_cell(index, cell))
        .collect()
}

/// The index at which two boards differ, if they differ in exactly one cell.
pub fn changed_index(before: &Board, after: &Board) -> Option<usize> {
    let mut diffs = before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, _)| index);
    let first = diffs.next()?;
    diffs.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_one_cell() {
        let board = Board::new();
        let next = apply_move(&board, 4, Side::User).unwrap();
        assert_eq!(next.get(4), Some(Cell::User));
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(changed_index(&board, &next), Some(4));
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let err = apply_move(&Board::new(), 9, Side::User).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                index: 9,
                reason: InvalidMoveReason::OutOfRange,
            }
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let board: Board = "C........".parse().unwrap();
        let err = apply_move(&board, 0, Side::User).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_full_board_has_no_children() {
        let board: Board = "UCUUCCCUU".parse().unwrap();
        assert!(legal_children(&board, Side::Computer).is_empty());
    }

    #[test]
    fn test_changed_index_rejects_multiple_changes() {
        let before = Board::new();
        let after: Board = "CU.......".parse().unwrap();
        assert_eq!(changed_index(&before, &after), None);
        assert_eq!(changed_index(&before, &before), None);
    }
}

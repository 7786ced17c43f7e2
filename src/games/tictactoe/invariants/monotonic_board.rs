//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameRecord};
use super::Invariant;

/// Invariant: the board is exactly the move history laid onto an empty grid.
///
/// Replaying the history must never hit an occupied cell, and the
/// reconstructed board must match the current one.
pub struct MonotonicBoardInvariant;

impl Invariant<GameRecord> for MonotonicBoardInvariant {
    fn holds(record: &GameRecord) -> bool {
        let mut reconstructed = Board::new();

        for mv in record.history() {
            if !reconstructed.is_empty(mv.index) {
                return false;
            }
            reconstructed = reconstructed.with_cell(mv.index, Cell::from(mv.side));
        }

        reconstructed == *record.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

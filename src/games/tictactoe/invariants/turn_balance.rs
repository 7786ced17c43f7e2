//! Turn balance invariant: the first mover is never behind, and never more
//! than one move ahead.

use super::super::GameRecord;
use super::Invariant;

/// Invariant: `#first - #second` is 0 or 1.
pub struct TurnBalanceInvariant;

impl Invariant<GameRecord> for TurnBalanceInvariant {
    fn holds(record: &GameRecord) -> bool {
        let first = record.first_mover();
        let ahead = record.board().count(first);
        let behind = record.board().count(first.opponent());
        ahead == behind || ahead == behind + 1
    }

    fn description() -> &'static str {
        "First mover leads by zero or one cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Side;

    #[test]
    fn test_balanced_board_holds() {
        let mut record = GameRecord::new(Side::User);
        record.board = "U...C...U".parse().unwrap();
        assert!(TurnBalanceInvariant::holds(&record));
    }

    #[test]
    fn test_second_mover_ahead_violates() {
        let mut record = GameRecord::new(Side::User);
        record.board = "C........".parse().unwrap();
        assert!(!TurnBalanceInvariant::holds(&record));
    }

    #[test]
    fn test_computer_first_holds() {
        let mut record = GameRecord::new(Side::Computer);
        record.board = "C........".parse().unwrap();
        assert!(TurnBalanceInvariant::holds(&record));
    }
}

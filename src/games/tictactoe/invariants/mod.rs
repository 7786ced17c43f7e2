//! Consistency checks on a [`GameRecord`](super::GameRecord).
//!
//! Debug builds run [`TicTacToeInvariants`] after every transition.

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short text used in the violation message.
    fn description() -> &'static str;
}

/// A failed check, named by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the failed check.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked in one pass; implemented for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Runs every check and collects all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod turn_balance;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_balance::TurnBalanceInvariant;

/// The checks run on every [`GameRecord`](super::GameRecord).
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    TurnBalanceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameRecord, Move, Side};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let record = GameRecord::new(Side::User);
        assert!(TicTacToeInvariants::check_all(&record).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Side::User, 0),
            Move::new(Side::Computer, 4),
            Move::new(Side::User, 2),
        ];
        let record = GameRecord::replay(Side::User, &moves).unwrap();
        assert!(TicTacToeInvariants::check_all(&record).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut record = GameRecord::replay(Side::User, &[Move::new(Side::User, 4)]).unwrap();
        record.board = "C...U....".parse::<Board>().unwrap();

        let violations = TicTacToeInvariants::check_all(&record).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoardInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let record = GameRecord::new(Side::Computer);
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&record).is_ok());
    }
}

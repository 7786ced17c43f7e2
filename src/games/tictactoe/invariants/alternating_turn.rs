//! Alternating turn invariant: sides take turns, starting with the first mover.

use super::super::GameRecord;
use super::Invariant;

/// Invariant: sides alternate, and the history opens with the first mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameRecord> for AlternatingTurnInvariant {
    fn holds(record: &GameRecord) -> bool {
        let history = record.history();

        if let Some(first) = history.first()
            && first.side != record.first_mover()
        {
            return false;
        }

        history.windows(2).all(|pair| pair[0].side != pair[1].side)
    }

    fn description() -> &'static str {
        "Sides alternate turns starting with the first mover"
    }
}

//! Terminal outcomes of a tic-tac-toe position.

use super::types::Side;
use serde::{Deserialize, Serialize};

/// The three cells that completed a win, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Result of evaluating a board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalOutcome {
    /// Moves remain and nobody has three in a row.
    Ongoing,
    /// Board is full with no line.
    Tie,
    /// `side` completed `line`.
    Win {
        /// The winning side.
        side: Side,
        /// The completed line.
        line: WinningLine,
    },
}

impl TerminalOutcome {
    /// Returns true once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalOutcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            TerminalOutcome::Win { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            TerminalOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for TerminalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalOutcome::Ongoing => write!(f, "In progress"),
            TerminalOutcome::Tie => write!(f, "Tie"),
            TerminalOutcome::Win { side, line } => {
                let [a, b, c] = line.indices();
                write!(f, "{} wins ({}-{}-{})", side, a, b, c)
            }
        }
    }
}

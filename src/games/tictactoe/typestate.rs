//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own type. Only [`AwaitingUser`] accepts a user move,
//! only [`AwaitingComputer`] runs the search, and a [`GameFinished`]
//! always carries its outcome.

use super::action::{Move, MoveError, apply_move};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::phases::TerminalOutcome;
use super::rules::terminal_outcome;
use super::search::{Difficulty, select_move};
use super::types::{Board, Side};
use crate::games::SessionRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Game Record
// ─────────────────────────────────────────────────────────────

/// Board plus the moves that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) first: Side,
}

impl GameRecord {
    /// Creates an empty record for a game opened by `first`.
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            first,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Side that opened the game.
    pub fn first_mover(&self) -> Side {
        self.first
    }

    /// Side whose turn it is, judging by move count.
    pub fn to_move(&self) -> Side {
        if self.history.len() % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }

    /// Rebuilds a record from a move list, validating every move.
    #[instrument]
    pub fn replay(first: Side, moves: &[Move]) -> Result<Self, MoveError> {
        let mut record = Self::new(first);
        for mv in moves {
            if terminal_outcome(&record.board).is_terminal() {
                return Err(MoveError::GameOver);
            }
            if mv.side != record.to_move() {
                return Err(MoveError::WrongTurn(mv.side));
            }
            let board = apply_move(&record.board, mv.index, mv.side)?;
            record = record.record(*mv, board);
        }
        Ok(record)
    }

    fn record(mut self, mv: Move, board: Board) -> Self {
        self.board = board;
        self.history.push(mv);
        self
    }

    /// Checks every invariant, converting failures to a move error.
    pub fn verify(&self) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Moves a record into whichever phase its board calls for.
fn advance(record: GameRecord) -> Result<Turn, MoveError> {
    #[cfg(debug_assertions)]
    record.verify()?;

    let outcome = terminal_outcome(&record.board);
    if outcome.is_terminal() {
        debug!(%outcome, moves = record.history.len(), "Game finished");
        return Ok(Turn::Finished(GameFinished { record, outcome }));
    }

    Ok(match record.to_move() {
        Side::User => Turn::User(AwaitingUser { record }),
        Side::Computer => Turn::Computer(AwaitingComputer { record }),
    })
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - empty board, first mover chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    first: Side,
}

impl GameSetup {
    /// Creates a setup where `first` opens.
    pub fn new(first: Side) -> Self {
        Self { first }
    }

    /// Starts the game (consumes setup, returns the opener's phase).
    #[instrument]
    pub fn start(self) -> Turn {
        let record = GameRecord::new(self.first);
        match self.first {
            Side::User => Turn::User(AwaitingUser { record }),
            Side::Computer => Turn::Computer(AwaitingComputer { record }),
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(Side::User)
    }
}

// ─────────────────────────────────────────────────────────────
//  Awaiting User
// ─────────────────────────────────────────────────────────────

/// The user is to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitingUser {
    record: GameRecord,
}

impl AwaitingUser {
    /// Places the user's mark at `index`, consuming this phase.
    #[instrument(skip(self))]
    pub fn play(self, index: usize) -> Result<Turn, MoveError> {
        let board = apply_move(&self.record.board, index, Side::User)?;
        debug!(index, "User moved");
        advance(self.record.record(Move::new(Side::User, index), board))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.record.board
    }

    /// Returns the full record.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }
}

// ─────────────────────────────────────────────────────────────
//  Awaiting Computer
// ─────────────────────────────────────────────────────────────

/// The computer is to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitingComputer {
    record: GameRecord,
}

impl AwaitingComputer {
    /// Runs the search and plays the computer's move, consuming this phase.
    #[instrument(skip(self, rng))]
    pub fn respond(self, difficulty: Difficulty, rng: &mut SessionRng) -> Result<Turn, MoveError> {
        let choice = select_move(&self.record.board, difficulty, rng)?;
        debug!(index = choice.index, score = choice.score, "Computer moved");
        advance(
            self.record
                .record(Move::new(Side::Computer, choice.index), choice.board),
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.record.board
    }

    /// Returns the full record.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is always terminal: never [`TerminalOutcome::Ongoing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    record: GameRecord,
    outcome: TerminalOutcome,
}

impl GameFinished {
    /// Returns the outcome, including the winning line for a win.
    pub fn outcome(&self) -> TerminalOutcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.record.board
    }

    /// Returns the full record.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Restarts with the same first mover (consumes finished).
    #[instrument(skip(self))]
    pub fn restart(self) -> Turn {
        GameSetup::new(self.record.first).start()
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn
// ─────────────────────────────────────────────────────────────

/// Whichever phase a game is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting on the user.
    User(AwaitingUser),
    /// Waiting on the computer.
    Computer(AwaitingComputer),
    /// Game over.
    Finished(GameFinished),
}

impl Turn {
    /// Returns the record for any phase.
    pub fn record(&self) -> &GameRecord {
        match self {
            Turn::User(g) => g.record(),
            Turn::Computer(g) => g.record(),
            Turn::Finished(g) => g.record(),
        }
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        &self.record().board
    }

    /// Side to move, or `None` once finished.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            Turn::User(_) => Some(Side::User),
            Turn::Computer(_) => Some(Side::Computer),
            Turn::Finished(_) => None,
        }
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> TerminalOutcome {
        match self {
            Turn::Finished(g) => g.outcome(),
            _ => TerminalOutcome::Ongoing,
        }
    }

    /// Returns true if the game is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, Turn::Finished(_))
    }
}

//! Tic-tac-toe against a minimax opponent.
//!
//! - **Board model**: [`Board`], [`terminal_outcome`], [`legal_children`], [`apply_move`]
//! - **Search**: [`minimax_score`], [`choose_computer_move`], [`Difficulty`]
//! - **State machine**: [`GameSetup`] → [`Turn`] → [`GameFinished`], wrapped by [`Game`]

mod action;
mod game;
mod invariants;
mod phases;
mod position;
mod rules;
mod search;
mod typestate;
mod types;

pub use action::{InvalidMoveReason, Move, MoveError, apply_move, changed_index, legal_children};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    TicTacToeInvariants, TurnBalanceInvariant,
};
pub use phases::{TerminalOutcome, WinningLine};
pub use position::Position;
pub use rules::{LINES, find_winning_line, is_full, terminal_outcome};
pub use search::{
    Difficulty, MAX_DEPTH, ScoredMove, WIN_SCORE, best_computer_move, best_user_move,
    choose_computer_move, minimax_score, score_moves, select_move, terminal_score,
};
pub use typestate::{AwaitingComputer, AwaitingUser, GameFinished, GameRecord, GameSetup, Turn};
pub use types::{BOARD_SIZE, Board, BoardParseError, Cell, Side, Symbols};

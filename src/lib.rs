//! Minimax tic-tac-toe - a 3x3 engine with a search-driven opponent
//!
//! The library is the whole decision engine; a front end only has to
//! forward clicks and draw boards.
//!
//! # Architecture
//!
//! - **Board model**: immutable [`Board`] values, [`terminal_outcome`],
//!   [`legal_children`], [`apply_move`]
//! - **Search**: exhaustive [`minimax_score`] and the [`Difficulty`] policy
//!   in [`choose_computer_move`]
//! - **State machine**: typestate phases wrapped by the [`Game`] facade
//! - **Config**: [`EngineConfig`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Difficulty, Game, Side, SessionRng, Symbols, TerminalOutcome};
//!
//! let mut game = Game::with_rng(
//!     Side::User,
//!     Difficulty::Hard,
//!     Symbols::default(),
//!     SessionRng::new(7),
//! );
//! game.apply_user_move(4).unwrap();
//! assert_eq!(game.terminal_outcome(), TerminalOutcome::Ongoing);
//! let board = game.request_computer_move().unwrap();
//! assert_eq!(board.occupied(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, EngineConfig};

// Crate-level exports - Randomness
pub use games::SessionRng;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, AwaitingComputer, AwaitingUser, BOARD_SIZE, Board, BoardParseError,
    Cell, Difficulty, Game, GameFinished, GameRecord, GameSetup, InvalidMoveReason, Invariant,
    InvariantSet, InvariantViolation, LINES, MAX_DEPTH, MonotonicBoardInvariant, Move, MoveError,
    Position, ScoredMove, Side, Symbols, TerminalOutcome, TicTacToeInvariants, Turn,
    TurnBalanceInvariant, WIN_SCORE, WinningLine, apply_move, best_computer_move, best_user_move,
    changed_index, choose_computer_move, find_winning_line, is_full, legal_children, minimax_score,
    score_moves, select_move, terminal_outcome, terminal_score,
};

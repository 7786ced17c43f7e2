//! Session facade over the typestate phases.
//!
//! [`Game`] is what a front end holds: it owns the current [`Turn`], the
//! difficulty, the glyph map and the random source, and exposes the four
//! calls a presentation layer needs.

use super::action::MoveError;
use super::phases::TerminalOutcome;
use super::rules::terminal_outcome;
use super::search::Difficulty;
use super::typestate::{GameSetup, Turn};
use super::types::{Board, Side, Symbols};
use super::Move;
use crate::config::EngineConfig;
use crate::games::SessionRng;
use tracing::{debug, info, instrument, warn};

/// One in-progress game against the computer.
#[derive(Debug, Clone)]
pub struct Game {
    turn: Turn,
    first: Side,
    difficulty: Difficulty,
    symbols: Symbols,
    rng: SessionRng,
}

impl Game {
    /// Creates a game with default settings and a random seed.
    ///
    /// The user opens, difficulty is Easy and the user plays `X`.
    pub fn new() -> Self {
        Self::with_rng(
            Side::User,
            Difficulty::default(),
            Symbols::default(),
            SessionRng::from_random(),
        )
    }

    /// Creates a game from explicit settings.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_rng(
        first: Side,
        difficulty: Difficulty,
        symbols: Symbols,
        rng: SessionRng,
    ) -> Self {
        info!("Starting new game");
        Self {
            turn: GameSetup::new(first).start(),
            first,
            difficulty,
            symbols,
            rng,
        }
    }

    /// Creates a game from loaded configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => SessionRng::new(*seed),
            None => SessionRng::from_random(),
        };
        Self::with_rng(*config.first_player(), *config.difficulty(), config.symbols(), rng)
    }

    /// Plays the user's mark at `index` and returns the new board.
    #[instrument(skip(self))]
    pub fn apply_user_move(&mut self, index: usize) -> Result<Board, MoveError> {
        let state = match &self.turn {
            Turn::User(state) => state.clone(),
            Turn::Computer(_) => {
                warn!(index, "User moved out of turn");
                return Err(MoveError::WrongTurn(Side::User));
            }
            Turn::Finished(_) => {
                warn!(index, "User moved after game end");
                return Err(MoveError::GameOver);
            }
        };

        self.turn = state.play(index).inspect_err(|e| warn!(error = %e, "Rejected user move"))?;
        Ok(*self.turn.board())
    }

    /// Lets the computer move at the game's configured difficulty.
    pub fn request_computer_move(&mut self) -> Result<Board, MoveError> {
        self.request_computer_move_with(self.difficulty)
    }

    /// Lets the computer move at an explicit difficulty.
    #[instrument(skip(self))]
    pub fn request_computer_move_with(
        &mut self,
        difficulty: Difficulty,
    ) -> Result<Board, MoveError> {
        let state = match &self.turn {
            Turn::Computer(state) => state.clone(),
            Turn::User(_) => {
                warn!("Computer asked to move out of turn");
                return Err(MoveError::WrongTurn(Side::Computer));
            }
            Turn::Finished(_) => {
                warn!("Computer asked to move on a finished board");
                return Err(MoveError::NoLegalMove);
            }
        };

        self.turn = state.respond(difficulty, &mut self.rng)?;
        Ok(*self.turn.board())
    }

    /// Outcome of the current board.
    pub fn terminal_outcome(&self) -> TerminalOutcome {
        terminal_outcome(self.turn.board())
    }

    /// Clears the board and starts over with the same first mover.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Board {
        info!(first = %self.first, "Resetting game");
        self.turn = GameSetup::new(self.first).start();
        *self.turn.board()
    }

    /// Changes the difficulty; allowed at any time.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Exchanges the user and computer glyphs.
    ///
    /// Only allowed while no game is running.
    pub fn swap_symbols(&mut self) -> Result<Symbols, MoveError> {
        if self.is_running() {
            return Err(MoveError::SymbolsLocked);
        }
        self.symbols = self.symbols.swapped();
        debug!(user = %self.symbols.user, computer = %self.symbols.computer, "Symbols swapped");
        Ok(self.symbols)
    }

    /// True once a mark is down and until the game ends.
    pub fn is_running(&self) -> bool {
        !self.turn.is_finished() && self.turn.board().occupied() > 0
    }

    /// Current phase.
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.turn.board()
    }

    /// Moves so far.
    pub fn history(&self) -> &[Move] {
        self.turn.record().history()
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current glyph map.
    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// Seed of the game's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

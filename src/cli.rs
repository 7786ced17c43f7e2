//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::{Difficulty, Side};

/// Minimax tic-tac-toe - play against a search-driven opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to MINIMAX_TICTACTOE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured difficulty (easy, medium, hard)
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Override the configured random seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Side that opens each game (user, computer)
        #[arg(long)]
        first: Option<Side>,
    },

    /// Score every computer move on a board
    Analyze {
        /// Nine cells: C/O computer, U/X user, . empty (e.g. "CC.UU....")
        #[arg(short, long)]
        board: String,

        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play many games automatically and report the tally
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// How the user side picks its moves
        #[arg(long, value_enum, default_value = "random")]
        opponent: Opponent,

        /// Side that opens each game (user, computer)
        #[arg(long)]
        first: Option<Side>,
    },
}

/// Strategy for the simulated user in self-play.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// Minimax-optimal replies
    Optimal,
}

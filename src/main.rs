//! Minimax tic-tac-toe - terminal front end
//!
//! Thin presentation layer over the library: reads moves from stdin and
//! prints boards with the configured glyphs.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Opponent};
use minimax_tictactoe::{
    Board, Difficulty, EngineConfig, Game, Position, ScoredMove, SessionRng, Side, Symbols,
    TerminalOutcome, Turn, best_computer_move, best_user_move, score_moves, terminal_outcome,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        EngineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match cli.command {
        Command::Play { first } => {
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            run_play(&config)
        }
        Command::Analyze { board, json } => run_analyze(&board, json),
        Command::Selfplay {
            games,
            opponent,
            first,
        } => {
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            run_selfplay(&config, games, opponent)
        }
    }
}

const HELP: &str = "\
Enter a square (0-8 or a name like 'center'), or one of:
  new                  start a new game
  swap                 exchange X and O (between games only)
  easy|medium|hard     change difficulty
  help                 show this text
  quit                 leave";

/// Interactive game on stdin/stdout.
#[instrument(skip_all)]
fn run_play(config: &EngineConfig) -> Result<()> {
    let mut game = Game::from_config(config);
    info!(seed = game.seed(), "Interactive session started");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", HELP);
    println!("Difficulty: {}", game.difficulty());

    loop {
        if let Turn::Computer(_) = game.turn() {
            game.request_computer_move()
                .context("Computer failed to move")?;
            println!("\nComputer played:");
        }

        println!("\n{}", game.board().render(&game.symbols()));

        let outcome = game.terminal_outcome();
        if outcome.is_terminal() {
            println!("{}", describe_outcome(outcome, game.symbols()));
            println!("Type 'new' to play again or 'quit' to leave.");
        }

        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim().to_lowercase();

        match input.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(()),
            "help" | "?" => println!("{}", HELP),
            "new" => {
                game.new_game();
                println!("New game.");
            }
            "swap" => match game.swap_symbols() {
                Ok(symbols) => println!("You are now '{}'.", symbols.user),
                Err(e) => println!("{}", e),
            },
            other => {
                if let Ok(difficulty) = other.parse::<Difficulty>() {
                    game.set_difficulty(difficulty);
                    println!("Difficulty: {}", difficulty);
                    continue;
                }
                let Some(position) = Position::from_label_or_number(other) else {
                    println!("Unrecognised input '{}'. Type 'help'.", other);
                    continue;
                };
                if let Err(e) = game.apply_user_move(position.to_index()) {
                    println!("{}", e);
                }
            }
        }
    }
}

fn describe_outcome(outcome: TerminalOutcome, symbols: Symbols) -> String {
    match outcome {
        TerminalOutcome::Win { side, line } => {
            let [a, b, c] = line.indices();
            let who = match side {
                Side::User => "You win",
                Side::Computer => "Computer wins",
            };
            format!("{} with '{}' on {}-{}-{}.", who, symbols.glyph(side), a, b, c)
        }
        TerminalOutcome::Tie => "It's a tie.".to_string(),
        TerminalOutcome::Ongoing => String::new(),
    }
}

/// JSON report for `analyze --json`.
#[derive(Serialize)]
struct Analysis {
    board: String,
    outcome: TerminalOutcome,
    moves: Vec<ScoredMove>,
    best: Option<usize>,
}

/// Scores every computer move on `board_text`.
#[instrument]
fn run_analyze(board_text: &str, json: bool) -> Result<()> {
    let board: Board = board_text.parse().context("Invalid --board")?;
    let outcome = terminal_outcome(&board);
    let moves = if outcome.is_terminal() {
        Vec::new()
    } else {
        score_moves(&board, Side::Computer)
    };
    let best = best_computer_move(&board).filter(|_| !outcome.is_terminal());

    if json {
        let report = Analysis {
            board: board.to_string(),
            outcome,
            moves,
            best: best.map(|m| m.index),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?
        );
        return Ok(());
    }

    println!("{}\n", board.render(&Symbols::default()));
    if outcome.is_terminal() {
        println!("{}", outcome);
        return Ok(());
    }
    for scored in &moves {
        let marker = if best.map(|b| b.index) == Some(scored.index) {
            "  <- hard"
        } else {
            ""
        };
        println!(
            "{:>2} {:<13} {:>4}{}",
            scored.index,
            Position::from_index(scored.index).map(|p| p.label()).unwrap_or("?"),
            scored.score,
            marker
        );
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Tally {
    computer: u32,
    user: u32,
    ties: u32,
}

/// Plays `games` full games and prints how they ended.
#[instrument(skip(config))]
fn run_selfplay(config: &EngineConfig, games: u32, opponent: Opponent) -> Result<()> {
    let base_seed = (*config.seed()).unwrap_or_else(|| SessionRng::from_random().seed());
    let mut opponent_rng = SessionRng::new(base_seed.wrapping_add(u64::from(games)));
    let mut tally = Tally::default();

    for round in 0..games {
        let mut game = Game::with_rng(
            *config.first_player(),
            *config.difficulty(),
            config.symbols(),
            SessionRng::new(base_seed.wrapping_add(u64::from(round))),
        );

        loop {
            match game.turn() {
                Turn::Finished(_) => break,
                Turn::Computer(_) => {
                    game.request_computer_move()?;
                }
                Turn::User(_) => {
                    let index = match opponent {
                        Opponent::Optimal => best_user_move(game.board())
                            .map(|m| m.index)
                            .context("User has no move on an unfinished board")?,
                        Opponent::Random => {
                            let open: Vec<usize> = game.board().empty_indices().collect();
                            open[opponent_rng.random_range(0..open.len())]
                        }
                    };
                    game.apply_user_move(index)?;
                }
            }
        }

        let outcome = game.terminal_outcome();
        debug!(round, %outcome, "Self-play game finished");
        match outcome.winner() {
            Some(Side::Computer) => tally.computer += 1,
            Some(Side::User) => tally.user += 1,
            None => tally.ties += 1,
        }
    }

    println!(
        "{} games at {} vs {:?} user (seed {}): computer {}, user {}, ties {}",
        games,
        config.difficulty(),
        opponent,
        base_seed,
        tally.computer,
        tally.user,
        tally.ties
    );
    Ok(())
}

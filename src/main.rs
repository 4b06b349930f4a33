//! Tapatan - console game and analysis tool.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tapatan::{AppConfig, ConsoleSession, Difficulty, FirstPlayer, GameSnapshot, ModeChoice, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            mode,
            computer,
            first,
        } => run_play(config, difficulty, mode, computer, first),
        Command::BestMove {
            board,
            player,
            difficulty,
        } => run_best_move(board, player, difficulty),
        Command::Schema => run_schema(),
    }
}

/// Run an interactive console game
#[instrument(skip_all)]
fn run_play(
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    mode: Option<ModeChoice>,
    computer: Option<Player>,
    first: Option<FirstPlayer>,
) -> Result<()> {
    let config =
        AppConfig::load(config.as_deref())?.with_overrides(difficulty, mode, computer, first);
    info!(?config, "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(&config, stdin.lock(), stdout.lock());
    let snapshot = session.run()?;

    info!(outcome = ?snapshot.outcome, "Goodbye");
    Ok(())
}

/// Print the search result for one position
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: tapatan::Board, player: Player, difficulty: Difficulty) -> Result<()> {
    let analysis = tapatan::analyze(&board, player, difficulty);
    let mut out = BufWriter::new(std::io::stdout().lock());
    writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
    out.flush()?;
    Ok(())
}

/// Print the JSON schema of the snapshot type
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(GameSnapshot);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

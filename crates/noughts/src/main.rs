//! Noughts - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, GameConfig, simulate, terminal};
use noughts_tictactoe::Board;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        None => terminal::run(&config).await,
        Some(Command::Play {
            mode,
            ai_delay_ms,
            show_scores,
        }) => {
            let config = config
                .with_mode(mode)
                .with_ai_delay_ms(ai_delay_ms)
                .with_show_scores(show_scores);
            terminal::run(&config).await
        }
        Some(Command::Suggest { board, ai }) => run_suggest(&board, ai.into()),
        Some(Command::Simulate {
            games,
            opponent,
            seed,
            think_delay_ms,
        }) => run_simulate(games, opponent, seed, Duration::from_millis(think_delay_ms)).await,
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,noughts=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument]
fn run_suggest(board: &str, ai: noughts_tictactoe::Mark) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    println!("{}", terminal::suggestion_report(&board, ai));
    Ok(())
}

#[instrument]
async fn run_simulate(
    games: u32,
    opponent: noughts::Opponent,
    seed: u64,
    think_delay: Duration,
) -> Result<()> {
    info!("Starting simulation");
    let tally = simulate(games, opponent, seed, think_delay).await?;
    println!("Minimax vs {opponent:?}: {tally}");
    Ok(())
}

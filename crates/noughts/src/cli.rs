//! Command-line interface for noughts.

use crate::{GameMode, Opponent};
use clap::{Parser, Subcommand, ValueEnum};
use noughts_tictactoe::Mark;

/// Noughts - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a perfect minimax AI, or a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Game mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Milliseconds the AI waits before answering (overrides config)
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Show the minimax score of every open square
        #[arg(long)]
        show_scores: bool,
    },

    /// Evaluate a board and print the best move
    Suggest {
        /// Board as nine symbols, e.g. `XX_O_____` or `xx./o../...`
        board: String,

        /// Mark to find a move for
        #[arg(long, value_enum, default_value = "o")]
        ai: MarkArg,
    },

    /// Play batches of AI games and print the results
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Opponent for the minimax player
        #[arg(long, value_enum, default_value = "random")]
        opponent: Opponent,

        /// Seed for random opponents
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Milliseconds each minimax player waits before moving
        #[arg(long, default_value = "0")]
        think_delay_ms: u64,
    },
}

/// Mark selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

//! Noughts - tic-tac-toe against a perfect minimax AI, or a friend.
//!
//! # Architecture
//!
//! - **Session**: board, turn order, mode and the cancellable AI timer
//! - **Players**: minimax and random players behind one async trait
//! - **Orchestrator**: plays two players against each other
//! - **Terminal**: line-based front end used by the `play` command
//!
//! Game rules and the search live in [`noughts_tictactoe`].
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameMode, GameSession};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (mut session, mut ai_moves) = GameSession::with_channel(GameMode::Single, Duration::from_millis(500));
//! session.human_move(noughts_tictactoe::Position::Center)?;
//! session.schedule_ai_move()?;
//! if let Some(ai_move) = ai_moves.recv().await {
//!     session.apply_ai_move(ai_move)?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod mode;
mod orchestrator;
pub mod players;
mod session;
mod simulate;
pub mod terminal;

pub use cli::{Cli, Command, MarkArg};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use error::SessionError;
pub use mode::GameMode;
pub use orchestrator::{GameEvent, Orchestrator};
pub use session::{AiMove, GameSession, SessionSnapshot};
pub use simulate::{Opponent, Tally, simulate};

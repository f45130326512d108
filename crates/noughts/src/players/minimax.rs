//! Minimax AI player.

use super::Player;
use anyhow::Result;
use noughts_tictactoe::{Game, Position, best_move};
use std::time::Duration;
use tracing::debug;

/// Perfect player backed by exhaustive minimax search.
pub struct MinimaxPlayer {
    name: String,
    think_delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a player that answers immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            think_delay: Duration::ZERO,
        }
    }

    /// Waits `delay` before each move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");

        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let mark = game.to_move();
        match best_move(game.board(), mark, mark.opponent()) {
            Some(pos) => {
                debug!(ai = %self.name, position = %pos, "AI chose position");
                Ok(pos)
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

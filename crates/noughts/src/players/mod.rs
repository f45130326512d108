//! Player trait and implementations.

mod minimax;
mod random;

pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use noughts_tictactoe::{Game, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the mark currently to move.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

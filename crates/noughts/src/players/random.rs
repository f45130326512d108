//! Player that picks uniformly among empty squares.

use super::Player;
use anyhow::Result;
use noughts_tictactoe::{Game, Position};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Random opponent with a reproducible seed.
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random player seeded with `seed`.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        let moves = Position::valid_moves(game.board());
        let pos = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(player = %self.name, position = %pos, "Random player chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

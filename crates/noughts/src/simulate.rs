//! Batch games between the minimax player and an opponent.

use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{MinimaxPlayer, Player, RandomPlayer};
use anyhow::Result;
use derive_getters::Getters;
use noughts_tictactoe::{Mark, Outcome};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Who the minimax player faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum Opponent {
    /// Another minimax player.
    Minimax,
    /// Uniformly random moves.
    #[default]
    Random,
}

/// Results of a batch, counted from the minimax player's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct Tally {
    /// Games the minimax player won.
    wins: u32,
    /// Games the opponent won.
    losses: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome, ai_mark: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == ai_mark => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw | Outcome::InProgress => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} won, {} lost, {} drawn",
            self.games(),
            self.wins,
            self.losses,
            self.draws
        )
    }
}

/// Plays `games` games. The minimax player takes X in even games and O in odd ones.
///
/// Random opponents are seeded with `seed + game index`. Minimax players
/// wait `think_delay` before each move.
#[instrument]
pub async fn simulate(games: u32, opponent: Opponent, seed: u64, think_delay: Duration) -> Result<Tally> {
    let mut tally = Tally::default();

    for game_index in 0..games {
        let ai_mark = if game_index % 2 == 0 { Mark::X } else { Mark::O };
        let ai: Box<dyn Player> = Box::new(MinimaxPlayer::new("Minimax").with_think_delay(think_delay));
        let other: Box<dyn Player> = match opponent {
            Opponent::Minimax => {
                Box::new(MinimaxPlayer::new("Minimax (opponent)").with_think_delay(think_delay))
            }
            Opponent::Random => Box::new(RandomPlayer::new("Random", seed.wrapping_add(u64::from(game_index)))),
        };
        let (player_x, player_o) = match ai_mark {
            Mark::X => (ai, other),
            Mark::O => (other, ai),
        };

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
        let outcome = orchestrator.run().await?;

        while let Ok(event) = event_rx.try_recv() {
            if let GameEvent::MoveMade { player, mark, position } = event {
                trace!(game_index, %player, %mark, %position, "Move");
            }
        }

        debug!(game_index, %ai_mark, %outcome, "Game complete");
        tally.record(outcome, ai_mark);
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_from_ai_side() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win(Mark::O), Mark::O);
        tally.record(Outcome::Win(Mark::X), Mark::O);
        tally.record(Outcome::Draw, Mark::X);
        assert_eq!((tally.wins, tally.losses, tally.draws), (1, 1, 1));
        assert_eq!(tally.to_string(), "3 games: 1 won, 1 lost, 1 drawn");
    }
}

//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use noughts_tictactoe::{Game, Mark, Outcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Move was made.
    MoveMade {
        /// Name of the mover.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// Board after the move, in display form.
    StateChanged(String),
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = player.get_move(&self.game).await?;
            self.game.make_move(position)?;

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                mark,
                position,
            })?;
            self.event_tx
                .send(GameEvent::StateChanged(self.game.board().display()))?;
        }

        let outcome = self.game.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%outcome, ?winner, "Game finished");
        self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
        Ok(outcome)
    }
}

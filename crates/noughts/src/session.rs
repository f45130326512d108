//! Game session: board, turn order, mode and the AI timer.

use crate::{GameConfig, GameMode, SessionError};
use derive_getters::Getters;
use derive_new::new;
use noughts_tictactoe::{Board, Game, Mark, MinimaxAi, Outcome, Position};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Result of a scheduled AI search, delivered over the session's channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct AiMove {
    /// Session generation the search was started in.
    generation: u64,
    /// Chosen square, `None` if the board had no move.
    position: Option<Position>,
}

/// Read-only view of a session for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct SessionSnapshot {
    /// Current board.
    board: Board,
    /// Mark that moves next.
    to_move: Mark,
    /// Current outcome.
    outcome: Outcome,
    /// Current mode.
    mode: GameMode,
    /// Whether an AI move is scheduled.
    ai_thinking: bool,
}

impl SessionSnapshot {
    /// One-line status, e.g. `Next player: X`.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Win(mark) => format!("Winner: {mark}"),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress if self.ai_thinking => "AI is thinking...".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move),
        }
    }
}

/// A single game session.
///
/// The AI reply is computed by a Tokio task that waits out the configured
/// delay, searches a copy of the board and sends an [`AiMove`] back over
/// the channel given at construction. Resetting the session aborts that
/// task and bumps the generation so any reply already in flight is
/// discarded by [`GameSession::apply_ai_move`].
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    mode: GameMode,
    ai_delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    ai_moves: mpsc::UnboundedSender<AiMove>,
}

impl GameSession {
    /// Creates a session that reports AI moves on `ai_moves`.
    #[instrument(skip(ai_moves))]
    pub fn new(mode: GameMode, ai_delay: Duration, ai_moves: mpsc::UnboundedSender<AiMove>) -> Self {
        info!(mode = mode.name(), "Creating new game session");
        Self {
            game: Game::new(),
            mode,
            ai_delay,
            generation: 0,
            pending: None,
            ai_moves,
        }
    }

    /// Creates a session and the receiver for its AI moves.
    pub fn with_channel(mode: GameMode, ai_delay: Duration) -> (Self, mpsc::UnboundedReceiver<AiMove>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(mode, ai_delay, tx), rx)
    }

    /// Creates a session from configuration.
    pub fn from_config(config: &GameConfig) -> (Self, mpsc::UnboundedReceiver<AiMove>) {
        Self::with_channel(*config.mode(), config.ai_delay())
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// The computer player for this mode, if any.
    pub fn ai(&self) -> Option<MinimaxAi> {
        self.mode.ai_mark().map(MinimaxAi::new)
    }

    /// True when the AI is to move in a live game.
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.mode.ai_mark() == Some(self.game.to_move())
    }

    /// True while an AI search is scheduled or running.
    pub fn has_pending_ai_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Captures the session for display.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(
            *self.game.board(),
            self.game.to_move(),
            self.game.outcome(),
            self.mode,
            self.has_pending_ai_move(),
        )
    }

    /// Applies a move entered by a human.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn human_move(&mut self, pos: Position) -> Result<Outcome, SessionError> {
        if self.is_ai_turn() {
            warn!(position = %pos, "Human tried to move on the AI's turn");
            return Err(SessionError::NotHumanTurn);
        }
        let outcome = self.game.make_move(pos)?;
        info!(position = %pos, %outcome, "Human moved");
        Ok(outcome)
    }

    /// Starts the AI timer for the current position.
    ///
    /// Does nothing if a search is already pending. Must be called from
    /// within a Tokio runtime.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn schedule_ai_move(&mut self) -> Result<(), SessionError> {
        let ai = match self.ai() {
            Some(ai) if self.is_ai_turn() => ai,
            _ => return Err(SessionError::NotAiTurn),
        };
        if self.pending.is_some() {
            debug!("AI move already pending");
            return Ok(());
        }

        let board = *self.game.board();
        let delay = self.ai_delay;
        let generation = self.generation;
        let tx = self.ai_moves.clone();
        debug!(?delay, "Scheduling AI move");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let position = match tokio::task::spawn_blocking(move || ai.best_move(&board)).await {
                Ok(position) => position,
                Err(e) => {
                    warn!(error = %e, "AI search task failed");
                    None
                }
            };
            if tx.send(AiMove { generation, position }).is_err() {
                debug!("Session receiver dropped before AI move was delivered");
            }
        }));
        Ok(())
    }

    /// Applies a delivered AI move.
    ///
    /// Returns `Ok(None)` for a reply from before the last reset.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_ai_move(&mut self, ai_move: AiMove) -> Result<Option<Position>, SessionError> {
        if ai_move.generation != self.generation {
            debug!(stale = ai_move.generation, "Discarding stale AI move");
            return Ok(None);
        }
        self.pending = None;

        let ai = self.ai().ok_or(SessionError::NotAiTurn)?;
        let pos = ai_move.position.ok_or(SessionError::NoMoveAvailable)?;
        let outcome = self.game.make_move_as(ai.mark(), pos)?;
        info!(position = %pos, %outcome, "AI moved");
        Ok(Some(pos))
    }

    /// Takes back moves until a human is to play again.
    ///
    /// In single-player this removes the AI's reply together with the
    /// human move before it.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Position, SessionError> {
        self.cancel_pending();
        let mut last = self.game.undo()?;
        if let Some(ai_mark) = self.mode.ai_mark() {
            while self.game.to_move() == ai_mark && !self.game.history().is_empty() {
                last = self.game.undo()?;
            }
        }
        Ok(last)
    }

    /// Starts a fresh game in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.game = Game::new();
        info!(generation = self.generation, "Session reset");
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending AI move");
            handle.abort();
        }
        self.generation += 1;
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

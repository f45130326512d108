//! Validated game state for tic-tac-toe.

use crate::error::MoveError;
use crate::rules::classify;
use crate::{Board, Mark, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game in play: board, whose turn it is, and the moves so far.
///
/// X always moves first. The outcome is recomputed after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    history: Vec<Position>,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Places the current mark at the given position.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        self.outcome = classify(&self.board);

        debug!(outcome = %self.outcome, moves = self.history.len(), "Move applied");
        Ok(self.outcome)
    }

    /// Places `mark` at the given position, rejecting it if it is not that mark's turn.
    #[instrument(skip(self))]
    pub fn make_move_as(&mut self, mark: Mark, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mark != self.to_move {
            return Err(MoveError::WrongPlayer(mark));
        }
        self.make_move(pos)
    }

    /// Takes back the last move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Position, MoveError> {
        let pos = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.set(pos, Square::Empty);
        self.to_move = self.to_move.opponent();
        self.outcome = classify(&self.board);
        debug!(position = %pos, "Move undone");
        Ok(pos)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[Position]) -> Game {
        let mut game = Game::new();
        for pos in moves {
            game.make_move(*pos).unwrap();
        }
        game
    }

    #[test]
    fn test_alternating_players() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = play(&[Position::Center]);
        let err = game.make_move(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert!(err.to_string().contains("occupied"));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = play(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ]);
        assert_eq!(game.make_move(Position::TopRight), Ok(Outcome::Win(Mark::X)));
        assert!(game.is_over());
        assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        // X O X / X O O / O X X
        let game = play(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move_as(Mark::O, Position::Center),
            Err(MoveError::WrongPlayer(Mark::O))
        );
        assert_eq!(game.make_move_as(Mark::X, Position::Center), Ok(Outcome::InProgress));
    }

    #[test]
    fn test_undo_restores_turn_and_outcome() {
        let mut game = play(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        assert!(game.is_over());
        assert_eq!(game.undo(), Ok(Position::TopRight));
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.to_move(), Mark::X);
        assert!(game.board().is_empty(Position::TopRight));
    }

    #[test]
    fn test_undo_empty_game() {
        assert_eq!(Game::new().undo(), Err(MoveError::NothingToUndo));
    }
}

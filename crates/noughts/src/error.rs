//! Session error types.

use derive_more::{Display, Error, From};
use noughts_tictactoe::MoveError;

/// Errors raised by [`crate::GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The underlying game rejected the move.
    #[display("{_0}")]
    Move(MoveError),

    /// A human tried to move while the AI is to play.
    #[display("It's the AI's turn")]
    #[from(ignore)]
    NotHumanTurn,

    /// An AI move was requested when the AI is not to play.
    #[display("It's not the AI's turn")]
    #[from(ignore)]
    NotAiTurn,

    /// The search found no square to play.
    #[display("No move available")]
    #[from(ignore)]
    NoMoveAvailable,
}

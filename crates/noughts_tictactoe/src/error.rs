//! Error types for board construction and move validation.

use crate::{Mark, Position};
use derive_more::{Display, Error};

/// A board could not be built from caller-supplied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The input did not describe exactly nine cells.
    #[display("Board must have 9 cells, got {len}")]
    InvalidLength {
        /// Number of cells supplied.
        len: usize,
    },
    /// A cell symbol is not a mark or an empty marker.
    #[display("Unrecognized cell {symbol:?} at index {index}")]
    UnknownSymbol {
        /// Cell index where the symbol appeared.
        index: usize,
        /// The offending symbol.
        symbol: char,
    },
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Mark),

    /// There is no move to take back.
    #[display("No moves to undo")]
    NothingToUndo,
}

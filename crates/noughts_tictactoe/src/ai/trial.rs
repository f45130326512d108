//! Scoped trial placement on a working board.

use crate::{Board, Mark, Position, Square};
use std::ops::{Deref, DerefMut};

/// A mark placed on an empty square for as long as the guard lives.
///
/// Dropping the guard clears the square again, so the working board is
/// restored on every exit path of the search.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    /// Places `mark` at `pos`, which must be empty.
    pub(crate) fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(pos), "trial move on occupied square {pos}");
        board.set(pos, Square::Occupied(mark));
        Self { board, pos }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating any nine-square board, including
//! hypothetical boards reached during search. Rules never store state;
//! an [`Outcome`] is always recomputed from the board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn classify(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

//! Move selection for the computer player.

mod minimax;
mod trial;

pub use minimax::{MinimaxAi, WIN_SCORE, best_move, first_best, move_scores};

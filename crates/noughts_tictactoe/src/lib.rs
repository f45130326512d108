//! Pure tic-tac-toe rules and a perfect computer player.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`], [`Position`], [`Outcome`]
//! - **Rules**: stateless win/draw evaluation over any nine-square board
//! - **AI**: exhaustive minimax ([`best_move`]) that never loses
//! - **Game**: validated move application with turn order and history
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Board, Mark, Position, best_move};
//!
//! let board: Board = "XX_______".parse()?;
//! assert_eq!(best_move(&board, Mark::O, Mark::X), Some(Position::TopRight));
//! # Ok::<(), noughts_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use ai::{MinimaxAi, WIN_SCORE, best_move, first_best, move_scores};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{LINES, Line, check_winner, classify, is_draw, is_full, winning_line};
pub use types::{Board, Mark, Outcome, Square};

//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a single board symbol, case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from an arbitrary slice of squares.
    ///
    /// The slice must hold exactly nine squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: &[Square]) -> Result<Self, BoardError> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::InvalidLength { len: squares.len() })?;
        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact nine-symbol form, e.g. `XX_O_____`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            match square {
                Square::Empty => write!(f, "_")?,
                Square::Occupied(mark) => write!(f, "{mark}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses `X`, `O` and `_ . -` for empty; `|`, `/` and whitespace are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for symbol in s.chars() {
            match symbol {
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                '_' | '.' | '-' => squares.push(Square::Empty),
                other => match Mark::from_symbol(other) {
                    Some(mark) => squares.push(Square::Occupied(mark)),
                    None => {
                        return Err(BoardError::UnknownSymbol {
                            index: squares.len(),
                            symbol: other,
                        });
                    }
                },
            }
        }
        Self::from_squares(&squares)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty squares remain.
    #[display("In progress")]
    InProgress,
    /// A mark completed a line.
    #[display("Winner: {_0}")]
    Win(Mark),
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true when no more moves can be made.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XX_O_____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XX_O_____");
    }

    #[test]
    fn test_parse_grid_with_separators() {
        let board: Board = "x|o|.\n.|x|.\n.|.|o".parse().unwrap();
        assert_eq!(board.to_string(), "XO__X___O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::InvalidLength { len: 2 });
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XXQ______".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::UnknownSymbol { index: 2, symbol: 'Q' });
    }

    #[test]
    fn test_from_squares_requires_nine() {
        assert!(Board::from_squares(&[Square::Empty; 8]).is_err());
        assert_eq!(Board::from_squares(&[Square::Empty; 9]).unwrap(), Board::new());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "XOXOXO___".parse().unwrap();
        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(
            empty,
            vec![Position::BottomLeft, Position::BottomCenter, Position::BottomRight]
        );
        assert_eq!(board.occupied_count(), 6);
    }

    #[test]
    fn test_square_mark() {
        assert_eq!(Square::Empty.mark(), None);
        assert_eq!(Square::Occupied(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_string(&Outcome::Win(Mark::O)).unwrap();
        assert_eq!(json, r#"{"Win":"O"}"#);
    }
}

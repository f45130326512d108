//! Named board positions.

use super::types::Board;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[display("Center")]
    Center,
    /// Middle-right (position 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses player input: a 1-based number as printed on the board, or a label.
    ///
    /// Labels match case-insensitively and ignore spaces, hyphens and underscores,
    /// so `center`, `top left` and `BottomRight` all resolve.
    #[instrument]
    pub fn from_input(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| normalize(&pos.to_string()) == wanted)
    }

    /// Filters positions by board state, returning only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_positions().collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_board() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_input_numbers_are_one_based() {
        assert_eq!(Position::from_input("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_input(" 5 "), Some(Position::Center));
        assert_eq!(Position::from_input("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_input("0"), None);
        assert_eq!(Position::from_input("10"), None);
    }

    #[test]
    fn test_from_input_labels() {
        assert_eq!(Position::from_input("center"), Some(Position::Center));
        assert_eq!(Position::from_input("top left"), Some(Position::TopLeft));
        assert_eq!(Position::from_input("BottomRight"), Some(Position::BottomRight));
        assert_eq!(Position::from_input("middle_right"), Some(Position::MiddleRight));
        assert_eq!(Position::from_input("corner"), None);
        assert_eq!(Position::from_input(""), None);
    }
}

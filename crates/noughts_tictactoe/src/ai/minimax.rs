//! Exhaustive minimax search.
//!
//! Every continuation is explored; there is no pruning and no move
//! ordering. Terminal scores depend on depth so the search prefers
//! quick wins and slow losses:
//!
//! | terminal      | score          |
//! |---------------|----------------|
//! | AI line       | `10 - depth`   |
//! | opponent line | `depth - 10`   |
//! | full board    | `0`            |
//!
//! Depth counts plies from the start of each [`best_move`] call.

use super::trial::TrialMove;
use crate::rules::{check_winner, is_full};
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Computer player bound to a pair of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimaxAi {
    ai: Mark,
    human: Mark,
}

impl MinimaxAi {
    /// Plays `ai` against its opponent mark.
    pub fn new(ai: Mark) -> Self {
        Self {
            ai,
            human: ai.opponent(),
        }
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.ai
    }

    /// Best move for this player on `board`.
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        best_move(board, self.ai, self.human)
    }
}

/// Picks the optimal move for `ai` on `board`.
///
/// Empty squares are tried in ascending index order and the first square
/// with the highest score wins ties. Returns `None` when the board has no
/// empty square or already has a winner. The caller's board is never
/// modified.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, ai: Mark, human: Mark) -> Option<Position> {
    match first_best(&move_scores(board, ai, human)) {
        Some((pos, score)) => {
            debug!(position = %pos, score, "Selected move");
            Some(pos)
        }
        None => {
            debug!("No move available");
            None
        }
    }
}

/// The first entry holding the highest score.
///
/// Later entries replace the current best only on a strictly greater
/// score, so ties go to the earliest square.
pub fn first_best(scores: &[(Position, i32)]) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;
    for &(pos, score) in scores {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best
}

/// Minimax score of every empty square for `ai`, in ascending index order.
///
/// Empty when the board is full or already won.
#[instrument(skip(board), fields(board = %board))]
pub fn move_scores(board: &Board, ai: Mark, human: Mark) -> Vec<(Position, i32)> {
    debug_assert_ne!(ai, human, "players must use different marks");
    if check_winner(board).is_some() {
        return Vec::new();
    }

    let mut work = *board;
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .map(|pos| {
            let mut trial = TrialMove::place(&mut work, pos, ai);
            (pos, score(&mut trial, 0, false, ai, human))
        })
        .collect()
}

fn score(board: &mut Board, depth: i32, maximizing: bool, ai: Mark, human: Mark) -> i32 {
    match check_winner(board) {
        Some(mark) if mark == ai => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if is_full(board) {
        return 0;
    }

    let mark = if maximizing { ai } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut trial = TrialMove::place(board, pos, mark);
        let child = score(&mut trial, depth + 1, !maximizing, ai, human);
        best = if maximizing {
            best.max(child)
        } else {
            best.min(child)
        };
    }
    best
}

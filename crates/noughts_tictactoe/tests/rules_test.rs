//! Property tests for the rules engine.

use noughts_tictactoe::{
    Board, LINES, Mark, Outcome, Position, Square, best_move, check_winner, classify, is_full,
    winning_line,
};
use proptest::prelude::*;

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(square(), 9).prop_map(|cells| Board::from_squares(&cells).unwrap())
}

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

proptest! {
    #[test]
    fn prop_winner_owns_a_line(board in any_board()) {
        match check_winner(&board) {
            Some(mark) => prop_assert!(has_line(&board, mark)),
            None => {
                prop_assert!(!has_line(&board, Mark::X));
                prop_assert!(!has_line(&board, Mark::O));
            }
        }
    }

    #[test]
    fn prop_winning_line_is_first_in_scan_order(board in any_board()) {
        let first = LINES.iter().copied().find(|line| {
            let sq = board.get(line[0]);
            sq != Square::Empty && line.iter().all(|pos| board.get(*pos) == sq)
        });
        prop_assert_eq!(winning_line(&board).map(|(_, line)| line), first);
    }

    #[test]
    fn prop_classify_agrees_with_parts(board in any_board()) {
        let expected = match (check_winner(&board), is_full(&board)) {
            (Some(mark), _) => Outcome::Win(mark),
            (None, true) => Outcome::Draw,
            (None, false) => Outcome::InProgress,
        };
        prop_assert_eq!(classify(&board), expected);
    }

    #[test]
    fn prop_best_move_targets_empty_square_and_preserves_board(board in any_board()) {
        let before = board;
        match best_move(&board, Mark::O, Mark::X) {
            Some(pos) => {
                prop_assert!(board.is_empty(pos));
                prop_assert_eq!(classify(&board), Outcome::InProgress);
            }
            None => prop_assert!(classify(&board).is_terminal()),
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_text_form_parses_back(board in any_board()) {
        prop_assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }
}

#[test]
fn test_each_line_reports_its_owner() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert!(!is_full(&board));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(check_winner(&board), None);
    assert_eq!(classify(&board), Outcome::Draw);
    assert!(Position::valid_moves(&board).is_empty());
}

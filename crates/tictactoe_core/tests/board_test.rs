//! Board contract tests.

use tictactoe_core::{Board, LINES, Mark, Position, Square};

#[test]
fn test_check_win_matches_line_ownership() {
    // Walk every board reachable by filling cells from a fixed pattern and
    // compare against a direct line check.
    let pattern = [Mark::X, Mark::O, Mark::X, Mark::X, Mark::O, Mark::O, Mark::O, Mark::X, Mark::X];
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.into_iter().zip(pattern) {
        assert!(board.place_at(pos, mark));
        for m in [Mark::X, Mark::O] {
            let expected = LINES
                .iter()
                .any(|line| line.iter().all(|&p| board.square(p) == Square::Occupied(m)));
            assert_eq!(board.check_win(m), expected);
        }
    }
}

#[test]
fn test_place_twice_keeps_first_mark() {
    let mut board = Board::new();
    assert!(board.place(2, 0, Mark::O));
    assert!(!board.place(2, 0, Mark::X));
    assert!(!board.place(2, 0, Mark::O));
    assert_eq!(board.get(2, 0), Some(Square::Occupied(Mark::O)));
}

#[test]
fn test_copy_never_aliases() {
    let mut original = Board::new();
    original.place(0, 0, Mark::X);

    for pos in Position::ALL {
        let mut copy = original;
        copy.place_at(pos, Mark::O);
        assert_eq!(original.square(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(original.count_empty(), 8);
    }
}

#[test]
fn test_get_out_of_range_is_none() {
    let board = Board::new();
    assert_eq!(board.get(0, 3), None);
    assert_eq!(board.get(3, 3), None);
    assert_eq!(board.get(2, 2), Some(Square::Empty));
}

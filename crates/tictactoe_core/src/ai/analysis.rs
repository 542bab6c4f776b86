//! Board analysis shared by the strategies.
//!
//! Every helper simulates on a copy of the board; the caller's board is
//! never modified.

use crate::{Board, Mark, Position};

/// First empty position (row-major) where `mark` would complete a line.
pub fn find_winning_cell(board: &Board, mark: Mark) -> Option<Position> {
    board.empty_positions().find(|&pos| wins_at(board, pos, mark))
}

/// Number of distinct empty positions where `mark` would complete a line.
pub fn count_potential_wins(board: &Board, mark: Mark) -> usize {
    board
        .empty_positions()
        .filter(|&pos| wins_at(board, pos, mark))
        .count()
}

/// Empty positions that would leave `mark` with two or more ways to win.
pub fn fork_cells(board: &Board, mark: Mark) -> Vec<Position> {
    board
        .empty_positions()
        .filter(|&pos| {
            let mut next = *board;
            next.place_at(pos, mark);
            count_potential_wins(&next, mark) >= 2
        })
        .collect()
}

/// First fork position for `mark` in row-major order.
pub fn find_fork_cell(board: &Board, mark: Mark) -> Option<Position> {
    fork_cells(board, mark).into_iter().next()
}

/// First empty position in row-major order.
pub fn first_empty(board: &Board) -> Option<Position> {
    board.empty_positions().next()
}

fn wins_at(board: &Board, pos: Position, mark: Mark) -> bool {
    let mut next = *board;
    next.place_at(pos, mark) && next.check_win(mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board;

    #[test]
    fn test_winning_cell_found() {
        let b = board(["XX.", "OO.", "..."]);
        assert_eq!(find_winning_cell(&b, Mark::X), Some(Position::TopRight));
        assert_eq!(find_winning_cell(&b, Mark::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_no_winning_cell_on_empty_board() {
        assert_eq!(find_winning_cell(&Board::new(), Mark::X), None);
        assert_eq!(count_potential_wins(&Board::new(), Mark::O), 0);
    }

    #[test]
    fn test_count_potential_wins_counts_cells() {
        // O threatens both the top row and the left column.
        let b = board(["OO.", ".X.", "O.."]);
        assert_eq!(count_potential_wins(&b, Mark::O), 2);
    }

    #[test]
    fn test_shared_completion_counts_once() {
        // Top-right completes both the row and the column, but it is one cell.
        let b = board(["OO.", ".XO", "..O"]);
        assert_eq!(count_potential_wins(&b, Mark::O), 1);
    }

    #[test]
    fn test_fork_cells() {
        let b = board(["O..", ".X.", "..O"]);
        assert_eq!(fork_cells(&b, Mark::O), vec![Position::TopRight, Position::BottomLeft]);
        assert_eq!(find_fork_cell(&b, Mark::O), Some(Position::TopRight));
        assert!(fork_cells(&b, Mark::X).is_empty());
    }

    #[test]
    fn test_analysis_leaves_board_untouched() {
        let b = board(["O..", ".X.", "..O"]);
        let before = b;
        let _ = fork_cells(&b, Mark::O);
        let _ = find_winning_cell(&b, Mark::X);
        assert_eq!(b, before);
    }
}

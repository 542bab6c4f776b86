//! Easy: random guesses, blind to wins and threats.

use super::analysis::first_empty;
use crate::{Board, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a random empty cell.
///
/// Makes up to `attempts` uniform guesses over all nine cells and falls back
/// to the first empty cell in row-major order. Winning and blocking moves are
/// ignored on purpose.
#[instrument(skip(board, rng))]
pub fn easy_move<R: Rng + ?Sized>(board: &Board, rng: &mut R, attempts: u32) -> Option<Position> {
    for _ in 0..attempts {
        let guess = Position::from_row_col(rng.random_range(0..3), rng.random_range(0..3))?;
        if board.is_empty(guess) {
            debug!(position = ?guess, "Random guess");
            return Some(guess);
        }
    }

    let fallback = first_empty(board);
    debug!(position = ?fallback, "Guesses exhausted, scanning");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let b = board(["XO.", "OX.", "X.O"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = easy_move(&b, &mut rng, 20).unwrap();
            assert!(b.is_empty(pos));
        }
    }

    #[test]
    fn test_zero_attempts_scans_row_major() {
        let b = board(["XO.", "...", "..."]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(easy_move(&b, &mut rng, 0), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board(["XOX", "XOO", "OXX"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(easy_move(&b, &mut rng, 20), None);
    }
}

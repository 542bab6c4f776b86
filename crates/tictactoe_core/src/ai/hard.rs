//! Hard: a fork-aware heuristic close to perfect play.
//!
//! This is not minimax. When the opponent has more than one fork cell the
//! heuristic does not try to defend and falls through to positional play.

use super::analysis::{find_fork_cell, find_winning_cell, fork_cells};
use crate::{Board, Mark, Position};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Picks a move for `mark` in strict priority order:
///
/// 1. complete a line
/// 2. block the opponent's line
/// 3. take the center while at most two squares are occupied
/// 4. create a fork
/// 5. occupy the opponent's fork cell when there is exactly one
/// 6. take a corner (top-left, top-right, bottom-left, bottom-right)
/// 7. take the center
/// 8. any random empty cell
#[instrument(skip(board, rng))]
pub fn hard_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    let opponent = mark.opponent();

    if let Some(pos) = find_winning_cell(board, mark) {
        debug!(position = ?pos, "Taking win");
        return Some(pos);
    }

    if let Some(pos) = find_winning_cell(board, opponent) {
        debug!(position = ?pos, "Blocking opponent");
        return Some(pos);
    }

    let occupied = 9 - board.count_empty();
    if occupied <= 2 && board.is_empty(Position::Center) {
        debug!("Opening with center");
        return Some(Position::Center);
    }

    if let Some(pos) = find_fork_cell(board, mark) {
        debug!(position = ?pos, "Creating fork");
        return Some(pos);
    }

    let opponent_forks = fork_cells(board, opponent);
    if let [pos] = opponent_forks.as_slice() {
        debug!(position = ?pos, "Blocking opponent fork");
        return Some(*pos);
    }
    if opponent_forks.len() > 1 {
        debug!(count = opponent_forks.len(), "Several opponent forks, not defending");
    }

    if let Some(pos) = Position::CORNERS.into_iter().find(|&pos| board.is_empty(pos)) {
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    board.empty_positions().choose(rng)
}

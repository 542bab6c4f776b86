//! Medium: wins and blocks, otherwise positional play.

use super::analysis::{find_winning_cell, first_empty};
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Picks a move for `mark` in strict priority order: win, block, center,
/// edges (top, left, right, bottom), then the first empty cell.
#[instrument(skip(board))]
pub fn medium_move(board: &Board, mark: Mark) -> Option<Position> {
    if let Some(pos) = find_winning_cell(board, mark) {
        debug!(position = ?pos, "Taking win");
        return Some(pos);
    }

    if let Some(pos) = find_winning_cell(board, mark.opponent()) {
        debug!(position = ?pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    if let Some(pos) = Position::EDGES.into_iter().find(|&pos| board.is_empty(pos)) {
        return Some(pos);
    }

    first_empty(board)
}

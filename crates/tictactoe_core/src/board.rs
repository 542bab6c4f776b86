//! The 3x3 board and its win/draw rules.

use crate::{Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Every line that wins the game: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: copying it yields an independent board, which
/// is what the computer relies on when it simulates moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
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

    /// Gets the square at `row`, `col`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.square(pos))
    }

    /// Gets the square at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos).is_empty()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Writes `mark` at `row`, `col`.
    ///
    /// Returns `false` without touching the board when the coordinates are
    /// out of range or the square is already occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match Position::from_row_col(row, col) {
            Some(pos) => self.place_at(pos, mark),
            None => {
                trace!("Coordinates out of range");
                false
            }
        }
    }

    /// Writes `mark` at `pos` if the square is empty.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            trace!(position = ?pos, "Square already occupied");
            return false;
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        true
    }

    /// Checks whether `mark` holds any complete row, column or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&pos| self.square(pos) == Square::Occupied(mark))
        })
    }

    /// Returns the first complete line on the board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        LINES.iter().copied().find(|[a, b, c]| {
            let sq = self.square(*a);
            !sq.is_empty() && sq == self.square(*b) && sq == self.square(*c)
        })
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line()
            .and_then(|[pos, _, _]| self.square(pos).mark())
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|sq| !sq.is_empty())
    }

    /// Number of empty squares.
    pub fn count_empty(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_empty()).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
    }

    /// Resets every square to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

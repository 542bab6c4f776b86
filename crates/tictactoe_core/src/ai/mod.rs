//! Computer opponent.
//!
//! Three strategies share the analysis helpers in [`analysis`]. Each one
//! inspects the board without modifying it; [`Engine::make_move`] commits the
//! chosen cell.

pub mod analysis;
mod easy;
mod hard;
mod medium;

pub use analysis::{count_potential_wins, find_fork_cell, find_winning_cell, first_empty, fork_cells};
pub use easy::easy_move;
pub use hard::hard_move;
pub use medium::medium_move;

use crate::{Board, Mark, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// How hard the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Wins and blocks.
    #[default]
    Medium,
    /// Wins, blocks and forks.
    Hard,
}

/// Chooses a cell for `mark` at the given difficulty, or `None` when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    mark: Mark,
    rng: &mut R,
    easy_attempts: u32,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => easy_move(board, rng, easy_attempts),
        Difficulty::Medium => medium_move(board, mark),
        Difficulty::Hard => hard_move(board, mark, rng),
    }
}

/// The computer player's decision engine.
#[derive(Debug, Clone)]
pub struct Engine {
    difficulty: Difficulty,
    easy_attempts: u32,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty, easy_attempts: u32) -> Self {
        Self {
            difficulty,
            easy_attempts,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an engine with reproducible randomness.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, easy_attempts: u32, seed: u64) -> Self {
        Self {
            difficulty,
            easy_attempts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a cell without placing it.
    pub fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position> {
        select_move(board, self.difficulty, mark, &mut self.rng, self.easy_attempts)
    }

    /// Chooses a cell for `mark` and writes it to `board`.
    ///
    /// Returns the placed position, or `None` without touching the board when
    /// no move is possible.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn make_move(&mut self, board: &mut Board, mark: Mark) -> Option<Position> {
        let Some(pos) = self.choose(board, mark) else {
            warn!("No move available");
            return None;
        };

        if !board.place_at(pos, mark) {
            warn!(position = ?pos, "Engine chose an occupied square");
            return None;
        }

        info!(position = %pos, "Computer moved");
        Some(pos)
    }
}

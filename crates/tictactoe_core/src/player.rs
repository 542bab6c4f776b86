//! Players and seats.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from the UI.
    Human,
    /// Moves come from the AI engine.
    Computer,
}

/// Registration slot of a player. The first seat moves first in every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First registered player.
    First,
    /// Second registered player.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant in the session.
///
/// Name, mark and kind are fixed at construction. The win counter is only
/// advanced by [`crate::ScoreBoard::record_win`].
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
    #[new(default)]
    wins: u32,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name.into(), mark, PlayerKind::Human)
    }

    /// Creates a computer player.
    pub fn computer(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name.into(), mark, PlayerKind::Computer)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player writes.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Who decides this player's moves.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Checks if the UI supplies this player's moves.
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Rounds won so far.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub(crate) fn add_win(&mut self) {
        self.wins += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

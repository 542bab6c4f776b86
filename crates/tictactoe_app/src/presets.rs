//! Setup answers supplied ahead of time.

use tictactoe_core::{Difficulty, Mark};

/// Answers to the setup prompts given on the command line.
///
/// Each answer is used once; a later prompt for the same value (such as the
/// difficulty between rounds) goes to the human.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    /// Display name.
    pub name: Option<String>,
    /// Human's mark.
    pub mark: Option<Mark>,
    /// Computer difficulty for the first round.
    pub difficulty: Option<Difficulty>,
}

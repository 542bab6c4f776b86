//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default number of random guesses the easy computer makes before scanning.
pub const DEFAULT_EASY_ATTEMPTS: u32 = 20;

/// Who takes the first seat, and with it the first move of every round.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human registers first.
    #[default]
    Human,
    /// The computer registers first.
    Computer,
}

impl FirstPlayer {
    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Random guesses the easy computer makes before scanning for a free cell.
    easy_attempts: u32,

    /// Seconds to wait for a human move before playing the first free cell
    /// on their behalf. `None` waits forever.
    #[setters(strip_option)]
    human_move_timeout_secs: Option<u64>,

    /// Who moves first.
    first_player: FirstPlayer,

    /// Seed for the computer's randomness, for reproducible sessions.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Ask for the difficulty again before every round.
    prompt_difficulty_each_round: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            easy_attempts: DEFAULT_EASY_ATTEMPTS,
            human_move_timeout_secs: None,
            first_player: FirstPlayer::default(),
            seed: None,
            prompt_difficulty_each_round: false,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// How long to wait for a human move, if bounded.
    pub fn human_move_timeout(&self) -> Option<Duration> {
        self.human_move_timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Command-line interface for the tic-tac-toe binary.

use crate::presets::Presets;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Difficulty, Mark};

/// Play tic-tac-toe against the computer.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against an Easy, Medium or Hard computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with session settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Your name (skips the name prompt)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Your mark, X or O (skips the mark prompt)
    #[arg(long, global = true)]
    pub mark: Option<Mark>,

    /// Computer difficulty: easy, medium or hard (skips the first difficulty prompt)
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's randomness
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log file used by the terminal UI
    #[arg(long, global = true, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Front end to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Line-based play on stdin/stdout
    #[default]
    Console,

    /// Full-screen terminal UI
    Tui,
}

impl Cli {
    /// Answers the CLI already gives to the setup prompts.
    pub fn presets(&self) -> Presets {
        Presets {
            name: self.name.clone(),
            mark: self.mark,
            difficulty: self.difficulty,
        }
    }

    /// The chosen front end, console when none was named.
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_console() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command(), Command::Console);
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_presets_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "tui",
            "--name",
            "Ada",
            "--mark",
            "o",
            "--difficulty",
            "HARD",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(cli.command(), Command::Tui);
        assert_eq!(cli.seed, Some(7));
        let presets = cli.presets();
        assert_eq!(presets.name.as_deref(), Some("Ada"));
        assert_eq!(presets.mark, Some(Mark::O));
        assert_eq!(presets.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_rejects_unknown_mark() {
        assert!(Cli::try_parse_from(["tictactoe", "--mark", "Z"]).is_err());
    }
}

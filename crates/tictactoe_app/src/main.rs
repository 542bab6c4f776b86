//! Tic-tac-toe against the computer, in the console or a terminal UI.

#![warn(missing_docs)]

mod cli;
mod console;
mod presets;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use console::ConsoleUi;
use presets::Presets;
use std::path::Path;
use tictactoe_core::{GameConfig, GameError, Orchestrator};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.command(), &cli.log_file)?;

    let config = load_config(&cli)?;
    let presets = cli.presets();

    match cli.command() {
        Command::Console => run_console(config, presets).await,
        Command::Tui => tui::run_tui(config, presets).await,
    }
}

/// Logs go to stderr for the console and to a file for the terminal UI, where
/// stderr output would corrupt the screen.
fn init_tracing(command: Command, log_file: &Path) -> Result<()> {
    match command {
        Command::Console => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Command::Tui => {
            let file = std::fs::File::create(log_file)
                .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
    }
    Ok(())
}

/// Reads the config file, if any, then applies command-line overrides.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let config = match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    debug!(?config, "Effective configuration");
    Ok(config)
}

/// Plays on stdin/stdout until the player stops or input ends.
#[instrument(skip_all)]
async fn run_console(config: GameConfig, presets: Presets) -> Result<()> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let ui = ConsoleUi::new(input, std::io::stdout(), presets);

    let mut game = match Orchestrator::setup(ui, config).await {
        Ok(game) => game,
        Err(GameError::Ui(e)) if e.is_closed() => {
            info!("Input ended during setup");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to set up game"),
    };

    game.run().await.context("Game ended with an error")?;
    println!("Thanks for playing! Final score: {}", game.score().summary());
    Ok(())
}

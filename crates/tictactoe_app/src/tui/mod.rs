//! Full-screen terminal front end.
//!
//! The orchestrator runs as a background task behind a [`bridge::ChannelUi`];
//! this module owns the terminal, draws [`app::App`] and forwards keys.

mod app;
mod bridge;
mod ui;

use crate::presets::Presets;
use anyhow::{Context, Result};
use app::App;
use bridge::UiHandle;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::{GameConfig, GameError, Orchestrator};
use tracing::{error, info, instrument};

/// Runs a session in the terminal UI.
#[instrument(skip_all)]
pub async fn run_tui(config: GameConfig, presets: Presets) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (channel_ui, handle) = bridge::channel(presets);

    let game = tokio::spawn(async move {
        let mut orchestrator = Orchestrator::setup(channel_ui, config).await?;
        orchestrator.run().await?;
        Ok::<_, GameError>(orchestrator.score().summary())
    });

    let res = run_app(&mut terminal, App::new(), handle);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The handle is gone, so the orchestrator sees a closed front end and stops.
    match game.await.context("Game task panicked")? {
        Ok(summary) => println!("Final score: {}", summary),
        Err(GameError::Ui(e)) if e.is_closed() => info!("Closed during setup"),
        Err(e) => {
            error!(error = %e, "Game ended with an error");
            return Err(e.into());
        }
    }

    res
}

/// Draw/input loop. Returns when the user quits or, after the session ends,
/// presses any key.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut handle: UiHandle,
) -> Result<()> {
    loop {
        loop {
            match handle.try_event() {
                Ok(Some(event)) => app.handle_event(event),
                Ok(None) => break,
                Err(_) => {
                    if !app.finished() {
                        app.finish();
                    }
                    break;
                }
            }
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.finished() {
            return Ok(());
        }
        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Char('q') if !app.accepts_text() => {
                info!("User quit");
                return Ok(());
            }
            code => {
                if let Some(command) = app.handle_key(code) {
                    if handle.offer(command) {
                        app.answered();
                    } else {
                        app.busy();
                    }
                }
            }
        }
    }
}

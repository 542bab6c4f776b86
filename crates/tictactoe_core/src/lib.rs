//! Tic-tac-toe rules, a tiered computer opponent and a UI-agnostic game loop.
//!
//! # Architecture
//!
//! - **Board**: a `Copy` 3x3 grid with win and draw detection
//! - **AI**: Easy, Medium and Hard strategies over shared analysis helpers
//! - **ScoreBoard**: seats, turn order, wins and draws
//! - **Orchestrator**: the round state machine, driving any [`GameUi`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Difficulty, Engine, Mark, Position};
//!
//! let mut board = Board::new();
//! assert!(board.place(0, 0, Mark::X));
//!
//! let mut engine = Engine::seeded(Difficulty::Hard, 20, 7);
//! assert_eq!(engine.make_move(&mut board, Mark::O), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod board;
mod config;
mod orchestrator;
mod player;
mod position;
mod score;
mod types;
mod ui;

#[cfg(test)]
mod test_support;

pub use ai::{Difficulty, Engine, select_move};
pub use board::{Board, LINES};
pub use config::{ConfigError, DEFAULT_EASY_ATTEMPTS, FirstPlayer, GameConfig};
pub use orchestrator::{COMPUTER_NAME, GameError, GamePhase, Orchestrator, TurnOutcome};
pub use player::{Player, PlayerKind, Seat};
pub use position::Position;
pub use score::{ScoreBoard, ScoreError};
pub use types::{Mark, Square};
pub use ui::{GameUi, UiError, UiErrorKind};

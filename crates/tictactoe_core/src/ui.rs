//! What the game needs from a front end.

use crate::{Board, Difficulty, Mark, Player, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of front-end failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UiErrorKind {
    /// The front end went away (window closed, input ended). Ends the session.
    #[display("front end closed")]
    Closed,
    /// Reading or writing the terminal failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
    /// The user gave an answer that could not be understood.
    #[display("invalid input: {}", _0)]
    InvalidInput(String),
}

/// Front-end error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("UI error: {} at {}:{}", kind, file, line)]
pub struct UiError {
    /// What went wrong.
    pub kind: UiErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl UiError {
    /// Creates a new UI error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: UiErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`UiErrorKind::Closed`] error.
    #[track_caller]
    pub fn closed() -> Self {
        Self::new(UiErrorKind::Closed)
    }

    /// Checks if the front end is gone.
    pub fn is_closed(&self) -> bool {
        self.kind == UiErrorKind::Closed
    }
}

impl From<std::io::Error> for UiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            return Self::new(UiErrorKind::Closed);
        }
        Self::new(UiErrorKind::Io(err.to_string()))
    }
}

/// A front end the orchestrator can drive.
///
/// Prompts are async because a human answers them. Notifications are
/// fire-and-forget.
#[async_trait::async_trait]
pub trait GameUi: Send {
    /// Asks the human for a display name.
    async fn players_name(&mut self) -> Result<String, UiError>;

    /// Asks the human which mark to play.
    async fn players_symbol(&mut self) -> Result<Mark, UiError>;

    /// Asks which difficulty the computer plays at.
    async fn prompt_difficulty(&mut self) -> Result<Difficulty, UiError>;

    /// Waits for `player` to choose a cell as `(row, col)`.
    ///
    /// The coordinates are not validated here; the orchestrator rejects
    /// out-of-range or occupied cells and asks again.
    async fn acquire_human_move(
        &mut self,
        player: &Player,
        board: &Board,
    ) -> Result<(usize, usize), UiError>;

    /// Asks whether to start another round.
    async fn prompt_play_again(&mut self) -> Result<bool, UiError>;

    /// Shows the board, optionally highlighting the last move.
    fn display_board(&mut self, board: &Board, highlight: Option<Position>);

    /// Shows the score line.
    fn display_score(&mut self, summary: &str);

    /// Announces a round winner.
    fn notify_win(&mut self, player: &Player);

    /// Announces a drawn round.
    fn notify_draw(&mut self);

    /// Tells the human the chosen cell was rejected.
    fn notify_invalid_move(&mut self, _row: usize, _col: usize) {}

    /// Announces whose turn it is.
    fn notify_turn(&mut self, _player: &Player) {}
}

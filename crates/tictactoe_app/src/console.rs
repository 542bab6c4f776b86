//! Line-based front end.

use crate::presets::Presets;
use std::io::Write;
use std::str::FromStr;
use tictactoe_core::{Board, Difficulty, GameUi, Mark, Player, Position, UiError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument, warn};

/// Plays through a line reader and a writer, usually stdin and stdout.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    presets: Presets,
}

impl<R, W> ConsoleUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    /// Creates a console front end.
    pub fn new(input: R, output: W, presets: Presets) -> Self {
        Self {
            input,
            output,
            presets,
        }
    }

    /// Consumes the front end, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and reads one trimmed line. End of input closes the session.
    async fn ask(&mut self, prompt: &str) -> Result<String, UiError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            debug!("Input ended");
            return Err(UiError::closed());
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer.
    async fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T> + Send,
    ) -> Result<T, UiError> {
        loop {
            let answer = self.ask(prompt).await?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.say(format_args!("{}", retry)),
            }
        }
    }

    /// Writes a line, logging instead of failing when the writer is broken.
    fn say(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Parses a move as `row col` (0-based) or a single cell number 1-9.
///
/// Coordinates are not range-checked; the orchestrator rejects bad cells.
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
        [cell] => {
            let pos = Position::from_index(cell.parse::<usize>().ok()?.checked_sub(1)?)?;
            Some((pos.row(), pos.col()))
        }
        _ => None,
    }
}

/// Parses a difficulty by name or as 1 (easy) to 3 (hard).
pub fn parse_difficulty(input: &str) -> Option<Difficulty> {
    match input {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        other => Difficulty::from_str(other).ok(),
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[async_trait::async_trait]
impl<R, W> GameUi for ConsoleUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn players_name(&mut self) -> Result<String, UiError> {
        if let Some(name) = self.presets.name.take() {
            return Ok(name);
        }
        self.ask_until("Enter your name: ", "Please enter a name.", |s| {
            (!s.is_empty()).then(|| s.to_string())
        })
        .await
    }

    async fn players_symbol(&mut self) -> Result<Mark, UiError> {
        if let Some(mark) = self.presets.mark.take() {
            return Ok(mark);
        }
        self.ask_until("Choose your mark (X/O): ", "Please type X or O.", |s| {
            Mark::from_str(s).ok()
        })
        .await
    }

    async fn prompt_difficulty(&mut self) -> Result<Difficulty, UiError> {
        if let Some(difficulty) = self.presets.difficulty.take() {
            return Ok(difficulty);
        }
        self.ask_until(
            "Difficulty (1 easy, 2 medium, 3 hard): ",
            "Please type 1, 2, 3 or a difficulty name.",
            parse_difficulty,
        )
        .await
    }

    #[instrument(skip_all, fields(player = %player))]
    async fn acquire_human_move(
        &mut self,
        player: &Player,
        _board: &Board,
    ) -> Result<(usize, usize), UiError> {
        let prompt = format!("{}, your move (row col or 1-9): ", player.name());
        self.ask_until(&prompt, "Type a row and column like `1 2`, or a cell 1-9.", parse_move)
            .await
    }

    async fn prompt_play_again(&mut self) -> Result<bool, UiError> {
        self.ask_until("Play again? (y/n): ", "Please answer y or n.", parse_yes_no)
            .await
    }

    fn display_board(&mut self, board: &Board, highlight: Option<Position>) {
        self.say(format_args!("\n{}", board));
        if let Some(pos) = highlight {
            self.say(format_args!("Last move: {}", pos.label()));
        }
    }

    fn display_score(&mut self, summary: &str) {
        self.say(format_args!("Score: {}", summary));
    }

    fn notify_win(&mut self, player: &Player) {
        self.say(format_args!("{} wins!", player.name()));
    }

    fn notify_draw(&mut self) {
        self.say(format_args!("It's a draw!"));
    }

    fn notify_invalid_move(&mut self, row: usize, col: usize) {
        self.say(format_args!("Cell ({}, {}) is taken or off the board.", row, col));
    }

    fn notify_turn(&mut self, player: &Player) {
        if !player.is_human() {
            self.say(format_args!("{} is thinking...", player.name()));
        }
    }
}

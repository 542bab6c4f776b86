//! Application state and key handling.

use super::bridge::{GameEvent, Prompt, UiCommand};
use crossterm::event::KeyCode;
use tictactoe_core::{Board, Difficulty, Mark, Position};
use tracing::debug;

/// Main application state.
#[derive(Debug)]
pub struct App {
    board: Board,
    highlight: Option<Position>,
    cursor: Position,
    status_message: String,
    score: Option<String>,
    prompt: Option<Prompt>,
    name_input: String,
    finished: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            highlight: None,
            cursor: Position::Center,
            status_message: "Waiting for game to start...".to_string(),
            score: None,
            prompt: None,
            name_input: String::new(),
            finished: false,
        }
    }

    /// The board as last reported.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The last move, if any.
    pub fn highlight(&self) -> Option<Position> {
        self.highlight
    }

    /// The keyboard cursor, shown while a move is awaited.
    pub fn cursor(&self) -> Option<Position> {
        matches!(self.prompt, Some(Prompt::Move)).then_some(self.cursor)
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The score line, once a round has finished.
    pub fn score(&self) -> Option<&str> {
        self.score.as_deref()
    }

    /// Whether the orchestrator has ended the session.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Key hints for the current prompt.
    pub fn help(&self) -> &'static str {
        match self.prompt {
            _ if self.finished => "Any key: exit",
            Some(Prompt::Name) => "Type your name, Enter: confirm, Esc: quit",
            Some(Prompt::Mark) => "x / o: choose mark, Esc: quit",
            Some(Prompt::Difficulty) => "1 easy, 2 medium, 3 hard, Esc: quit",
            Some(Prompt::Move) => "1-9 or arrows + Enter: move, q: quit",
            Some(Prompt::PlayAgain) => "y: play again, n: stop, q: quit",
            None => "q: quit",
        }
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Board { board, highlight } => {
                self.board = board;
                self.highlight = highlight;
            }
            GameEvent::Score(summary) => self.score = Some(summary),
            GameEvent::Turn {
                player,
                mark,
                human,
            } => {
                // A new turn supersedes any prompt the orchestrator gave up on.
                self.prompt = None;
                self.status_message = if human {
                    format!("{}'s turn ({})", player, mark)
                } else {
                    format!("{} is thinking...", player)
                };
            }
            GameEvent::Won(player) => self.status_message = format!("{} wins!", player),
            GameEvent::Draw => self.status_message = "Game ended in a draw!".to_string(),
            GameEvent::InvalidMove { row, col } => {
                self.status_message = format!("Cell ({}, {}) is taken. Try again.", row, col);
            }
            GameEvent::Prompt(prompt) => {
                match &prompt {
                    Prompt::Name => self.status_message = "What is your name?".to_string(),
                    Prompt::Mark => self.status_message = "Play as X or O?".to_string(),
                    Prompt::Difficulty => {
                        self.status_message = "Choose the computer's difficulty.".to_string()
                    }
                    Prompt::PlayAgain => {
                        self.status_message = format!("{} Play again?", self.status_message)
                    }
                    Prompt::Move => {}
                }
                self.prompt = Some(prompt);
            }
        }
    }

    /// Marks the session as over.
    pub fn finish(&mut self) {
        debug!("Session finished");
        self.finished = true;
        self.prompt = None;
        self.status_message = "Session over.".to_string();
    }

    /// Translates a key into an answer for the pending prompt.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<UiCommand> {
        match (self.prompt.as_ref()?, key) {
            (Prompt::Name, KeyCode::Char(c)) => {
                self.name_input.push(c);
                self.status_message = format!("Name: {}", self.name_input);
                None
            }
            (Prompt::Name, KeyCode::Backspace) => {
                self.name_input.pop();
                self.status_message = format!("Name: {}", self.name_input);
                None
            }
            (Prompt::Name, KeyCode::Enter) if !self.name_input.trim().is_empty() => {
                Some(UiCommand::Name(self.name_input.trim().to_string()))
            }
            (Prompt::Mark, KeyCode::Char(c)) => {
                c.to_string().parse::<Mark>().ok().map(UiCommand::Mark)
            }
            (Prompt::Difficulty, KeyCode::Char(c)) => match c.to_ascii_lowercase() {
                '1' | 'e' => Some(UiCommand::Difficulty(Difficulty::Easy)),
                '2' | 'm' => Some(UiCommand::Difficulty(Difficulty::Medium)),
                '3' | 'h' => Some(UiCommand::Difficulty(Difficulty::Hard)),
                _ => None,
            },
            (Prompt::Move, KeyCode::Char(c)) => {
                let pos = Position::from_index(c.to_digit(10)?.checked_sub(1)? as usize)?;
                self.cursor = pos;
                Some(UiCommand::Move(pos.row(), pos.col()))
            }
            (Prompt::Move, KeyCode::Enter) => {
                Some(UiCommand::Move(self.cursor.row(), self.cursor.col()))
            }
            (Prompt::Move, arrow) => {
                self.cursor = move_cursor(self.cursor, arrow);
                None
            }
            (Prompt::PlayAgain, KeyCode::Char('y' | 'Y')) => Some(UiCommand::PlayAgain(true)),
            (Prompt::PlayAgain, KeyCode::Char('n' | 'N')) => Some(UiCommand::PlayAgain(false)),
            _ => None,
        }
    }

    /// Called once the orchestrator accepted the last answer.
    pub fn answered(&mut self) {
        if matches!(self.prompt, Some(Prompt::Name)) {
            self.name_input.clear();
        }
        self.prompt = None;
    }

    /// Called when an answer was refused because one is still pending.
    pub fn busy(&mut self) {
        self.status_message = "Still working on your last answer...".to_string();
    }

    /// Whether `q` should quit rather than be typed.
    pub fn accepts_text(&self) -> bool {
        matches!(self.prompt, Some(Prompt::Name))
    }
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awaiting_move() -> App {
        let mut app = App::new();
        app.handle_event(GameEvent::Prompt(Prompt::Move));
        app
    }

    #[test]
    fn test_keys_ignored_without_prompt() {
        let mut app = App::new();
        assert_eq!(app.handle_key(KeyCode::Char('5')), None);
        assert_eq!(app.cursor(), None);
    }

    #[test]
    fn test_digit_picks_cell() {
        let mut app = awaiting_move();
        assert_eq!(app.handle_key(KeyCode::Char('3')), Some(UiCommand::Move(0, 2)));
        assert_eq!(app.handle_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_then_enter() {
        let mut app = awaiting_move();
        assert_eq!(app.cursor(), Some(Position::Center));

        assert_eq!(app.handle_key(KeyCode::Down), None);
        assert_eq!(app.handle_key(KeyCode::Left), None);
        assert_eq!(app.handle_key(KeyCode::Left), None);
        assert_eq!(app.cursor(), Some(Position::BottomLeft));
        assert_eq!(app.handle_key(KeyCode::Enter), Some(UiCommand::Move(2, 0)));

        app.answered();
        assert_eq!(app.cursor(), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Up), Position::TopRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_name_is_typed_then_sent() {
        let mut app = App::new();
        app.handle_event(GameEvent::Prompt(Prompt::Name));
        assert!(app.accepts_text());
        assert_eq!(app.handle_key(KeyCode::Enter), None);

        for c in "Adq".chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), None);
        }
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Char('a'));

        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(UiCommand::Name("Ada".to_string()))
        );
    }

    #[test]
    fn test_setup_answers() {
        let mut app = App::new();
        app.handle_event(GameEvent::Prompt(Prompt::Mark));
        assert_eq!(app.handle_key(KeyCode::Char('z')), None);
        assert_eq!(app.handle_key(KeyCode::Char('o')), Some(UiCommand::Mark(Mark::O)));

        app.handle_event(GameEvent::Prompt(Prompt::Difficulty));
        assert_eq!(
            app.handle_key(KeyCode::Char('H')),
            Some(UiCommand::Difficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn test_round_end_status() {
        let mut app = App::new();
        app.handle_event(GameEvent::Won("Ada".to_string()));
        app.handle_event(GameEvent::Score("Computer: 0 | Ada: 1 | Draws: 0".to_string()));
        app.handle_event(GameEvent::Prompt(Prompt::PlayAgain));

        assert_eq!(app.status_message(), "Ada wins! Play again?");
        assert_eq!(app.score(), Some("Computer: 0 | Ada: 1 | Draws: 0"));
        assert_eq!(app.handle_key(KeyCode::Char('n')), Some(UiCommand::PlayAgain(false)));
    }

    #[test]
    fn test_turn_status() {
        let mut app = App::new();
        app.handle_event(GameEvent::Turn {
            player: "Computer".to_string(),
            mark: Mark::O,
            human: false,
        });
        assert_eq!(app.status_message(), "Computer is thinking...");

        app.finish();
        assert!(app.finished());
        assert_eq!(app.help(), "Any key: exit");
    }
}

//! Drives rounds between two players through a [`GameUi`].

use crate::ai::{Engine, first_empty};
use crate::config::{FirstPlayer, GameConfig};
use crate::score::ScoreError;
use crate::ui::{GameUi, UiError};
use crate::{Board, Difficulty, Player, Position, ScoreBoard, Seat};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Name given to the computer player by [`Orchestrator::setup`].
pub const COMPUTER_NAME: &str = "Computer";

/// Where the orchestrator is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player in this seat to move.
    AwaitingMove(Seat),
    /// A move was made and the board is being checked.
    Evaluating,
    /// The player in this seat completed a line.
    Won(Seat),
    /// The board filled up without a line.
    Draw,
    /// The result has been announced and scored.
    RoundOver,
    /// The session has ended.
    Terminated,
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nobody has won and squares remain.
    Continue,
    /// The player in this seat won.
    Won(Seat),
    /// The board is full with no winner.
    Draw,
}

/// Errors that end a session early.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The front end failed.
    #[display("{}", _0)]
    Ui(UiError),
    /// The players could not be registered.
    #[display("{}", _0)]
    Score(ScoreError),
}

/// Runs the turn loop for one human-facing session.
pub struct Orchestrator<U: GameUi> {
    ui: U,
    board: Board,
    score: ScoreBoard,
    engine: Engine,
    config: GameConfig,
    phase: GamePhase,
    last_move: Option<Position>,
    rounds: u32,
}

impl<U: GameUi> Orchestrator<U> {
    /// Creates an orchestrator for already registered players.
    ///
    /// Both seats may be human, which gives a hot-seat game.
    #[instrument(skip(ui, score))]
    pub fn new(ui: U, score: ScoreBoard, difficulty: Difficulty, config: GameConfig) -> Self {
        let engine = match config.seed() {
            Some(seed) => Engine::seeded(difficulty, *config.easy_attempts(), *seed),
            None => Engine::new(difficulty, *config.easy_attempts()),
        };
        let mut score = score;
        score.reset_turn();

        Self {
            ui,
            board: Board::new(),
            score,
            engine,
            config,
            phase: GamePhase::AwaitingMove(Seat::First),
            last_move: None,
            rounds: 0,
        }
    }

    /// Asks the front end for the human's name, mark and the difficulty, then
    /// seats the human and the computer.
    #[instrument(skip(ui))]
    pub async fn setup(mut ui: U, config: GameConfig) -> Result<Self, GameError> {
        let name = ui.players_name().await?;
        let mark = ui.players_symbol().await?;
        let difficulty = ui.prompt_difficulty().await?;
        info!(%name, %mark, %difficulty, "Session configured");

        let human = Player::human(name, mark);
        let computer = Player::computer(COMPUTER_NAME, mark.opponent());
        let (first, second) = match config.first_player() {
            FirstPlayer::Human => (human, computer),
            FirstPlayer::Computer => (computer, human),
        };

        let mut score = ScoreBoard::new();
        score.register(first)?;
        score.register(second)?;

        Ok(Self::new(ui, score, difficulty, config))
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players and score.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Computer difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    /// Rounds finished so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The front end.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Consumes the orchestrator, returning the front end.
    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Plays rounds until the front end declines another one or goes away.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<(), GameError> {
        info!("Starting game orchestration");

        loop {
            if self.rounds > 0 && *self.config.prompt_difficulty_each_round() {
                match self.ui.prompt_difficulty().await {
                    Ok(difficulty) => self.engine.set_difficulty(difficulty),
                    Err(e) if e.is_closed() => break,
                    Err(e) => return Err(e.into()),
                }
            }

            match self.play_round().await {
                Ok(_) => {}
                Err(e) if e.is_closed() => {
                    info!("Front end closed mid-round");
                    break;
                }
                Err(e) => return Err(e.into()),
            }

            let again = match self.ui.prompt_play_again().await {
                Ok(again) => again,
                Err(e) if e.is_closed() => false,
                Err(e) => return Err(e.into()),
            };
            if !again {
                break;
            }
        }

        info!(rounds = self.rounds, summary = %self.score.summary(), "Session over");
        self.phase = GamePhase::Terminated;
        Ok(())
    }

    /// Clears the board and plays turns until someone wins or the board fills.
    ///
    /// The result is announced, then scored, then the score line is shown.
    #[instrument(skip(self), fields(round = self.rounds + 1))]
    pub async fn play_round(&mut self) -> Result<TurnOutcome, UiError> {
        self.board.clear();
        self.last_move = None;
        self.score.reset_turn();
        self.phase = GamePhase::AwaitingMove(Seat::First);

        let outcome = loop {
            match self.play_turn().await? {
                TurnOutcome::Continue => continue,
                finished => break finished,
            }
        };

        self.ui.display_board(&self.board, self.last_move);
        match outcome {
            TurnOutcome::Won(seat) => {
                if let Some(winner) = self.score.player(seat).cloned() {
                    info!(winner = %winner, "Round won");
                    self.ui.notify_win(&winner);
                }
                self.score.record_win(seat);
            }
            TurnOutcome::Draw => {
                info!("Round drawn");
                self.ui.notify_draw();
                self.score.record_draw();
            }
            TurnOutcome::Continue => {}
        }
        self.ui.display_score(&self.score.summary());

        self.rounds += 1;
        self.phase = GamePhase::RoundOver;
        Ok(outcome)
    }

    /// Plays a single move for the current player and evaluates the board.
    #[instrument(skip(self))]
    pub async fn play_turn(&mut self) -> Result<TurnOutcome, UiError> {
        let seat = self.score.current_seat().unwrap_or(Seat::First);
        self.phase = GamePhase::AwaitingMove(seat);
        self.ui.display_board(&self.board, self.last_move);

        let player = self.score.current().clone();
        self.ui.notify_turn(&player);

        let placed = if player.is_human() {
            self.human_move(&player).await?
        } else {
            self.engine.make_move(&mut self.board, player.mark())
        };
        if placed.is_some() {
            self.last_move = placed;
        }

        self.phase = GamePhase::Evaluating;
        let outcome = self.evaluate(seat, &player);
        debug!(?outcome, "Evaluated board");
        Ok(outcome)
    }

    fn evaluate(&mut self, seat: Seat, player: &Player) -> TurnOutcome {
        if self.board.check_win(player.mark()) {
            self.phase = GamePhase::Won(seat);
            TurnOutcome::Won(seat)
        } else if self.board.is_full() {
            self.phase = GamePhase::Draw;
            TurnOutcome::Draw
        } else {
            self.score.switch_player();
            self.phase = GamePhase::AwaitingMove(seat.other());
            TurnOutcome::Continue
        }
    }

    /// Waits for a legal human move and places it.
    ///
    /// Rejected cells are reported to the front end and the wait starts
    /// again. When a timeout is configured and expires, the first free cell
    /// is played instead.
    #[instrument(skip(self, player), fields(player = %player))]
    async fn human_move(&mut self, player: &Player) -> Result<Option<Position>, UiError> {
        loop {
            let request = self.ui.acquire_human_move(player, &self.board);
            let (row, col) = match self.config.human_move_timeout() {
                Some(limit) => match tokio::time::timeout(limit, request).await.ok() {
                    Some(chosen) => chosen?,
                    None => {
                        let fallback = first_empty(&self.board);
                        warn!(?limit, position = ?fallback, "Human move timed out, playing first free cell");
                        if let Some(pos) = fallback {
                            self.board.place_at(pos, player.mark());
                        }
                        return Ok(fallback);
                    }
                },
                None => request.await?,
            };

            if self.board.place(row, col, player.mark()) {
                debug!(row, col, "Human moved");
                return Ok(Position::from_row_col(row, col));
            }

            warn!(row, col, "Rejected human move");
            self.ui.notify_invalid_move(row, col);
        }
    }
}

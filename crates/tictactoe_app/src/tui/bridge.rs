//! Channel bridge between the orchestrator task and the terminal loop.
//!
//! Events flow to the terminal over an unbounded channel. Answers flow back
//! over a channel with room for exactly one command, so a click offered while
//! an earlier one is still pending is refused rather than queued.

use crate::presets::Presets;
use tictactoe_core::{Board, Difficulty, GameUi, Mark, Player, Position, UiError};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, instrument, trace};

/// What the orchestrator is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// A display name.
    Name,
    /// X or O.
    Mark,
    /// Computer difficulty.
    Difficulty,
    /// A cell for the player whose turn was last announced.
    Move,
    /// Whether to start another round.
    PlayAgain,
}

/// Messages sent from the orchestrator to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board changed.
    Board {
        /// The board.
        board: Board,
        /// Last move, if any.
        highlight: Option<Position>,
    },
    /// Score line.
    Score(String),
    /// A player is about to move.
    Turn {
        /// Player name.
        player: String,
        /// Player mark.
        mark: Mark,
        /// Whether the terminal should expect a click.
        human: bool,
    },
    /// Round won by the named player.
    Won(String),
    /// Round drawn.
    Draw,
    /// The chosen cell was rejected.
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The orchestrator needs an answer.
    Prompt(Prompt),
}

/// Answers sent from the terminal to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Answer to [`Prompt::Name`].
    Name(String),
    /// Answer to [`Prompt::Mark`].
    Mark(Mark),
    /// Answer to [`Prompt::Difficulty`].
    Difficulty(Difficulty),
    /// Answer to [`Prompt::Move`].
    Move(usize, usize),
    /// Answer to [`Prompt::PlayAgain`].
    PlayAgain(bool),
}

/// Orchestrator-side half: implements [`GameUi`] over the channels.
#[derive(Debug)]
pub struct ChannelUi {
    events: mpsc::UnboundedSender<GameEvent>,
    commands: mpsc::Receiver<UiCommand>,
    presets: Presets,
}

/// Terminal-side half.
#[derive(Debug)]
pub struct UiHandle {
    events: mpsc::UnboundedReceiver<GameEvent>,
    commands: mpsc::Sender<UiCommand>,
}

/// Creates a connected bridge.
pub fn channel(presets: Presets) -> (ChannelUi, UiHandle) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::channel(1);
    (
        ChannelUi {
            events: event_tx,
            commands: command_rx,
            presets,
        },
        UiHandle {
            events: event_rx,
            commands: command_tx,
        },
    )
}

impl UiHandle {
    /// Offers an answer. Returns `false` if one is already pending or the
    /// orchestrator is gone.
    #[instrument(skip(self))]
    pub fn offer(&self, command: UiCommand) -> bool {
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                debug!(?command, "Answer already pending, rejecting");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    /// Next pending event. `Err` once the orchestrator has finished and
    /// every event has been read.
    pub fn try_event(&mut self) -> Result<Option<GameEvent>, mpsc::error::TryRecvError> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl ChannelUi {
    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            trace!("Terminal gone, dropping event");
        }
    }

    /// Announces `prompt` and waits for a matching answer.
    ///
    /// The slot is emptied before the prompt goes out, so only answers given
    /// after it count. Answers meant for another prompt are discarded. A
    /// dropped terminal ends the wait with a closed error.
    async fn answer<T>(
        &mut self,
        prompt: Prompt,
        pick: fn(UiCommand) -> Result<T, UiCommand>,
    ) -> Result<T, UiError> {
        while let Ok(stale) = self.commands.try_recv() {
            debug!(?stale, "Dropping answer given before the prompt");
        }
        self.emit(GameEvent::Prompt(prompt));
        loop {
            let command = self.commands.recv().await.ok_or_else(UiError::closed)?;
            match pick(command) {
                Ok(value) => return Ok(value),
                Err(stale) => debug!(?stale, "Discarding stale answer"),
            }
        }
    }
}

#[async_trait::async_trait]
impl GameUi for ChannelUi {
    async fn players_name(&mut self) -> Result<String, UiError> {
        if let Some(name) = self.presets.name.take() {
            return Ok(name);
        }
        self.answer(Prompt::Name, |c| match c {
            UiCommand::Name(name) => Ok(name),
            other => Err(other),
        })
        .await
    }

    async fn players_symbol(&mut self) -> Result<Mark, UiError> {
        if let Some(mark) = self.presets.mark.take() {
            return Ok(mark);
        }
        self.answer(Prompt::Mark, |c| match c {
            UiCommand::Mark(mark) => Ok(mark),
            other => Err(other),
        })
        .await
    }

    async fn prompt_difficulty(&mut self) -> Result<Difficulty, UiError> {
        if let Some(difficulty) = self.presets.difficulty.take() {
            return Ok(difficulty);
        }
        self.answer(Prompt::Difficulty, |c| match c {
            UiCommand::Difficulty(difficulty) => Ok(difficulty),
            other => Err(other),
        })
        .await
    }

    async fn acquire_human_move(
        &mut self,
        player: &Player,
        _board: &Board,
    ) -> Result<(usize, usize), UiError> {
        debug!(player = %player, "Waiting for a click");
        self.answer(Prompt::Move, |c| match c {
            UiCommand::Move(row, col) => Ok((row, col)),
            other => Err(other),
        })
        .await
    }

    async fn prompt_play_again(&mut self) -> Result<bool, UiError> {
        self.answer(Prompt::PlayAgain, |c| match c {
            UiCommand::PlayAgain(again) => Ok(again),
            other => Err(other),
        })
        .await
    }

    fn display_board(&mut self, board: &Board, highlight: Option<Position>) {
        self.emit(GameEvent::Board {
            board: *board,
            highlight,
        });
    }

    fn display_score(&mut self, summary: &str) {
        self.emit(GameEvent::Score(summary.to_string()));
    }

    fn notify_win(&mut self, player: &Player) {
        self.emit(GameEvent::Won(player.name().to_string()));
    }

    fn notify_draw(&mut self) {
        self.emit(GameEvent::Draw);
    }

    fn notify_invalid_move(&mut self, row: usize, col: usize) {
        self.emit(GameEvent::InvalidMove { row, col });
    }

    fn notify_turn(&mut self, player: &Player) {
        self.emit(GameEvent::Turn {
            player: player.name().to_string(),
            mark: player.mark(),
            human: player.is_human(),
        });
    }
}

//! Turn order and session score.

use crate::{Mark, Player, Seat};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScoreError {
    /// Both seats are already taken.
    #[display("Session already has 2 players")]
    SessionFull,

    /// The other seat already plays this mark.
    #[display("Mark {} is already taken", _0)]
    MarkTaken(#[error(not(source))] Mark),
}

/// Tracks both players, whose turn it is and the running score.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    players: [Option<Player>; 2],
    current: Option<Seat>,
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty score board with no players registered.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player in the first free seat.
    #[instrument(skip(self, player), fields(player = %player))]
    pub fn register(&mut self, player: Player) -> Result<Seat, ScoreError> {
        let seat = if self.players[0].is_none() {
            Seat::First
        } else if self.players[1].is_none() {
            Seat::Second
        } else {
            warn!("Session already has 2 players");
            return Err(ScoreError::SessionFull);
        };

        if self.seat_of(player.mark()).is_some() {
            warn!("Mark already registered");
            return Err(ScoreError::MarkTaken(player.mark()));
        }

        info!(?seat, "Registered player");
        self.players[seat.index()] = Some(player);
        Ok(seat)
    }

    /// Returns the player in `seat`, if registered.
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players[seat.index()].as_ref()
    }

    /// Returns the seat playing `mark`, if any.
    pub fn seat_of(&self, mark: Mark) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| self.player(seat).is_some_and(|p| p.mark() == mark))
    }

    /// Seat whose turn it is, `None` before the first switch.
    pub fn current_seat(&self) -> Option<Seat> {
        self.current
    }

    /// The player whose turn it is.
    ///
    /// An unset turn counts as the first seat.
    ///
    /// # Panics
    ///
    /// Panics if that seat has no registered player; sessions must be set up
    /// before play starts.
    pub fn current(&self) -> &Player {
        let seat = self.current.unwrap_or(Seat::First);
        match self.player(seat) {
            Some(player) => player,
            None => panic!("No player registered in seat {:?}", seat),
        }
    }

    /// Hands the turn to the other seat. An unset turn goes to the first seat.
    #[instrument(skip(self))]
    pub fn switch_player(&mut self) {
        let next = match self.current {
            Some(seat) => seat.other(),
            None => Seat::First,
        };
        debug!(?next, "Switching player");
        self.current = Some(next);
    }

    /// Gives the turn back to the first seat, as at the start of a round.
    pub fn reset_turn(&mut self) {
        self.current = Some(Seat::First);
    }

    /// Adds a win for the player in `seat`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, seat: Seat) {
        if let Some(player) = self.players[seat.index()].as_mut() {
            player.add_win();
            info!(player = %player.name(), wins = player.wins(), "Recorded win");
        }
    }

    /// Adds a draw.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        info!(draws = self.draws, "Recorded draw");
    }

    /// Draws so far.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Score line: second player, then first player, then draws.
    pub fn summary(&self) -> String {
        let entry = |seat: Seat| match self.player(seat) {
            Some(p) => format!("{}: {}", p.name(), p.wins()),
            None => "-: 0".to_string(),
        };
        format!(
            "{} | {} | Draws: {}",
            entry(Seat::Second),
            entry(Seat::First),
            self.draws
        )
    }
}

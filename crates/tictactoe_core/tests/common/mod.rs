//! Scripted front end for driving the orchestrator in tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use tictactoe_core::{Board, Difficulty, GameUi, Mark, Player, Position, UiError};

/// Something the orchestrator told the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Board(Board, Option<Position>),
    Score(String),
    Win(String),
    Draw,
    Invalid(usize, usize),
}

/// Answers prompts from fixed scripts and records every notification.
///
/// When the move script runs out the front end reports itself closed.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub name: String,
    pub mark: Option<Mark>,
    pub difficulties: VecDeque<Difficulty>,
    pub moves: VecDeque<(usize, usize)>,
    pub play_again: VecDeque<bool>,
    pub stall_moves: bool,
    pub shown: Vec<Shown>,
}

impl ScriptedUi {
    pub fn with_moves(moves: &[(usize, usize)]) -> Self {
        Self {
            name: "Ada".to_string(),
            mark: Some(Mark::X),
            difficulties: VecDeque::from([Difficulty::Medium]),
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn wins(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Win(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn invalid_moves(&self) -> Vec<(usize, usize)> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Invalid(row, col) => Some((*row, *col)),
                _ => None,
            })
            .collect()
    }

    pub fn last_score(&self) -> Option<&str> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Score(line) => Some(line.as_str()),
            _ => None,
        })
    }
}

#[async_trait::async_trait]
impl GameUi for ScriptedUi {
    async fn players_name(&mut self) -> Result<String, UiError> {
        Ok(self.name.clone())
    }

    async fn players_symbol(&mut self) -> Result<Mark, UiError> {
        self.mark.ok_or_else(UiError::closed)
    }

    async fn prompt_difficulty(&mut self) -> Result<Difficulty, UiError> {
        self.difficulties.pop_front().ok_or_else(UiError::closed)
    }

    async fn acquire_human_move(
        &mut self,
        _player: &Player,
        _board: &Board,
    ) -> Result<(usize, usize), UiError> {
        if self.stall_moves {
            std::future::pending::<()>().await;
        }
        self.moves.pop_front().ok_or_else(UiError::closed)
    }

    async fn prompt_play_again(&mut self) -> Result<bool, UiError> {
        Ok(self.play_again.pop_front().unwrap_or(false))
    }

    fn display_board(&mut self, board: &Board, highlight: Option<Position>) {
        self.shown.push(Shown::Board(*board, highlight));
    }

    fn display_score(&mut self, summary: &str) {
        self.shown.push(Shown::Score(summary.to_string()));
    }

    fn notify_win(&mut self, player: &Player) {
        self.shown.push(Shown::Win(player.name().to_string()));
    }

    fn notify_draw(&mut self) {
        self.shown.push(Shown::Draw);
    }

    fn notify_invalid_move(&mut self, row: usize, col: usize) {
        self.shown.push(Shown::Invalid(row, col));
    }
}

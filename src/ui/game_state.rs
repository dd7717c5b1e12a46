//! Game state management for the console game

use std::io;

use anyhow::{bail, Result};

use crate::board::{Board, Mark, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::find_winner;

use super::console::InputError;

/// Everything the game loop needs from the outside world
pub trait Frontend {
    /// Show the current board
    fn render_board(&mut self, board: &Board) -> io::Result<()>;

    /// Ask the human for a legal move, retrying on invalid input.
    fn request_human_move(&mut self, board: &Board) -> Result<Pos, InputError>;

    /// Print a line of game dialogue
    fn announce(&mut self, message: &str) -> io::Result<()>;
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Mark),
    Tie,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub human: Mark,
    pub current_turn: Mark,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    engine: AIEngine,
}

impl GameState {
    /// New game with X to move first.
    pub fn new(board: Board, human: Mark, engine: AIEngine) -> Self {
        debug_assert!(human != Mark::Empty);
        Self {
            board,
            human,
            current_turn: Mark::X,
            move_history: Vec::new(),
            last_ai_result: None,
            engine,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.human
    }

    /// Place the human's mark for the current turn
    pub fn play_human_move(&mut self, pos: Pos) -> Result<(), InputError> {
        let (row, col) = (pos.row as i64, pos.col as i64);
        if !self.board.in_bounds(row, col) {
            return Err(InputError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(InputError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.execute_move(pos);
        Ok(())
    }

    /// Let the engine choose and commit a move for the current turn
    pub fn play_computer_move(&mut self) -> Result<Pos> {
        let color = self.current_turn;
        let result = self.engine.choose_move(&mut self.board, color);
        let Some(pos) = result.best_move else {
            bail!("engine found no move for {color}");
        };
        self.move_history.push((pos, color));
        self.last_ai_result = Some(result);
        Ok(pos)
    }

    /// Record a move placed by the human
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.board.place(pos, color);
        self.move_history.push((pos, color));
    }

    /// Hand the turn to the other side
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Winner or tie, if the game is over
    pub fn outcome(&self) -> Option<GameResult> {
        if let Some(winner) = find_winner(&self.board) {
            return Some(GameResult::Winner(winner));
        }
        if self.board.is_full() {
            return Some(GameResult::Tie);
        }
        None
    }
}

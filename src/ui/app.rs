//! Main loop for the console game

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::info;

use crate::board::{Board, Mark};
use crate::engine::{AIEngine, EngineConfig};
use crate::search::PruneScope;

use super::console::Console;
use super::game_state::{Frontend, GameResult, GameState};

/// Settings for one run of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Board size; prompted for when `None`
    pub size: Option<usize>,
    /// Search depth, at least 1; defaults to the board size
    pub depth: Option<u32>,
    /// The human's mark
    pub human: Mark,
    pub prune_scope: PruneScope,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: None,
            depth: None,
            human: Mark::X,
            prune_scope: PruneScope::Row,
        }
    }
}

/// Run a full game over the given input and output.
pub fn run<R: BufRead, W: Write>(input: R, output: W, settings: GameSettings) -> Result<GameResult> {
    let mut console = Console::new(input, output);

    let size = match settings.size {
        Some(size) => size,
        None => console
            .prompt_board_size()
            .context("failed to read board size")?,
    };
    let board = Board::new(size)?;

    let depth = match settings.depth {
        Some(depth) => depth,
        None => u32::try_from(size).context("board size too large for a search depth")?,
    };
    if depth == 0 {
        bail!("search depth must be at least 1");
    }
    let config = EngineConfig::default()
        .with_max_depth(depth)
        .with_maximizer(Mark::X)
        .with_prune_scope(settings.prune_scope);
    info!(
        "new game: {size}x{size}, depth {depth}, human {}, cutoff {:?}",
        settings.human, settings.prune_scope
    );

    let mut state = GameState::new(board, settings.human, AIEngine::with_config(config));
    run_game(&mut state, &mut console)
}

/// Alternate turns until someone owns a line or the board fills up.
pub fn run_game<F: Frontend>(state: &mut GameState, frontend: &mut F) -> Result<GameResult> {
    frontend.announce("Starting game...")?;
    frontend.announce(&format!("{}'s turn.", state.current_turn))?;

    loop {
        frontend.render_board(&state.board)?;

        if let Some(result) = state.outcome() {
            match result {
                GameResult::Winner(mark) => frontend.announce(&format!("{mark} wins!"))?,
                GameResult::Tie => frontend.announce("Game over. It's a tie!")?,
            }
            info!("game over: {result:?} after {} moves", state.move_history.len());
            return Ok(result);
        }

        if state.is_human_turn() {
            let pos = frontend
                .request_human_move(&state.board)
                .context("failed to read human move")?;
            state.play_human_move(pos)?;
        } else {
            state.play_computer_move()?;
        }

        state.switch_turn();
        frontend.announce(&format!("{}'s turn.", state.current_turn))?;
    }
}

//! Main AI engine wrapping the minimax searcher
//!
//! The engine owns the search configuration and turns a raw search into a
//! committed move with timing and node statistics.
//!
//! # Example
//!
//! ```
//! use nrow::{AIEngine, Board, EngineConfig, Mark, Pos};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_max_depth(3));
//! let mut board = Board::new(3).unwrap();
//! board.place(Pos::new(1, 1), Mark::X);
//!
//! let result = engine.choose_move(&mut board, Mark::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::search::{PruneScope, SearchResult, Searcher};

/// Default search depth when none is configured
pub const DEFAULT_DEPTH: u32 = 3;

/// Search parameters for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below the root
    pub max_depth: u32,
    /// Mark the evaluation is scored for
    pub maximizer: Mark,
    /// Reach of an alpha-beta cutoff
    pub prune_scope: PruneScope,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            maximizer: Mark::X,
            prune_scope: PruneScope::Row,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_maximizer(mut self, maximizer: Mark) -> Self {
        self.maximizer = maximizer;
        self
    }

    #[must_use]
    pub fn with_prune_scope(mut self, prune_scope: PruneScope) -> Self {
        self.prune_scope = prune_scope;
        self
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move committed to the board, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the position before the move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Main AI engine for N-in-a-row.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.max_depth, config.maximizer)
                .with_prune_scope(config.prune_scope),
            config,
        }
    }

    /// Choose a move for `color` and commit it to `board`.
    ///
    /// The board must have at least one empty cell; otherwise no move is
    /// committed and `best_move` is `None`.
    pub fn choose_move(&mut self, board: &mut Board, color: Mark) -> MoveResult {
        let start = Instant::now();

        let result = self.searcher.choose_move(board, color);
        debug!(
            "search {color}: nodes={} leaves={} cutoffs={}",
            result.stats.nodes, result.stats.leaves, result.stats.cutoffs
        );

        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);
        if let Some(pos) = result.best_move {
            info!(
                "{color} plays {pos} (score {}, {} nodes, {}ms)",
                result.score, result.nodes, result.time_ms
            );
        }
        result
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: u32) {
        *self = Self::with_config(self.config.with_max_depth(depth));
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the game-tree search for the N-in-a-row AI.
//! The search works directly on the live board: every candidate move is
//! placed, searched and cleared again before the next one is tried, so the
//! board a caller sees after a search is the board it passed in.
//!
//! # Features
//!
//! - Fixed maximizer: one mark always maximizes, the other minimizes
//! - Row-major move scan with first-improvement tie breaking
//! - Configurable cutoff scope (row-only break or full cutoff)
//!
//! # Example
//!
//! ```
//! use nrow::board::{Board, Mark, Pos};
//! use nrow::search::Searcher;
//!
//! let mut board = Board::new(3).unwrap();
//! board.place(Pos::new(0, 0), Mark::X);
//! board.place(Pos::new(0, 1), Mark::X);
//!
//! let mut searcher = Searcher::new(3, Mark::X);
//! let result = searcher.choose_move(&mut board, Mark::O);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use log::trace;

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, Score};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = Score::WIN + 1;

/// How far an alpha-beta cutoff reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneScope {
    /// Stop scanning the current row only; later rows are still visited.
    #[default]
    Row,
    /// Stop scanning the node entirely (standard alpha-beta).
    Tree,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes evaluated at the horizon or on a full board
    pub leaves: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the root position
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher.
///
/// `maximizer` is the mark the evaluation is scored for; whichever side is
/// asked to move, the searcher maximizes on that mark's turns and minimizes
/// on the opponent's.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u32,
    maximizer: Mark,
    prune_scope: PruneScope,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with a row-scoped cutoff.
    #[must_use]
    pub fn new(max_depth: u32, maximizer: Mark) -> Self {
        debug_assert!(maximizer != Mark::Empty);
        Self {
            max_depth,
            maximizer,
            prune_scope: PruneScope::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_prune_scope(mut self, prune_scope: PruneScope) -> Self {
        self.prune_scope = prune_scope;
        self
    }

    /// Statistics accumulated since the last [`Searcher::choose_move`]
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Returns the score of the position with `player` to move and the move
    /// that achieves it. Terminal nodes (`depth` at the horizon or a full
    /// board) return the static evaluation and no move.
    ///
    /// Moves are tried in row-major order and only a strictly better score
    /// replaces the current best, so ties keep the earliest move. The board
    /// is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        player: Mark,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;

        if depth >= self.max_depth || board.is_full() {
            self.stats.leaves += 1;
            return (evaluate(board, self.maximizer), None);
        }

        let maximizing = player == self.maximizer;
        let mut value = if maximizing { -INF } else { INF };
        let mut best_move = None;
        let n = board.size();

        'rows: for row in 0..n {
            'cols: for col in 0..n {
                let pos = Pos::new(row, col);
                if !board.is_empty(pos) {
                    continue;
                }

                board.place(pos, player);
                let (score, _) = self.search(board, depth + 1, player.opponent(), alpha, beta);
                board.clear(pos);

                if depth == 0 {
                    trace!("root {player} {pos}: {score}");
                }

                if maximizing {
                    if score > value {
                        value = score;
                        best_move = Some(pos);
                    }
                    alpha = alpha.max(value);
                } else {
                    if score < value {
                        value = score;
                        best_move = Some(pos);
                    }
                    beta = beta.min(value);
                }

                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    match self.prune_scope {
                        PruneScope::Row => break 'cols,
                        PruneScope::Tree => break 'rows,
                    }
                }
            }
        }

        (value, best_move)
    }

    /// Search from the root for `player` and commit the chosen move.
    ///
    /// The caller guarantees at least one legal move exists. If none does,
    /// `best_move` is `None` and the board is left untouched.
    pub fn choose_move(&mut self, board: &mut Board, player: Mark) -> SearchResult {
        self.stats = SearchStats::default();

        let (score, best_move) = self.search(board, 0, player, -INF, INF);
        if let Some(pos) = best_move {
            board.place(pos, player);
        }

        SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
        }
    }
}

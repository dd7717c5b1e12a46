//! N-in-a-row AI engine
//!
//! Generalized tic-tac-toe on an N x N board against a minimax opponent:
//! - Any board size N >= 1
//! - A full row, column or diagonal wins
//! - X moves first; the human may play either mark
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and move validation
//! - [`rules`]: Line detection and winner lookup
//! - [`eval`]: Terminal evaluation for the search
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: Search configuration and committed moves
//! - [`ui`]: Console front end and game loop
//!
//! # Quick Start
//!
//! ```
//! use nrow::{AIEngine, Board, EngineConfig, Mark, Pos};
//!
//! let mut board = Board::new(3).unwrap();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_max_depth(3));
//!
//! // Human takes the center
//! board.place(Pos::new(1, 1), Mark::X);
//!
//! // AI responds as O
//! if let Some(pos) = engine.choose_move(&mut board, Mark::O).best_move {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! The search has no move ordering, no transposition table and no iterative
//! deepening. It scans cells in row-major order to a fixed depth, and scores
//! only completed lines, so a win at the horizon counts the same as an
//! immediate one.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Mark, Pos};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use search::PruneScope;

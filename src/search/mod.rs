//! Search module for the N-in-a-row AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{PruneScope, SearchResult, SearchStats, Searcher, INF};

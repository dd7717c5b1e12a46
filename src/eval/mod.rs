//! Evaluation module for N-in-a-row positions
//!
//! Evaluation is purely terminal: a completed line for either side, or
//! nothing. There is no positional or pattern scoring.

pub mod heuristic;
pub mod score;

pub use heuristic::evaluate;
pub use score::Score;

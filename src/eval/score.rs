//! Score constants for evaluation

/// Evaluation scores, from the maximizer's point of view
pub struct Score;

impl Score {
    /// Maximizer owns a complete line
    pub const WIN: i32 = 1;
    /// Neither side owns a complete line
    pub const DRAW: i32 = 0;
    /// Minimizer owns a complete line
    pub const LOSS: i32 = -1;
}

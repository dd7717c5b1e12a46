//! Evaluation function for the minimax search

use crate::board::{Board, Mark};
use crate::rules::has_winning_line;

use super::Score;

/// Evaluate the board for the side the search is maximizing for.
///
/// Returns [`Score::WIN`] if `maximizer` owns a complete line anywhere on the
/// board, [`Score::LOSS`] if its opponent does, [`Score::DRAW`] otherwise.
/// The maximizer is checked first, so a board where both sides own a line
/// scores as a win.
///
/// The score does not depend on search depth: a win found at the horizon
/// counts the same as an immediate one.
#[must_use]
pub fn evaluate(board: &Board, maximizer: Mark) -> i32 {
    debug_assert!(maximizer != Mark::Empty);

    if has_winning_line(board, maximizer) {
        Score::WIN
    } else if has_winning_line(board, maximizer.opponent()) {
        Score::LOSS
    } else {
        Score::DRAW
    }
}

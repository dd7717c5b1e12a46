//! Win condition checking for N-in-a-row
//!
//! A player wins by owning every cell of a full row, a full column, the main
//! diagonal or the anti-diagonal. Lines are always board-length; there is no
//! shorter "k-in-a-row" window.

use crate::board::{Board, Mark, Pos};

/// Check whether the mark at `pos` completes a full line through that cell.
///
/// Rows and columns are rescanned in full regardless of where `pos` sits in
/// them. The main diagonal is only inspected when `row == col`, the
/// anti-diagonal only when `row + col == N - 1`. An empty cell never forms a
/// line.
pub fn has_line_through(board: &Board, pos: Pos) -> bool {
    let mark = board.get(pos);
    if mark == Mark::Empty {
        return false;
    }
    let n = board.size();

    // Horizontal
    if (0..n).all(|c| board.get(Pos::new(pos.row, c)) == mark) {
        return true;
    }

    // Vertical
    if (0..n).all(|r| board.get(Pos::new(r, pos.col)) == mark) {
        return true;
    }

    // Main diagonal
    if pos.row == pos.col && (0..n).all(|i| board.get(Pos::new(i, i)) == mark) {
        return true;
    }

    // Anti-diagonal
    if pos.row + pos.col == n - 1 && (0..n).all(|i| board.get(Pos::new(i, n - 1 - i)) == mark) {
        return true;
    }

    false
}

/// Check if `mark` owns a complete line anywhere on the board.
///
/// Scans every cell holding `mark`, so this is a full-board rescan.
pub fn has_winning_line(board: &Board, mark: Mark) -> bool {
    board
        .occupied()
        .any(|(pos, m)| m == mark && has_line_through(board, pos))
}

/// Check for a winner
///
/// Returns the owner of the first occupied cell (row-major) that lies on a
/// complete line, `None` otherwise.
pub fn find_winner(board: &Board) -> Option<Mark> {
    board
        .occupied()
        .find(|&(pos, _)| has_line_through(board, pos))
        .map(|(_, mark)| mark)
}

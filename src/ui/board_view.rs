//! Text rendering of the board

use crate::board::{Board, Pos};

/// Render the board as text.
///
/// Output starts with an empty line; each row is drawn as `| a | b | c |`
/// and followed by a separator of `4N - 1` dashes.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let separator = "-".repeat(n * 4 - 1);

    let mut out = String::from("\n");
    for row in 0..n {
        out.push('|');
        for col in 0..n {
            let mark = board.get(Pos::new(row, col));
            out.push(' ');
            out.push(mark.symbol());
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

//! Line-based console input and output

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Board, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use super::board_view::render_board;
use super::game_state::Frontend;

const SIZE_PROMPT: &str = "Please enter the size of your NxN board: ";
const MOVE_PROMPT: &str = "Enter move (row, col): ";

/// Errors raised while reading human input
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Text is not two comma-separated integers
    #[error("expected \"row, col\", got {0:?}")]
    Malformed(String),

    /// Coordinates off the board
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    /// Cell already holds a mark
    #[error("({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    /// Board size is not an integer in the supported range
    #[error("invalid board size {0:?}")]
    InvalidSize(String),

    /// Input closed while waiting for an answer
    #[error("input closed")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse `"row, col"` and check it is a legal move on `board`.
///
/// Whitespace around each number is ignored. Coordinates are 0-indexed.
pub fn parse_move(text: &str, board: &Board) -> Result<Pos, InputError> {
    let malformed = || InputError::Malformed(text.trim().to_string());

    let mut parts = text.split(',');
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err(malformed()),
    };
    let row: i64 = row.trim().parse().map_err(|_| malformed())?;
    let col: i64 = col.trim().parse().map_err(|_| malformed())?;

    if !board.in_bounds(row, col) {
        return Err(InputError::OutOfBounds {
            row,
            col,
            size: board.size(),
        });
    }
    let pos = Pos::new(row as usize, col as usize);
    if !board.is_empty(pos) {
        return Err(InputError::Occupied {
            row: pos.row,
            col: pos.col,
        });
    }
    Ok(pos)
}

/// Parse a board size (an integer from 1 to [`MAX_BOARD_SIZE`]).
pub fn parse_board_size(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    match text.parse::<usize>() {
        Ok(size) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => Ok(size),
        _ => Err(InputError::InvalidSize(text.to_string())),
    }
}

/// Console front end over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a valid board size is entered.
    pub fn prompt_board_size(&mut self) -> Result<usize, InputError> {
        loop {
            let line = self.prompt(SIZE_PROMPT)?;
            match parse_board_size(&line) {
                Ok(size) => return Ok(size),
                Err(err) => {
                    debug!("rejected board size: {err}");
                    writeln!(self.output, "Invalid board size.")?;
                }
            }
        }
    }

    /// Print `text` without a newline and read one line of input.
    fn prompt(&mut self, text: &str) -> Result<String, InputError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn render_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render_board(board))
    }

    fn request_human_move(&mut self, board: &Board) -> Result<Pos, InputError> {
        loop {
            let line = self.prompt(MOVE_PROMPT)?;
            match parse_move(&line, board) {
                Ok(pos) => return Ok(pos),
                Err(err) => {
                    debug!("rejected move: {err}");
                    writeln!(self.output, "Invalid move.")?;
                }
            }
        }
    }

    fn announce(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

//! Square grid of marks with move validation

use super::{Mark, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors raised when building a board
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested size below the 1x1 minimum
    #[error("Board size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// Requested size above the supported maximum
    #[error("Board size must be at most {max}, got {0}", max = MAX_BOARD_SIZE)]
    TooLarge(usize),
}

/// N x N game board
///
/// Cells are stored row-major. The size is fixed at construction and every
/// cell always holds a valid [`Mark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    size: usize,
}

impl Board {
    /// Create an empty board of `size` x `size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge(size));
        }
        let cells = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
        Ok(Self {
            cells: vec![Mark::Empty; cells],
            size,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Check that `(row, col)` is on the board and empty.
    ///
    /// Takes signed coordinates so raw user input can be validated directly.
    pub fn is_valid_move(&self, row: i64, col: i64) -> bool {
        self.in_bounds(row, col) && self.is_empty(Pos::new(row as usize, col as usize))
    }

    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Place a mark. The caller guarantees the move is valid.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = mark;
    }

    /// Reset a cell to empty (undo of a provisional placement)
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.place(pos, Mark::Empty);
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Iterate over occupied positions with their marks, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark != Mark::Empty)
            .map(|(idx, &mark)| (Pos::from_index(idx, self.size), mark))
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Positions whose marks differ between two boards of equal size
    pub fn diff(&self, other: &Board) -> Vec<Pos> {
        debug_assert_eq!(self.size, other.size);
        self.positions()
            .filter(|&pos| self.get(pos) != other.get(pos))
            .collect()
    }
}

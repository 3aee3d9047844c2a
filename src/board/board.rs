//! Grid storage and move legality

use super::{Pos, Stone};
use crate::error::BoardError;

/// Square game board. Size is fixed at construction; there is no resizing
/// and a placed stone never reverts to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be nonzero");
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Check if position is on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get stone at an in-bounds position.
    ///
    /// Callers must check bounds first; use [`Board::stone_at`] for the
    /// checked query.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(self.contains(pos));
        self.cells[self.index(pos)]
    }

    /// Bounds-checked stone query
    pub fn stone_at(&self, pos: Pos) -> Result<Stone, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self.get(pos))
    }

    /// A move is legal iff the position is on the board and unoccupied
    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone.
    ///
    /// Fails with [`BoardError::InvalidMove`] when the position is out of
    /// bounds or already occupied. No other side effects.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        debug_assert!(stone != Stone::Empty, "cannot place an empty stone");
        if !self.is_legal(pos) {
            return Err(BoardError::InvalidMove(pos));
        }
        let idx = self.index(pos);
        self.cells[idx] = stone;
        Ok(())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// True while at least one empty cell remains
    pub fn has_legal_move(&self) -> bool {
        self.cells.iter().any(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.has_legal_move()
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

//! Board cursor for keyboard play.

use crate::types::Direction;

/// Position of the keyboard cursor on an N x N board.
///
/// Movement clamps at the edges instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    size: usize,
    row: usize,
    col: usize,
}

impl GridCursor {
    pub fn new(size: usize) -> Self {
        Self {
            size: size.max(1),
            row: 0,
            col: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index.
    pub fn index(&self) -> usize {
        self.row * self.size + self.col
    }

    pub fn move_dir(&mut self, dir: Direction) {
        let last = self.size - 1;
        match dir {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(last),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(last),
        }
    }

    /// Follow a board size change, keeping the cursor on the board.
    pub fn resize(&mut self, size: usize) {
        self.size = size.max(1);
        self.row = self.row.min(self.size - 1);
        self.col = self.col.min(self.size - 1);
    }
}

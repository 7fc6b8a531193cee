//! Board module - the fruit grid
//!
//! The board is a square `size x size` grid of fruits stored as a flat
//! row-major vector. Cells are addressed by flat index (`row * size + col`).
//! A board never changes during a round; it is replaced only by regeneration
//! (see [`crate::rng::Randomizer::generate_board`]).

use std::collections::BTreeMap;

use crate::types::Fruit;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Row-major cells (row * size + col)
    cells: Vec<Fruit>,
}

impl Board {
    /// Build a board from an already laid out cell vector.
    ///
    /// Returns `None` if `cells.len() != size * size`.
    pub fn from_cells(size: u8, cells: Vec<Fruit>) -> Option<Self> {
        if cells.len() != (size as usize) * (size as usize) {
            return None;
        }
        Some(Self { size, cells })
    }

    /// A 0x0 board, used before the first layout is generated.
    pub fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Fruit at a flat index, `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Fruit> {
        self.cells.get(index).copied()
    }

    /// Flat index of (row, col), `None` if out of bounds.
    #[inline(always)]
    pub fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    pub fn cells(&self) -> &[Fruit] {
        &self.cells
    }

    /// How many times each fruit appears on the board.
    pub fn fruit_counts(&self) -> BTreeMap<Fruit, usize> {
        let mut counts = BTreeMap::new();
        for &fruit in &self.cells {
            *counts.entry(fruit).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct fruits on the board, in `Fruit::ALL` order.
    pub fn fruits(&self) -> Vec<Fruit> {
        self.fruit_counts().into_keys().collect()
    }

    /// Number of copies of `fruit` on the board.
    pub fn count_of(&self, fruit: Fruit) -> usize {
        self.cells.iter().filter(|&&f| f == fruit).count()
    }

    /// All cell indices holding `fruit`.
    pub fn positions_of(&self, fruit: Fruit) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| (f == fruit).then_some(i))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        // 2x2: apple, banana / banana, apple
        Board::from_cells(
            2,
            vec![Fruit::Apple, Fruit::Banana, Fruit::Banana, Fruit::Apple],
        )
        .unwrap()
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(3, vec![Fruit::Apple; 8]).is_none());
        assert!(Board::from_cells(3, vec![Fruit::Apple; 9]).is_some());
    }

    #[test]
    fn test_index_bounds() {
        let board = small_board();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(1, 0), Some(2));
        assert_eq!(board.index(1, 1), Some(3));
        assert_eq!(board.index(2, 0), None);
        assert_eq!(board.index(0, 2), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = small_board();
        assert_eq!(board.get(3), Some(Fruit::Apple));
        assert_eq!(board.get(4), None);
    }

    #[test]
    fn test_fruit_counts_and_positions() {
        let board = small_board();
        let counts = board.fruit_counts();
        assert_eq!(counts.get(&Fruit::Apple), Some(&2));
        assert_eq!(counts.get(&Fruit::Banana), Some(&2));
        assert_eq!(board.fruits(), vec![Fruit::Apple, Fruit::Banana]);
        assert_eq!(board.positions_of(Fruit::Apple), vec![0, 3]);
        assert_eq!(board.count_of(Fruit::Kiwi), 0);
    }
}

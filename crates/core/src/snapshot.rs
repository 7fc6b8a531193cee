//! Read-only view of a round, filled by [`crate::GameState::snapshot_into`].
//!
//! Renderers draw from a snapshot instead of borrowing the game state, so a
//! frame can be built while the controller keeps ticking.

use arrayvec::ArrayVec;

use crate::types::{CellView, Fruit, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub level: u32,
    /// Length of the current level's target sequence.
    pub target_count: usize,
    /// Targets already matched this level.
    pub found: usize,
    pub countdown: u32,
    pub warning: bool,
    pub paused: bool,
    pub custom_mode: bool,
    pub errors: u32,
    pub generation: u32,
    pub seed: u64,
    pub board_size: u8,
    /// Row-major, `board_size^2` entries.
    pub cells: Vec<CellView>,
    pub selected: ArrayVec<usize, 2>,
    /// The whole sequence while it is displayed, otherwise the fruits found so
    /// far.
    pub sequence: Vec<Fruit>,
    pub sequence_secs_left: u32,
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            level: 1,
            target_count: 0,
            found: 0,
            countdown: 0,
            warning: false,
            paused: false,
            custom_mode: false,
            errors: 0,
            generation: 0,
            seed: 0,
            board_size: 0,
            cells: Vec::new(),
            selected: ArrayVec::new(),
            sequence: Vec::new(),
            sequence_secs_left: 0,
        }
    }
}

impl RoundSnapshot {
    /// Cell at `(row, col)`, if inside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellView> {
        let size = self.board_size as usize;
        if row >= size || col >= size {
            return None;
        }
        self.cells.get(row * size + col).copied()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn matched_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellView::Matched(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup_is_row_major() {
        let mut snap = RoundSnapshot {
            board_size: 2,
            ..Default::default()
        };
        snap.cells = vec![
            CellView::Hidden,
            CellView::Revealed(Fruit::Apple),
            CellView::Matched(Fruit::Kiwi),
            CellView::Hidden,
        ];

        assert_eq!(snap.cell(0, 1), Some(CellView::Revealed(Fruit::Apple)));
        assert_eq!(snap.cell(1, 0), Some(CellView::Matched(Fruit::Kiwi)));
        assert_eq!(snap.cell(2, 0), None);
        assert_eq!(snap.cell(0, 2), None);
        assert_eq!(snap.matched_count(), 1);
    }
}

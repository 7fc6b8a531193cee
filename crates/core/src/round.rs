//! Round state - per-level progress of the player
//!
//! Holds everything that changes while a level is played: revealed and
//! matched cells, the pending pair selection, the countdown and the position
//! in the target sequence. The board and settings live on the controller.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::types::Fruit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub level: u32,
    /// Seconds left on the countdown.
    pub countdown: u32,
    pub is_playing: bool,
    pub is_paused: bool,
    pub current_target_index: usize,
    pub target_sequence: Vec<Fruit>,
    /// Cells currently revealed by a view.
    pub active_cells: BTreeSet<usize>,
    /// Cells confirmed as part of a pair.
    pub matched_cells: BTreeSet<usize>,
    /// Pending pair selection, in selection order.
    pub selected: ArrayVec<usize, 2>,
    pub errors: u32,
}

impl RoundState {
    pub fn new(countdown: u32) -> Self {
        Self {
            level: 1,
            countdown,
            is_playing: false,
            is_paused: false,
            current_target_index: 0,
            target_sequence: Vec::new(),
            active_cells: BTreeSet::new(),
            matched_cells: BTreeSet::new(),
            selected: ArrayVec::new(),
            errors: 0,
        }
    }

    /// Reset per-level progress, keeping level and errors.
    pub fn reset_level(&mut self, countdown: u32, target_sequence: Vec<Fruit>) {
        self.countdown = countdown;
        self.is_paused = false;
        self.current_target_index = 0;
        self.target_sequence = target_sequence;
        self.active_cells.clear();
        self.matched_cells.clear();
        self.selected.clear();
    }

    /// Back to level 1 with a clean error count.
    pub fn reset_full(&mut self, countdown: u32, target_sequence: Vec<Fruit>) {
        self.level = 1;
        self.errors = 0;
        self.is_playing = false;
        self.reset_level(countdown, target_sequence);
    }

    /// Fruit the player must find next.
    pub fn current_target(&self) -> Option<Fruit> {
        self.target_sequence.get(self.current_target_index).copied()
    }

    pub fn is_sequence_complete(&self) -> bool {
        self.current_target_index >= self.target_sequence.len()
    }

    pub fn is_active(&self, cell: usize) -> bool {
        self.active_cells.contains(&cell)
    }

    pub fn is_matched(&self, cell: usize) -> bool {
        self.matched_cells.contains(&cell)
    }

    pub fn is_selected(&self, cell: usize) -> bool {
        self.selected.contains(&cell)
    }

    /// Mark a pair as matched and advance the target index.
    pub fn record_match(&mut self, a: usize, b: usize) {
        for cell in [a, b] {
            self.active_cells.remove(&cell);
            self.matched_cells.insert(cell);
        }
        self.selected.clear();
        self.current_target_index += 1;
    }

    /// Structural invariants of the round.
    pub fn invariants_hold(&self) -> bool {
        self.active_cells.is_disjoint(&self.matched_cells)
            && self.selected.len() <= 2
            && self.current_target_index <= self.target_sequence.len()
    }
}

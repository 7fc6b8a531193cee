//! RNG module - board layouts and target sequences
//!
//! All randomness of a game flows through one seeded [`Randomizer`], so a
//! given seed reproduces the same boards and sequences (replays, tests).
//!
//! - Boards hold every fruit in play a fixed number of times (at least
//!   [`MIN_SYMBOL_REPEAT`]), padded with random fruits, then shuffled.
//! - Target sequences are drawn without replacement, so a level never asks
//!   for the same fruit twice.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::types::{target_count, Fruit, LEVEL_COUNT, MIN_SYMBOL_REPEAT};

#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Randomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this randomizer was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random value in range [0, max)
    pub fn next_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Build a shuffled `size x size` board.
    ///
    /// The fruits in play are the first [`fruits_in_play`] entries of
    /// `fruits`; each one is placed `cells / in_play` times and the remainder
    /// is filled with random fruits in play.
    pub fn generate_board(&mut self, size: u8, fruits: &[Fruit]) -> Board {
        let total = (size as usize) * (size as usize);
        let in_play = &fruits[..fruits_in_play(total, fruits.len())];

        let mut cells = Vec::with_capacity(total);
        if !in_play.is_empty() {
            let per_fruit = total / in_play.len();
            for &fruit in in_play {
                cells.extend(std::iter::repeat(fruit).take(per_fruit));
            }
            while cells.len() < total {
                cells.push(in_play[self.next_range(in_play.len())]);
            }
        }

        self.shuffle(&mut cells);
        log::debug!(
            "generated {size}x{size} board with {} fruits in play",
            in_play.len()
        );

        // Too small to hold any fruit three times.
        Board::from_cells(size, cells).unwrap_or_default()
    }

    /// Draw the target sequence for a 1-based level.
    ///
    /// Fruits are drawn without replacement; if the level asks for more
    /// targets than there are fruits, the sequence is capped at `fruits.len()`.
    pub fn generate_target_sequence(&mut self, level: u32, fruits: &[Fruit]) -> Vec<Fruit> {
        let count = target_count(level).min(fruits.len());
        let mut pool = fruits.to_vec();
        let (picked, _) = pool.partial_shuffle(&mut self.rng, count);
        picked.to_vec()
    }

    /// Pre-generate the sequences of every configured level.
    pub fn generate_all_sequences(&mut self, fruits: &[Fruit]) -> Vec<Vec<Fruit>> {
        (1..=LEVEL_COUNT as u32)
            .map(|level| self.generate_target_sequence(level, fruits))
            .collect()
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Number of distinct fruits a board of `total_cells` can hold while keeping
/// [`MIN_SYMBOL_REPEAT`] copies of each.
pub fn fruits_in_play(total_cells: usize, available: usize) -> usize {
    available.min(total_cells / MIN_SYMBOL_REPEAT)
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core state machine, terminal rendering, key mapping).
//!
//! # Board
//!
//! The board is a square grid of fruits addressed by a flat cell index
//! (`row * size + col`). The main game uses a 6x6 board where each of the 12
//! fruits appears exactly 3 times.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds unless the name says otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval of the terminal loop |
//! | `COUNTDOWN_TICK_MS` | 1000 | Countdown decrement period |
//! | `DEFAULT_CELL_REVEAL_MS` | 2500 | How long a viewed cell stays revealed |
//! | `VERIFICATION_WINDOW_MS` | 1000 | Time allowed between the two pair selections |
//! | `FAILURE_RESTART_DELAY_MS` | 2000 | Pause before a failed round restarts |
//! | `LEVEL_CELEBRATION_MS` | 3000 | Pause before the next level starts |
//! | `COUNTDOWN_WARNING_SECS` | 10 | Countdown value at which the warning state starts |
//!
//! # Levels
//!
//! | Level | Targets |
//! |-------|---------|
//! | 1 | 2 |
//! | 2 | 4 |
//! | 3 | 6 |
//! | 4 | 8 |
//!
//! # Examples
//!
//! ```
//! use fruit_memory_types::{target_count, FailureBehavior, Fruit, LEVEL_COUNT};
//!
//! assert_eq!(Fruit::from_str("apple"), Some(Fruit::Apple));
//! assert_eq!(Fruit::ALL.len(), 12);
//!
//! assert_eq!(target_count(1), 2);
//! assert_eq!(target_count(LEVEL_COUNT as u32), 8);
//!
//! let policy = FailureBehavior::from_str("current-level").unwrap();
//! assert_eq!(policy, FailureBehavior::CurrentLevel);
//! ```

use serde::{Deserialize, Serialize};

/// Fixed timestep interval of the terminal loop (50ms).
pub const TICK_MS: u32 = 50;

/// Countdown decrement period (one second).
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Default board edge length (6x6 = 36 cells).
pub const DEFAULT_BOARD_SIZE: u8 = 6;

/// Minimum number of copies of every fruit in play.
pub const MIN_SYMBOL_REPEAT: usize = 3;

/// Default target sequence display time (seconds).
pub const DEFAULT_SEQUENCE_DISPLAY_SECS: u32 = 5;

/// Default time limit per level (seconds).
pub const DEFAULT_LEVEL_TIME_SECS: u32 = 60;

/// How long a viewed cell stays revealed in the main game.
pub const DEFAULT_CELL_REVEAL_MS: u32 = 2500;

/// Time allowed between the first and the second pair selection.
pub const VERIFICATION_WINDOW_MS: u32 = 1000;

/// Delay before a failed round is restarted.
pub const FAILURE_RESTART_DELAY_MS: u32 = 2000;

/// Delay between a completed level and the next one.
pub const LEVEL_CELEBRATION_MS: u32 = 3000;

/// Countdown value (seconds) at or below which the warning state is active.
pub const COUNTDOWN_WARNING_SECS: u32 = 10;

/// Number of configured levels.
pub const LEVEL_COUNT: usize = 4;

/// Target sequence length per level (index 0 = level 1).
pub const LEVEL_TARGET_COUNTS: [usize; LEVEL_COUNT] = [2, 4, 6, 8];

/// Target count used for any level past the configured ones.
pub const FALLBACK_TARGET_COUNT: usize = 8;

/// Custom mode defaults.
pub const CUSTOM_SEQUENCE_DISPLAY_SECS: u32 = 8;
pub const CUSTOM_LEVEL_TIMES_SECS: [u32; LEVEL_COUNT] = [60, 75, 90, 120];
pub const CUSTOM_CELL_REVEAL_MS: u32 = 8000;

/// Number of targets for a 1-based level.
pub fn target_count(level: u32) -> usize {
    level
        .checked_sub(1)
        .and_then(|i| LEVEL_TARGET_COUNTS.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_TARGET_COUNT)
}

/// Board symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fruit {
    Apple,
    Banana,
    Grape,
    Orange,
    Lemon,
    Cherry,
    Strawberry,
    Peach,
    Pineapple,
    Coconut,
    Kiwi,
    Mango,
}

impl Fruit {
    /// Full symbol set, in board-filling order.
    pub const ALL: [Fruit; 12] = [
        Fruit::Apple,
        Fruit::Banana,
        Fruit::Grape,
        Fruit::Orange,
        Fruit::Lemon,
        Fruit::Cherry,
        Fruit::Strawberry,
        Fruit::Peach,
        Fruit::Pineapple,
        Fruit::Coconut,
        Fruit::Kiwi,
        Fruit::Mango,
    ];

    /// Parse fruit from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Fruit::Apple => "apple",
            Fruit::Banana => "banana",
            Fruit::Grape => "grape",
            Fruit::Orange => "orange",
            Fruit::Lemon => "lemon",
            Fruit::Cherry => "cherry",
            Fruit::Strawberry => "strawberry",
            Fruit::Peach => "peach",
            Fruit::Pineapple => "pineapple",
            Fruit::Coconut => "coconut",
            Fruit::Kiwi => "kiwi",
            Fruit::Mango => "mango",
        }
    }

    /// Emoji glyph (log lines, wide-glyph front ends).
    pub fn glyph(&self) -> &'static str {
        match self {
            Fruit::Apple => "🍎",
            Fruit::Banana => "🍌",
            Fruit::Grape => "🍇",
            Fruit::Orange => "🍊",
            Fruit::Lemon => "🍋",
            Fruit::Cherry => "🍒",
            Fruit::Strawberry => "🍓",
            Fruit::Peach => "🍑",
            Fruit::Pineapple => "🍍",
            Fruit::Coconut => "🥥",
            Fruit::Kiwi => "🥝",
            Fruit::Mango => "🥭",
        }
    }

    /// Two-column label for fixed-width terminal cells.
    pub fn short(&self) -> &'static str {
        match self {
            Fruit::Apple => "Ap",
            Fruit::Banana => "Ba",
            Fruit::Grape => "Gr",
            Fruit::Orange => "Or",
            Fruit::Lemon => "Le",
            Fruit::Cherry => "Ch",
            Fruit::Strawberry => "St",
            Fruit::Peach => "Pe",
            Fruit::Pineapple => "Pi",
            Fruit::Coconut => "Co",
            Fruit::Kiwi => "Ki",
            Fruit::Mango => "Ma",
        }
    }
}

/// What happens after a round failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureBehavior {
    /// Replay the same level on the same board.
    CurrentLevel,
    /// Back to level 1 with a new board and new sequences.
    RestartFromStart,
}

impl FailureBehavior {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "current-level" => Some(FailureBehavior::CurrentLevel),
            "restart-from-start" => Some(FailureBehavior::RestartFromStart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureBehavior::CurrentLevel => "current-level",
            FailureBehavior::RestartFromStart => "restart-from-start",
        }
    }
}

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    SequenceDisplay,
    Playing,
    LevelComplete,
    Failed,
    GameComplete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::SequenceDisplay => "sequenceDisplay",
            Phase::Playing => "playing",
            Phase::LevelComplete => "levelComplete",
            Phase::Failed => "failed",
            Phase::GameComplete => "gameComplete",
        }
    }
}

/// Visible state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellView {
    Hidden,
    /// Revealed by a view; the verify action is enabled.
    Revealed(Fruit),
    /// Part of a confirmed pair; disabled for the rest of the level.
    Matched(Fruit),
}

impl CellView {
    pub fn fruit(&self) -> Option<Fruit> {
        match self {
            CellView::Hidden => None,
            CellView::Revealed(f) | CellView::Matched(f) => Some(*f),
        }
    }

    pub fn can_verify(&self) -> bool {
        matches!(self, CellView::Revealed(_))
    }
}

/// Message severity for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Why a round failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    CountdownExpired,
    /// Verify on a cell that is not currently revealed.
    CellNotRevealed,
    /// Verified fruit is not the current target.
    WrongSymbol,
    /// The two selected cells hold different fruits.
    MismatchedPair,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::CountdownExpired => "countdown expired",
            FailureReason::CellNotRevealed => "cell not revealed",
            FailureReason::WrongSymbol => "wrong fruit",
            FailureReason::MismatchedPair => "pair does not match",
        }
    }
}

/// Cursor movement direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Front-end intents produced by the key map.
///
/// Cell-addressed intents (`View`, `Verify`) act on the cursor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Move(Direction),
    View,
    Verify,
    Start,
    Reset,
    Pause,
    CustomMode,
    MainMode,
}

impl KeyIntent {
    /// Parse intent from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(KeyIntent::Move(Direction::Up)),
            "down" => Some(KeyIntent::Move(Direction::Down)),
            "left" => Some(KeyIntent::Move(Direction::Left)),
            "right" => Some(KeyIntent::Move(Direction::Right)),
            "view" => Some(KeyIntent::View),
            "verify" => Some(KeyIntent::Verify),
            "start" => Some(KeyIntent::Start),
            "reset" => Some(KeyIntent::Reset),
            "pause" => Some(KeyIntent::Pause),
            "custom" => Some(KeyIntent::CustomMode),
            "main" => Some(KeyIntent::MainMode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_defaults() {
        assert_eq!(DEFAULT_CELL_REVEAL_MS, 2500);
        assert_eq!(VERIFICATION_WINDOW_MS, 1000);
        assert_eq!(FAILURE_RESTART_DELAY_MS, 2000);
        assert_eq!(LEVEL_CELEBRATION_MS, 3000);
        assert_eq!(DEFAULT_SEQUENCE_DISPLAY_SECS, 5);
        assert_eq!(DEFAULT_LEVEL_TIME_SECS, 60);
        assert_eq!(COUNTDOWN_WARNING_SECS, 10);
    }

    #[test]
    fn test_target_count_per_level() {
        assert_eq!(target_count(1), 2);
        assert_eq!(target_count(2), 4);
        assert_eq!(target_count(3), 6);
        assert_eq!(target_count(4), 8);
    }

    #[test]
    fn test_target_count_fallback() {
        assert_eq!(target_count(0), FALLBACK_TARGET_COUNT);
        assert_eq!(target_count(5), FALLBACK_TARGET_COUNT);
        assert_eq!(target_count(99), FALLBACK_TARGET_COUNT);
    }

    #[test]
    fn test_default_board_holds_every_fruit_three_times() {
        let cells = DEFAULT_BOARD_SIZE as usize * DEFAULT_BOARD_SIZE as usize;
        assert_eq!(cells, Fruit::ALL.len() * MIN_SYMBOL_REPEAT);
    }

    #[test]
    fn test_fruit_from_str_roundtrip() {
        for fruit in Fruit::ALL {
            assert_eq!(Fruit::from_str(fruit.as_str()), Some(fruit));
        }
        assert_eq!(Fruit::from_str("APPLE"), Some(Fruit::Apple));
        assert_eq!(Fruit::from_str("durian"), None);
    }

    #[test]
    fn test_fruit_short_labels_are_unique() {
        let mut labels: Vec<&str> = Fruit::ALL.iter().map(|f| f.short()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Fruit::ALL.len());
    }

    #[test]
    fn test_failure_behavior_parse() {
        assert_eq!(
            FailureBehavior::from_str("Restart-From-Start"),
            Some(FailureBehavior::RestartFromStart)
        );
        assert_eq!(FailureBehavior::from_str("sometimes"), None);
        assert_eq!(FailureBehavior::CurrentLevel.as_str(), "current-level");
    }

    #[test]
    fn test_cell_view_verify_enabled_only_when_revealed() {
        assert!(!CellView::Hidden.can_verify());
        assert!(CellView::Revealed(Fruit::Kiwi).can_verify());
        assert!(!CellView::Matched(Fruit::Kiwi).can_verify());
        assert_eq!(CellView::Matched(Fruit::Kiwi).fruit(), Some(Fruit::Kiwi));
    }

    #[test]
    fn test_key_intent_parse() {
        assert_eq!(KeyIntent::from_str("LEFT"), Some(KeyIntent::Move(Direction::Left)));
        assert_eq!(KeyIntent::from_str("verify"), Some(KeyIntent::Verify));
        assert_eq!(KeyIntent::from_str("jump"), None);
    }
}

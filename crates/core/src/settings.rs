//! Game settings and the custom-mode profile.
//!
//! Settings are fixed for the duration of a round. They can be replaced
//! between rounds through [`crate::GameState::apply_custom_settings`], which
//! validates them first; out-of-range values are rejected, never wrapped.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::{
    FailureBehavior, CUSTOM_CELL_REVEAL_MS, CUSTOM_LEVEL_TIMES_SECS, CUSTOM_SEQUENCE_DISPLAY_SECS,
    DEFAULT_BOARD_SIZE, DEFAULT_CELL_REVEAL_MS, DEFAULT_LEVEL_TIME_SECS,
    DEFAULT_SEQUENCE_DISPLAY_SECS, LEVEL_COUNT,
};

pub const BOARD_SIZE_RANGE: (u32, u32) = (5, 8);
pub const SEQUENCE_DISPLAY_SECS_RANGE: (u32, u32) = (1, 60);
pub const LEVEL_TIME_SECS_RANGE: (u32, u32) = (10, 600);
pub const CELL_REVEAL_MS_RANGE: (u32, u32) = (500, 10_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board edge length; the board has `board_size^2` cells.
    pub board_size: u8,
    /// How long the target sequence is shown before play starts.
    pub sequence_display_secs: u32,
    /// Countdown per level (index 0 = level 1).
    pub level_time_limits_secs: [u32; LEVEL_COUNT],
    /// How long a viewed cell stays revealed.
    pub cell_reveal_ms: u32,
    pub failure_behavior: FailureBehavior,
    /// Count verification-window timeouts as errors.
    pub count_verification_timeouts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            sequence_display_secs: DEFAULT_SEQUENCE_DISPLAY_SECS,
            level_time_limits_secs: [DEFAULT_LEVEL_TIME_SECS; LEVEL_COUNT],
            cell_reveal_ms: DEFAULT_CELL_REVEAL_MS,
            failure_behavior: FailureBehavior::RestartFromStart,
            count_verification_timeouts: false,
        }
    }
}

impl Settings {
    /// Starting point of the custom-mode profile.
    pub fn custom_defaults() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            sequence_display_secs: CUSTOM_SEQUENCE_DISPLAY_SECS,
            level_time_limits_secs: CUSTOM_LEVEL_TIMES_SECS,
            cell_reveal_ms: CUSTOM_CELL_REVEAL_MS,
            failure_behavior: FailureBehavior::CurrentLevel,
            count_verification_timeouts: false,
        }
    }

    /// Load settings from a TOML file.
    ///
    /// Missing keys fall back to [`Settings::custom_defaults`], since a
    /// settings file only ever describes a custom profile.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings = Self::from_toml(&content)?;
        log::info!("loaded custom settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to the custom defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "settings file '{}' not found, using custom defaults",
                path.display()
            );
            Ok(Self::custom_defaults())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let partial: PartialSettings = toml::from_str(content)?;
        let settings = partial.over(Self::custom_defaults());
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check("board_size", self.board_size as u32, BOARD_SIZE_RANGE)?;
        check(
            "sequence_display_secs",
            self.sequence_display_secs,
            SEQUENCE_DISPLAY_SECS_RANGE,
        )?;
        for &secs in &self.level_time_limits_secs {
            check("level_time_limits_secs", secs, LEVEL_TIME_SECS_RANGE)?;
        }
        check("cell_reveal_ms", self.cell_reveal_ms, CELL_REVEAL_MS_RANGE)?;
        Ok(())
    }

    /// Countdown for a 1-based level; levels past the table reuse the last limit.
    pub fn level_time_secs(&self, level: u32) -> u32 {
        let i = (level.max(1) as usize - 1).min(LEVEL_COUNT - 1);
        self.level_time_limits_secs[i]
    }
}

fn check(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), SettingsError> {
    if value < min || value > max {
        return Err(SettingsError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// TOML view of [`Settings`] where every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialSettings {
    board_size: Option<u8>,
    sequence_display_secs: Option<u32>,
    level_time_limits_secs: Option<[u32; LEVEL_COUNT]>,
    cell_reveal_ms: Option<u32>,
    failure_behavior: Option<FailureBehavior>,
    count_verification_timeouts: Option<bool>,
}

impl PartialSettings {
    fn over(self, base: Settings) -> Settings {
        Settings {
            board_size: self.board_size.unwrap_or(base.board_size),
            sequence_display_secs: self
                .sequence_display_secs
                .unwrap_or(base.sequence_display_secs),
            level_time_limits_secs: self
                .level_time_limits_secs
                .unwrap_or(base.level_time_limits_secs),
            cell_reveal_ms: self.cell_reveal_ms.unwrap_or(base.cell_reveal_ms),
            failure_behavior: self.failure_behavior.unwrap_or(base.failure_behavior),
            count_verification_timeouts: self
                .count_verification_timeouts
                .unwrap_or(base.count_verification_timeouts),
        }
    }
}

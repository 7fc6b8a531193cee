use std::path::PathBuf;

use crate::types::FailureReason;

/// Why a view/verify request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionRejection {
    /// Not in the playing phase (idle, showing the sequence, between levels...).
    NotPlaying,
    Paused,
    OutOfRange,
    AlreadyMatched,
    /// The cell is already one of the pending pair selections.
    AlreadySelected,
}

impl InteractionRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionRejection::NotPlaying => "round is not in play",
            InteractionRejection::Paused => "game is paused",
            InteractionRejection::OutOfRange => "cell index out of range",
            InteractionRejection::AlreadyMatched => "cell already matched",
            InteractionRejection::AlreadySelected => "cell already selected",
        }
    }
}

/// Errors returned by player interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The request was ignored; game state is unchanged.
    #[error("invalid interaction on cell {cell}: {}", .reason.as_str())]
    InvalidInteraction {
        cell: usize,
        reason: InteractionRejection,
    },

    /// The request failed the round; recovery is already scheduled.
    #[error("round failed: {}", .0.as_str())]
    RoundFailure(FailureReason),
}

/// Error from [`crate::GameState::apply_command`].
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors that can occur when loading or applying settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

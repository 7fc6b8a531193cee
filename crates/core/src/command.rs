//! Command interface - every input a front end can send to the game.

use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Reset,
    TogglePause,
    ViewCell(usize),
    VerifyCell(usize),
    ApplyCustomSettings(Settings),
    ExitCustomMode,
}

impl GameCommand {
    /// Parse a settings-free command (`"view 12"`, `"pause"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (name.as_str(), arg) {
            ("start", None) => Some(GameCommand::Start),
            ("reset", None) => Some(GameCommand::Reset),
            ("pause", None) => Some(GameCommand::TogglePause),
            ("view", Some(i)) => i.parse().ok().map(GameCommand::ViewCell),
            ("verify", Some(i)) => i.parse().ok().map(GameCommand::VerifyCell),
            ("custom", None) => Some(GameCommand::ApplyCustomSettings(Settings::custom_defaults())),
            ("main", None) => Some(GameCommand::ExitCustomMode),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::Reset => "reset",
            GameCommand::TogglePause => "pause",
            GameCommand::ViewCell(_) => "view",
            GameCommand::VerifyCell(_) => "verify",
            GameCommand::ApplyCustomSettings(_) => "custom",
            GameCommand::ExitCustomMode => "main",
        }
    }
}

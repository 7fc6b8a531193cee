//! Heads-up state fed by game events.
//!
//! The snapshot says what the board looks like; the HUD remembers the things
//! that only exist as events: the last message, the banner over the board and
//! whether the warning bell should ring.

use crate::core::Presenter;
use crate::types::{FailureReason, Fruit, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Paused,
    LevelComplete(String),
    GameComplete(String),
    Failed(FailureReason),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Paused => "PAUSED",
            Banner::LevelComplete(msg) | Banner::GameComplete(msg) => msg,
            Banner::Failed(_) => "FAILED",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Hud {
    message: Option<(String, Severity)>,
    banner: Option<Banner>,
    bell_pending: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<(&str, Severity)> {
        self.message.as_ref().map(|(t, s)| (t.as_str(), *s))
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Returns true once per warning cue.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

impl Presenter for Hud {
    fn on_message(&mut self, text: &str, severity: Severity) {
        log::debug!("[{}] {}", severity.as_str(), text);
        self.message = Some((text.to_string(), severity));
    }

    fn on_warning_cue(&mut self) {
        self.bell_pending = true;
    }

    fn on_round_start(&mut self) {
        self.banner = None;
    }

    fn on_game_reset(&mut self) {
        self.banner = None;
    }

    fn on_sequence_shown(&mut self, fruits: &[Fruit]) {
        if log::log_enabled!(log::Level::Debug) {
            let glyphs: Vec<&str> = fruits.iter().map(|f| f.glyph()).collect();
            log::debug!("sequence: {}", glyphs.join(" "));
        }
        self.banner = None;
    }

    fn on_pause_changed(&mut self, paused: bool) {
        if paused {
            self.banner = Some(Banner::Paused);
        } else if self.banner == Some(Banner::Paused) {
            self.banner = None;
        }
    }

    fn on_round_failed(&mut self, reason: FailureReason) {
        self.banner = Some(Banner::Failed(reason));
    }

    fn on_level_complete(&mut self, message: &str) {
        self.banner = Some(Banner::LevelComplete(message.to_string()));
    }

    fn on_game_complete(&mut self, message: &str) {
        self.banner = Some(Banner::GameComplete(message.to_string()));
    }
}

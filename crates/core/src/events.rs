//! Lifecycle events consumed by the presentation layer.
//!
//! The controller never touches the screen. Every visible decision is queued
//! as a [`GameEvent`]; front ends drain the queue after each command or tick
//! and forward it to a [`Presenter`].

use crate::types::{CellView, FailureReason, Fruit, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CellStateChanged { index: usize, state: CellView },
    Message { text: String, severity: Severity },
    LevelChanged { level: u32, target_count: usize },
    CountdownTick { seconds: u32, warning: bool },
    /// Audible cue, fired once when the countdown reaches the warning mark.
    WarningCue,
    RoundStart,
    /// Back to idle with a fresh board; nothing from the previous round applies.
    GameReset,
    SequenceShown { fruits: Vec<Fruit> },
    SequenceTick { seconds: u32 },
    SequenceHidden,
    PauseChanged { paused: bool },
    VerificationTimedOut,
    RoundFailed { reason: FailureReason },
    LevelComplete { message: String },
    GameComplete { message: String },
}

/// Presentation adapter seam.
///
/// Every method has an empty default, so adapters only implement what they
/// display.
pub trait Presenter {
    fn on_cell_state_changed(&mut self, _index: usize, _state: CellView) {}
    fn on_message(&mut self, _text: &str, _severity: Severity) {}
    fn on_level_changed(&mut self, _level: u32, _target_count: usize) {}
    fn on_countdown_tick(&mut self, _seconds: u32, _warning: bool) {}
    fn on_warning_cue(&mut self) {}
    fn on_round_start(&mut self) {}
    fn on_game_reset(&mut self) {}
    fn on_sequence_shown(&mut self, _fruits: &[Fruit]) {}
    fn on_sequence_tick(&mut self, _seconds: u32) {}
    fn on_sequence_hidden(&mut self) {}
    fn on_pause_changed(&mut self, _paused: bool) {}
    fn on_verification_timed_out(&mut self) {}
    fn on_round_failed(&mut self, _reason: FailureReason) {}
    fn on_level_complete(&mut self, _message: &str) {}
    fn on_game_complete(&mut self, _message: &str) {}

    /// Route one event to its handler.
    fn present(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CellStateChanged { index, state } => {
                self.on_cell_state_changed(*index, *state)
            }
            GameEvent::Message { text, severity } => self.on_message(text, *severity),
            GameEvent::LevelChanged {
                level,
                target_count,
            } => self.on_level_changed(*level, *target_count),
            GameEvent::CountdownTick { seconds, warning } => {
                self.on_countdown_tick(*seconds, *warning)
            }
            GameEvent::WarningCue => self.on_warning_cue(),
            GameEvent::RoundStart => self.on_round_start(),
            GameEvent::GameReset => self.on_game_reset(),
            GameEvent::SequenceShown { fruits } => self.on_sequence_shown(fruits),
            GameEvent::SequenceTick { seconds } => self.on_sequence_tick(*seconds),
            GameEvent::SequenceHidden => self.on_sequence_hidden(),
            GameEvent::PauseChanged { paused } => self.on_pause_changed(*paused),
            GameEvent::VerificationTimedOut => self.on_verification_timed_out(),
            GameEvent::RoundFailed { reason } => self.on_round_failed(*reason),
            GameEvent::LevelComplete { message } => self.on_level_complete(message),
            GameEvent::GameComplete { message } => self.on_game_complete(message),
        }
    }
}

/// Forward a batch of events to a presenter, in order.
pub fn dispatch<P: Presenter + ?Sized>(presenter: &mut P, events: &[GameEvent]) {
    for event in events {
        presenter.present(event);
    }
}

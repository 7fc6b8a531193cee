//! Game state module - the round controller
//!
//! This module ties together the board, randomizer, settings, timers and the
//! per-level [`RoundState`]. It owns the two state machines of the game:
//!
//! - **Interaction protocol**: `view_cell` reveals a cell for a limited time,
//!   `verify_cell` confirms revealed cells pairwise against the current
//!   target.
//! - **Round lifecycle**: `Idle -> SequenceDisplay -> Playing ->
//!   {LevelComplete | Failed} -> (SequenceDisplay | GameComplete | Idle)`.
//!
//! Time only moves through [`GameState::tick`]. Every decision the
//! presentation layer needs is queued as a [`GameEvent`].

use crate::board::Board;
use crate::command::GameCommand;
use crate::error::{CommandError, GameError, InteractionRejection, SettingsError};
use crate::events::GameEvent;
use crate::rng::Randomizer;
use crate::round::RoundState;
use crate::settings::Settings;
use crate::snapshot::RoundSnapshot;
use crate::timers::{TimerKind, Timers};
use crate::types::*;

/// Result of an accepted `verify_cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// First cell of a pair selected; the verification window is running.
    AwaitingPair,
    /// Pair confirmed; more targets remain in this level.
    Matched,
    /// Pair confirmed and the level is done; the next one follows after a delay.
    LevelComplete,
    /// Pair confirmed on the last level.
    GameComplete,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    custom_mode: bool,
    randomizer: Randomizer,
    board: Board,
    /// Target sequences of every level, generated at round start.
    all_sequences: Vec<Vec<Fruit>>,
    round: RoundState,
    phase: Phase,
    /// Bumped whenever per-cell state is reset; stale timers are discarded.
    generation: u32,
    timers: Timers,
    sequence_secs_left: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a main-game state with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let settings = Settings::default();
        let mut randomizer = Randomizer::new(seed);
        let board = randomizer.generate_board(settings.board_size, &Fruit::ALL);
        let all_sequences = randomizer.generate_all_sequences(&board.fruits());

        let mut round = RoundState::new(settings.level_time_secs(1));
        round.target_sequence = all_sequences.first().cloned().unwrap_or_default();

        Self {
            settings,
            custom_mode: false,
            randomizer,
            board,
            all_sequences,
            round,
            phase: Phase::Idle,
            generation: 0,
            timers: Timers::new(),
            sequence_secs_left: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.round.level
    }

    pub fn countdown(&self) -> u32 {
        self.round.countdown
    }

    pub fn errors(&self) -> u32 {
        self.round.errors
    }

    pub fn is_playing(&self) -> bool {
        self.round.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.round.is_paused
    }

    pub fn is_sequence_visible(&self) -> bool {
        self.phase == Phase::SequenceDisplay
    }

    /// Countdown warning state (last seconds of a level).
    pub fn warning(&self) -> bool {
        self.phase == Phase::Playing && self.round.countdown <= COUNTDOWN_WARNING_SECS
    }

    pub fn custom_mode(&self) -> bool {
        self.custom_mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn target_sequence(&self) -> &[Fruit] {
        &self.round.target_sequence
    }

    pub fn all_sequences(&self) -> &[Vec<Fruit>] {
        &self.all_sequences
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    /// Internal clock (milliseconds of ticks received).
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Seconds left while the target sequence is shown.
    pub fn sequence_secs_left(&self) -> u32 {
        self.sequence_secs_left
    }

    /// What a cell currently shows.
    pub fn cell_view(&self, index: usize) -> CellView {
        let Some(fruit) = self.board.get(index) else {
            return CellView::Hidden;
        };
        if self.round.is_matched(index) {
            CellView::Matched(fruit)
        } else if self.round.is_active(index) {
            CellView::Revealed(fruit)
        } else {
            CellView::Hidden
        }
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.phase = self.phase;
        out.level = self.round.level;
        out.target_count = self.round.target_sequence.len();
        out.found = self.round.current_target_index;
        out.countdown = self.round.countdown;
        out.warning = self.warning();
        out.paused = self.round.is_paused;
        out.custom_mode = self.custom_mode;
        out.errors = self.round.errors;
        out.generation = self.generation;
        out.seed = self.randomizer.seed();
        out.board_size = self.board.size();
        out.sequence_secs_left = self.sequence_secs_left;

        out.cells.clear();
        out.cells.extend((0..self.board.len()).map(|i| self.cell_view(i)));

        out.selected.clear();
        out.selected.extend(self.round.selected.iter().copied());

        out.sequence.clear();
        let visible = if self.is_sequence_visible() {
            &self.round.target_sequence[..]
        } else {
            &self.round.target_sequence[..self.round.current_target_index]
        };
        out.sequence.extend_from_slice(visible);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ============== Commands ==============

    /// Start a new game, or resume a paused one.
    ///
    /// Has no effect while a game is already running.
    pub fn start(&mut self) {
        if self.round.is_paused {
            self.resume();
            return;
        }
        if self.round.is_playing {
            return;
        }
        self.begin_new_game();
    }

    /// Reset the game.
    ///
    /// In custom mode this restarts the custom game right away; otherwise the
    /// game returns to idle with a fresh board.
    pub fn reset(&mut self) {
        if self.custom_mode {
            self.begin_new_game();
            return;
        }
        self.reset_to_idle();
        self.message("Game reset", Severity::Info);
    }

    /// Pause or resume the countdown. Only valid while playing.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        if self.round.is_paused {
            self.resume();
        } else {
            self.round.is_paused = true;
            self.timers.cancel(TimerKind::CountdownTick);
            self.push(GameEvent::PauseChanged { paused: true });
            self.message("Game paused", Severity::Info);
        }
        true
    }

    /// Reveal a cell for the configured reveal time.
    ///
    /// Viewing a cell that is already revealed restarts its timer.
    pub fn view_cell(&mut self, index: usize) -> Result<(), GameError> {
        self.check_interaction(index)?;
        if self.round.is_matched(index) {
            return Err(reject(index, InteractionRejection::AlreadyMatched));
        }
        let Some(fruit) = self.board.get(index) else {
            return Err(reject(index, InteractionRejection::OutOfRange));
        };

        self.round.active_cells.insert(index);
        self.timers.schedule(
            TimerKind::Reveal(index),
            self.settings.cell_reveal_ms,
            self.generation,
        );
        self.push(GameEvent::CellStateChanged {
            index,
            state: CellView::Revealed(fruit),
        });
        Ok(())
    }

    /// Select a revealed cell as part of the current target pair.
    pub fn verify_cell(&mut self, index: usize) -> Result<VerifyOutcome, GameError> {
        self.check_interaction(index)?;
        if self.round.is_matched(index) {
            return Err(reject(index, InteractionRejection::AlreadyMatched));
        }
        if self.round.is_selected(index) {
            return Err(reject(index, InteractionRejection::AlreadySelected));
        }
        if !self.round.is_active(index) {
            return Err(self.fail_round(FailureReason::CellNotRevealed));
        }
        if self.board.get(index) != self.round.current_target() {
            return Err(self.fail_round(FailureReason::WrongSymbol));
        }

        self.round.selected.push(index);
        if self.round.selected.len() == 1 {
            self.timers.schedule(
                TimerKind::VerificationWindow,
                VERIFICATION_WINDOW_MS,
                self.generation,
            );
            return Ok(VerifyOutcome::AwaitingPair);
        }

        self.timers.cancel(TimerKind::VerificationWindow);
        self.process_pair()
    }

    /// Validate and apply a custom profile, then start a custom game.
    ///
    /// Invalid settings are rejected and leave the game untouched.
    pub fn apply_custom_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        if let Err(e) = settings.validate() {
            log::warn!("rejected custom settings: {e}");
            return Err(e);
        }
        self.settings = settings;
        self.custom_mode = true;
        log::info!(
            "custom mode: {0}x{0} board, failure behavior {1}",
            self.settings.board_size,
            self.settings.failure_behavior.as_str()
        );
        self.begin_new_game();
        Ok(())
    }

    /// Leave custom mode and return to an idle main game.
    pub fn exit_custom_mode(&mut self) {
        self.custom_mode = false;
        self.settings = Settings::default();
        self.reset_to_idle();
        self.message("Back to the main game", Severity::Info);
    }

    /// Apply a front-end command.
    pub fn apply_command(&mut self, command: GameCommand) -> Result<(), CommandError> {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Reset => self.reset(),
            GameCommand::TogglePause => {
                self.toggle_pause();
            }
            GameCommand::ViewCell(index) => self.view_cell(index)?,
            GameCommand::VerifyCell(index) => {
                self.verify_cell(index)?;
            }
            GameCommand::ApplyCustomSettings(settings) => self.apply_custom_settings(settings)?,
            GameCommand::ExitCustomMode => self.exit_custom_mode(),
        }
        Ok(())
    }

    /// Advance the clock by `elapsed_ms`, firing every timer that falls due.
    ///
    /// Timers fire in deadline order with the clock set to their deadline, so
    /// one large step behaves like many small ones. Returns true if any timer
    /// fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let until = self.timers.now_ms() + elapsed_ms as u64;
        let mut fired = false;

        while let Some(timer) = self.timers.pop_due(until) {
            if timer.generation != self.generation {
                log::debug!(
                    "discarding stale {:?} timer (generation {} != {})",
                    timer.kind,
                    timer.generation,
                    self.generation
                );
                continue;
            }
            fired = true;
            self.on_timer(timer.kind);
        }

        self.timers.advance_to(until);
        fired
    }

    // ============== Lifecycle ==============

    /// Full reset: level 1, new board, new sequences, then show the sequence.
    fn begin_new_game(&mut self) {
        self.regenerate();
        self.round.is_playing = true;
        log::info!(
            "new game (seed {}, generation {}, custom {})",
            self.randomizer.seed(),
            self.generation,
            self.custom_mode
        );
        self.push(GameEvent::RoundStart);
        self.announce_level();
        self.enter_sequence_display();
    }

    fn reset_to_idle(&mut self) {
        self.regenerate();
        self.phase = Phase::Idle;
        self.sequence_secs_left = 0;
        self.push(GameEvent::GameReset);
        self.announce_level();
        self.push(GameEvent::CountdownTick {
            seconds: self.round.countdown,
            warning: false,
        });
    }

    /// New board and sequences, round state back to level 1.
    fn regenerate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.timers.clear();

        self.board = self
            .randomizer
            .generate_board(self.settings.board_size, &Fruit::ALL);
        self.all_sequences = self.randomizer.generate_all_sequences(&self.board.fruits());

        let sequence = self.all_sequences.first().cloned().unwrap_or_default();
        let was_paused = self.round.is_paused;
        self.round
            .reset_full(self.settings.level_time_secs(1), sequence);
        if was_paused {
            self.push(GameEvent::PauseChanged { paused: false });
        }
        self.hide_all_cells();
    }

    /// Reset per-level state for the current level, keeping the board.
    fn reload_level(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.timers.clear();

        let level = self.round.level;
        let sequence = self.level_sequence(level);
        self.round
            .reset_level(self.settings.level_time_secs(level), sequence);
        self.round.is_playing = true;
        self.hide_all_cells();
        self.announce_level();
        self.enter_sequence_display();
    }

    /// Pre-generated sequence of a level, or a fresh draw past the table.
    fn level_sequence(&mut self, level: u32) -> Vec<Fruit> {
        let idx = (level as usize).saturating_sub(1);
        match self.all_sequences.get(idx) {
            Some(seq) => seq.clone(),
            None => {
                let fruits = self.board.fruits();
                self.randomizer.generate_target_sequence(level, &fruits)
            }
        }
    }

    fn enter_sequence_display(&mut self) {
        self.phase = Phase::SequenceDisplay;
        self.sequence_secs_left = self.settings.sequence_display_secs;
        self.push(GameEvent::SequenceShown {
            fruits: self.round.target_sequence.clone(),
        });
        self.push(GameEvent::SequenceTick {
            seconds: self.sequence_secs_left,
        });
        self.message("Memorize the target sequence!", Severity::Info);
        self.timers
            .schedule(TimerKind::SequenceTick, COUNTDOWN_TICK_MS, self.generation);
    }

    fn start_gameplay(&mut self) {
        self.phase = Phase::Playing;
        self.push(GameEvent::SequenceHidden);
        self.message("Find the fruits!", Severity::Info);
        self.start_countdown();
    }

    fn start_countdown(&mut self) {
        if self.round.countdown == 0 {
            self.round.countdown = self.settings.level_time_secs(self.round.level);
        }
        self.push(GameEvent::CountdownTick {
            seconds: self.round.countdown,
            warning: self.round.countdown <= COUNTDOWN_WARNING_SECS,
        });
        self.timers
            .schedule(TimerKind::CountdownTick, COUNTDOWN_TICK_MS, self.generation);
    }

    fn resume(&mut self) {
        self.round.is_paused = false;
        self.push(GameEvent::PauseChanged { paused: false });
        self.start_countdown();
        self.message("Game resumed", Severity::Info);
    }

    fn process_pair(&mut self) -> Result<VerifyOutcome, GameError> {
        let (first, second) = (self.round.selected[0], self.round.selected[1]);

        if self.board.get(first) != self.board.get(second) {
            return Err(self.fail_round(FailureReason::MismatchedPair));
        }

        self.round.record_match(first, second);
        for index in [first, second] {
            self.timers.cancel(TimerKind::Reveal(index));
            self.push(GameEvent::CellStateChanged {
                index,
                state: self.cell_view(index),
            });
        }
        self.message("Match!", Severity::Success);

        if self.round.is_sequence_complete() {
            return Ok(self.complete_level());
        }
        Ok(VerifyOutcome::Matched)
    }

    fn complete_level(&mut self) -> VerifyOutcome {
        self.timers.clear();
        let level = self.round.level;

        if level as usize >= LEVEL_COUNT {
            self.phase = Phase::GameComplete;
            self.round.is_playing = false;
            // Reveal timers are gone; nothing would hide these cells.
            self.hide_active_cells();
            log::info!("game complete with {} errors", self.round.errors);
            self.push(GameEvent::GameComplete {
                message: "Game complete!".to_string(),
            });
            return VerifyOutcome::GameComplete;
        }

        self.phase = Phase::LevelComplete;
        log::info!("level {level} complete");
        self.push(GameEvent::LevelComplete {
            message: format!("Level {level} complete!"),
        });
        self.timers
            .schedule(TimerKind::PhaseDelay, LEVEL_CELEBRATION_MS, self.generation);
        VerifyOutcome::LevelComplete
    }

    fn fail_round(&mut self, reason: FailureReason) -> GameError {
        self.timers.clear();
        self.round.selected.clear();
        self.round.errors += 1;
        self.phase = Phase::Failed;

        log::info!(
            "level {} failed: {} (errors: {})",
            self.round.level,
            reason.as_str(),
            self.round.errors
        );
        self.push(GameEvent::RoundFailed { reason });
        let text = match self.settings.failure_behavior {
            FailureBehavior::CurrentLevel => "Wrong! Restarting the current level",
            FailureBehavior::RestartFromStart => "Failed! Restarting from level 1",
        };
        self.message(text, Severity::Error);
        self.timers.schedule(
            TimerKind::PhaseDelay,
            FAILURE_RESTART_DELAY_MS,
            self.generation,
        );
        GameError::RoundFailure(reason)
    }

    // ============== Timers ==============

    fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Reveal(index) => self.hide_cell(index),
            TimerKind::VerificationWindow => self.verification_timed_out(),
            TimerKind::SequenceTick => self.sequence_tick(),
            TimerKind::CountdownTick => self.countdown_tick(),
            TimerKind::PhaseDelay => self.phase_delay_elapsed(),
        }
    }

    fn hide_cell(&mut self, index: usize) {
        if self.round.is_matched(index) || !self.round.active_cells.remove(&index) {
            return;
        }
        self.push(GameEvent::CellStateChanged {
            index,
            state: CellView::Hidden,
        });
    }

    fn verification_timed_out(&mut self) {
        if self.phase != Phase::Playing || self.round.selected.is_empty() {
            return;
        }
        self.round.selected.clear();
        if self.settings.count_verification_timeouts {
            self.round.errors += 1;
        }
        self.push(GameEvent::VerificationTimedOut);
        self.message(
            "Verification timed out, select the pair again",
            Severity::Error,
        );
    }

    fn sequence_tick(&mut self) {
        if self.phase != Phase::SequenceDisplay {
            return;
        }
        self.sequence_secs_left = self.sequence_secs_left.saturating_sub(1);
        if self.sequence_secs_left == 0 {
            self.start_gameplay();
            return;
        }
        self.push(GameEvent::SequenceTick {
            seconds: self.sequence_secs_left,
        });
        self.timers
            .schedule(TimerKind::SequenceTick, COUNTDOWN_TICK_MS, self.generation);
    }

    fn countdown_tick(&mut self) {
        if self.phase != Phase::Playing || self.round.is_paused {
            return;
        }
        self.round.countdown = self.round.countdown.saturating_sub(1);
        let seconds = self.round.countdown;
        self.push(GameEvent::CountdownTick {
            seconds,
            warning: seconds <= COUNTDOWN_WARNING_SECS,
        });
        if seconds == COUNTDOWN_WARNING_SECS {
            self.push(GameEvent::WarningCue);
        }

        if seconds == 0 {
            self.fail_round(FailureReason::CountdownExpired);
        } else {
            self.timers
                .schedule(TimerKind::CountdownTick, COUNTDOWN_TICK_MS, self.generation);
        }
    }

    fn phase_delay_elapsed(&mut self) {
        match self.phase {
            Phase::LevelComplete => {
                self.round.level += 1;
                log::info!("advancing to level {}", self.round.level);
                self.reload_level();
            }
            Phase::Failed => match self.settings.failure_behavior {
                FailureBehavior::CurrentLevel => self.reload_level(),
                FailureBehavior::RestartFromStart => self.begin_new_game(),
            },
            _ => {}
        }
    }

    // ============== Helpers ==============

    fn check_interaction(&self, index: usize) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(reject(index, InteractionRejection::NotPlaying));
        }
        if self.round.is_paused {
            return Err(reject(index, InteractionRejection::Paused));
        }
        if index >= self.board.len() {
            return Err(reject(index, InteractionRejection::OutOfRange));
        }
        Ok(())
    }

    fn hide_all_cells(&mut self) {
        for index in 0..self.board.len() {
            self.push(GameEvent::CellStateChanged {
                index,
                state: CellView::Hidden,
            });
        }
    }

    fn hide_active_cells(&mut self) {
        for index in std::mem::take(&mut self.round.active_cells) {
            self.push(GameEvent::CellStateChanged {
                index,
                state: CellView::Hidden,
            });
        }
    }

    fn announce_level(&mut self) {
        self.push(GameEvent::LevelChanged {
            level: self.round.level,
            target_count: self.round.target_sequence.len(),
        });
    }

    fn message(&mut self, text: &str, severity: Severity) {
        self.push(GameEvent::Message {
            text: text.to_string(),
            severity,
        });
    }

    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

fn reject(cell: usize, reason: InteractionRejection) -> GameError {
    GameError::InvalidInteraction { cell, reason }
}

//! Timer queue - one-shot timers driven by an explicit clock
//!
//! The game never sleeps or spawns threads. The host advances time through
//! [`crate::GameState::tick`], which pops due timers from this queue in
//! deadline order.
//!
//! Two rules keep callbacks from acting on a state they were not scheduled
//! for:
//!
//! - **One per kind**: scheduling a timer whose [`TimerKind`] is already
//!   pending replaces it (a new countdown tick cancels the old one, viewing a
//!   cell again restarts its reveal timer).
//! - **Generation tag**: every timer carries the round generation it was
//!   scheduled in. The controller bumps the generation whenever per-cell
//!   state is reset and drops timers whose tag no longer matches.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hide a revealed cell.
    Reveal(usize),
    /// First pair selection expires.
    VerificationWindow,
    /// Per-second tick while the target sequence is shown.
    SequenceTick,
    /// One countdown second elapsed.
    CountdownTick,
    /// Leave LevelComplete / Failed.
    PhaseDelay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub deadline_ms: u64,
    pub generation: u32,
    /// Scheduling order, breaks ties between equal deadlines.
    order: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    now_ms: u64,
    next_order: u64,
    pending: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `kind` to fire `delay_ms` from now, replacing any pending
    /// timer of the same kind.
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u32, generation: u32) {
        self.cancel(kind);
        let order = self.next_order;
        self.next_order += 1;
        self.pending.push(Timer {
            kind,
            deadline_ms: self.now_ms + delay_ms as u64,
            generation,
            order,
        });
    }

    /// Cancel a pending timer. Returns true if one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        self.pending.len() != before
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Milliseconds until `kind` fires, if pending.
    pub fn remaining_ms(&self, kind: TimerKind) -> Option<u64> {
        self.pending
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.deadline_ms.saturating_sub(self.now_ms))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock
    /// to its deadline.
    ///
    /// Callers loop on this and then call [`Timers::advance_to`] so timers
    /// scheduled by a handler are still considered within the same step.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Timer> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline_ms <= until_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.order))?;

        let timer = self.pending.swap_remove(idx);
        self.now_ms = self.now_ms.max(timer.deadline_ms);
        Some(timer)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_in_deadline_order() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::CountdownTick, 1000, 0);
        timers.schedule(TimerKind::Reveal(3), 500, 0);
        timers.schedule(TimerKind::VerificationWindow, 1000, 0);

        let first = timers.pop_due(2000).unwrap();
        assert_eq!(first.kind, TimerKind::Reveal(3));
        assert_eq!(timers.now_ms(), 500);

        // Equal deadlines fire in scheduling order.
        assert_eq!(timers.pop_due(2000).unwrap().kind, TimerKind::CountdownTick);
        assert_eq!(
            timers.pop_due(2000).unwrap().kind,
            TimerKind::VerificationWindow
        );
        assert!(timers.pop_due(2000).is_none());
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::PhaseDelay, 2000, 0);
        assert!(timers.pop_due(1999).is_none());
        timers.advance_to(1999);
        assert_eq!(timers.remaining_ms(TimerKind::PhaseDelay), Some(1));
        assert!(timers.pop_due(2000).is_some());
    }

    #[test]
    fn test_schedule_replaces_same_kind() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::CountdownTick, 1000, 0);
        timers.schedule(TimerKind::CountdownTick, 1000, 1);
        assert_eq!(timers.len(), 1);

        let t = timers.pop_due(1000).unwrap();
        assert_eq!(t.generation, 1);
    }

    #[test]
    fn test_reveal_timers_are_per_cell() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::Reveal(0), 100, 0);
        timers.schedule(TimerKind::Reveal(1), 100, 0);
        assert_eq!(timers.len(), 2);
        assert!(timers.cancel(TimerKind::Reveal(0)));
        assert!(!timers.cancel(TimerKind::Reveal(0)));
        assert!(timers.is_pending(TimerKind::Reveal(1)));
    }

    #[test]
    fn test_schedule_is_relative_to_clock() {
        let mut timers = Timers::new();
        timers.advance_to(5000);
        timers.schedule(TimerKind::VerificationWindow, 1000, 0);
        assert!(timers.pop_due(5999).is_none());
        assert_eq!(timers.pop_due(6000).unwrap().deadline_ms, 6000);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut timers = Timers::new();
        timers.advance_to(100);
        timers.advance_to(50);
        assert_eq!(timers.now_ms(), 100);
    }
}

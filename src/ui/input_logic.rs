//! Timestamp debouncing, one gate per polling context.
//!
//! Start/restart detection and answer detection each own a gate, so
//! an acceptance in one context never delays the other.  A gate that
//! has not accepted anything yet lets the first press straight through.
//!
//! The start/restart gate is also latched: after it accepts, the lines
//! must be seen released before it accepts again.  The button that
//! answers the last question is usually still down when the result
//! appears, and must not count as the restart press.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::quiz::Phase;

/// Minimum-interval gate between two accepted presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u64,
    last_accept_ms: Option<u64>,
    needs_release: bool,
    armed: bool,
}

impl Debouncer {
    /// Pure time gate.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accept_ms: None,
            needs_release: false,
            armed: true,
        }
    }

    /// Time gate that also waits for a release after each acceptance.
    pub const fn latched(window_ms: u64) -> Self {
        Self {
            needs_release: true,
            ..Self::new(window_ms)
        }
    }

    /// True once strictly more than the window has passed since the
    /// last acceptance (and, if latched, the lines were released since).
    pub fn ready(&self, now_ms: u64) -> bool {
        if self.needs_release && !self.armed {
            return false;
        }
        match self.last_accept_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.window_ms,
        }
    }

    /// Accept a press at `now_ms` if the gate is open, restarting the window.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if !self.ready(now_ms) {
            return false;
        }
        self.last_accept_ms = Some(now_ms);
        self.armed = false;
        true
    }

    /// All lines were sampled released.
    pub fn release(&mut self) {
        self.armed = true;
    }
}

/// Which polling site a press belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Any press on the welcome or result screen.
    StartRestart,
    /// A press that answers the current question.
    Answer,
}

impl Gesture {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Running => Gesture::Answer,
            Phase::Idle | Phase::Completed => Gesture::StartRestart,
        }
    }

    /// Start and restart presses are followed by a fixed settle delay.
    pub fn settles(self) -> bool {
        matches!(self, Gesture::StartRestart)
    }
}

/// The two debounce gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputGates {
    start: Debouncer,
    answer: Debouncer,
}

impl Default for InputGates {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGates {
    pub const fn new() -> Self {
        Self {
            start: Debouncer::latched(BUTTON_DEBOUNCE_MS),
            answer: Debouncer::new(BUTTON_DEBOUNCE_MS),
        }
    }

    pub fn gate(&mut self, gesture: Gesture) -> &mut Debouncer {
        match gesture {
            Gesture::StartRestart => &mut self.start,
            Gesture::Answer => &mut self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_accepted_immediately() {
        let mut gate = Debouncer::new(300);
        assert!(gate.ready(0));
        assert!(gate.accept(0));
        assert_eq!(gate.last_accept_ms, Some(0));

        let mut latched = Debouncer::latched(300);
        assert!(latched.accept(0));
    }

    #[test]
    fn press_inside_window_is_ignored() {
        let mut gate = Debouncer::new(300);
        assert!(gate.accept(1_000));
        assert!(!gate.accept(1_001));
        assert!(!gate.accept(1_300));
        // Rejections do not move the window.
        assert_eq!(gate.last_accept_ms, Some(1_000));
    }

    #[test]
    fn press_after_window_is_honored() {
        let mut gate = Debouncer::new(300);
        assert!(gate.accept(1_000));
        assert!(gate.accept(1_301));
        assert!(!gate.accept(1_500));
        assert!(gate.accept(1_602));
    }

    #[test]
    fn latched_gate_needs_release_and_window() {
        let mut gate = Debouncer::latched(300);
        assert!(gate.accept(1_000));
        // Still held long after the window.
        assert!(!gate.accept(5_000));
        gate.release();
        assert!(gate.accept(5_001));

        // Released but inside the window.
        gate.release();
        assert!(!gate.accept(5_100));
        assert!(gate.accept(5_302));
    }

    #[test]
    fn clock_going_backwards_keeps_gate_closed() {
        let mut gate = Debouncer::new(300);
        assert!(gate.accept(5_000));
        assert!(!gate.accept(10));
    }

    #[test]
    fn contexts_do_not_share_a_window() {
        let mut gates = InputGates::new();
        assert!(gates.gate(Gesture::StartRestart).accept(100));
        assert!(gates.gate(Gesture::Answer).accept(101));
        assert!(!gates.gate(Gesture::Answer).accept(200));
        gates.gate(Gesture::StartRestart).release();
        assert!(!gates.gate(Gesture::StartRestart).accept(200));
        assert!(gates.gate(Gesture::StartRestart).accept(401));
    }

    #[test]
    fn gesture_follows_phase() {
        assert_eq!(Gesture::for_phase(Phase::Idle), Gesture::StartRestart);
        assert_eq!(Gesture::for_phase(Phase::Running), Gesture::Answer);
        assert_eq!(Gesture::for_phase(Phase::Completed), Gesture::StartRestart);
        assert!(Gesture::StartRestart.settles());
        assert!(!Gesture::Answer.settles());
    }
}

//! GPIO button sampling with per-context debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - A / B / C / D - answer the matching option; any of them starts
//!     or restarts the quiz
//!
//! Lines are read through `embedded_hal::digital::InputPin`, so the
//! same poller runs on the nRF52840 and against fake pins in tests.

use crate::config::OPTION_COUNT;
use crate::quiz::Choice;
use crate::ui::input_logic::Debouncer;
use crate::ui::PollEvent;
use embedded_hal::digital::InputPin;

/// The four button lines, in priority order A, B, C, D.
pub struct ButtonPoller<P> {
    pins: [P; OPTION_COUNT],
}

impl<P: InputPin> ButtonPoller<P> {
    pub fn new(pins: [P; OPTION_COUNT]) -> Self {
        Self { pins }
    }

    /// First line found low, A before B before C before D.
    ///
    /// A line that fails to read counts as released.
    pub fn sample(&mut self) -> Option<Choice> {
        for (choice, pin) in Choice::ALL.into_iter().zip(self.pins.iter_mut()) {
            if pin.is_low().unwrap_or(false) {
                return Some(choice);
            }
        }
        None
    }

    /// Sample once through `gate`.
    ///
    /// The gate timestamp only moves when a press is reported; an
    /// all-released sample re-arms a latched gate.
    pub fn poll(&mut self, gate: &mut Debouncer, now_ms: u64) -> PollEvent {
        match self.sample() {
            None => {
                gate.release();
                PollEvent::NoPress
            }
            Some(choice) if gate.accept(now_ms) => PollEvent::Pressed(choice),
            Some(_) => PollEvent::NoPress,
        }
    }
}

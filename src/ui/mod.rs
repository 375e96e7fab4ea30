//! User interface subsystem - OLED display + physical buttons.
//!
//! The main loop polls the buttons, feeds accepted presses into the
//! quiz state machine and redraws the screen the machine reports.
//!
//! ## Components
//!
//! - **Buttons**: 4 active-low tactile switches (A..D), sampled in
//!   priority order and debounced per polling context
//! - **Layout**: pure text layout of each screen into a [`layout::Frame`]
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded builds only)

pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod layout;

use crate::quiz::{Category, Choice};

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Title and "press any button" prompt.
    Welcome,
    /// Question with the given zero-based index and its four options.
    Question(usize),
    /// Final house and restart prompt.
    Result(Category),
}

/// Outcome of one poll of the button lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    NoPress,
    Pressed(Choice),
}

//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! geometry live here so they can be tuned in one place.

// Quiz

/// Number of questions in one quiz run.
pub const QUESTION_COUNT: usize = 10;

/// Options per question, one per physical button.
pub const OPTION_COUNT: usize = 4;

// Timing

/// Minimum quiet interval between two accepted presses of the same
/// polling context (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 300;

/// Fixed settle delay taken after an accepted start or restart press (ms).
pub const START_SETTLE_MS: u64 = 300;

/// Sleep between two samples of the button lines (ms).
pub const POLL_INTERVAL_MS: u64 = 5;

// Display

/// SSD1306 I²C device address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Logical display resolution (pixels).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button A  → P0.11
//   Button B  → P0.12
//   Button C  → P0.24
//   Button D  → P0.25
//   I²C SDA   → P0.26
//   I²C SCL   → P0.27
//
// All buttons are active-low with the internal pull-up enabled.

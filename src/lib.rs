//! Library interface for sorting-hat.
//!
//! Everything that does not need the nRF52840 lives here: the question
//! catalog, scoring, the quiz state machine, button sampling over
//! `embedded-hal` traits, debouncing and screen layout.  The SSD1306
//! wrapper (`ui::display`) is only compiled with the `embedded` feature.
//!
//! Usage: `cargo test` (host) or
//! `cargo build --release --features embedded --target thumbv7em-none-eabihf`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is shared by the binary and the host-based tests.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod quiz;
pub mod ui;

pub use error::Error;
pub use quiz::{Category, Choice, Phase, Quiz, Transition};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - the pieces wired the way the firmware loop wires them
// ═══════════════════════════════════════════════════════════════════════════

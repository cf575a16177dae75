//! # Pedalboard Buttons
//!
//! Debounced digital-input event engine for a pedal-board controller: turns
//! raw, electrically noisy level transitions on a small set of momentary
//! footswitches into reliable logical events.
//!
//! ## Modules
//!
//! - [`engine`] - The [`ButtonEngine`]: sampling loop, event classifier and the public query API
//! - [`debounce`] - Per-line settle-window debounce state machine
//! - [`event`] - Button event kinds and the per-line one-shot event flags
//! - [`config`] - Timing configuration (debounce window, long-press threshold, double-click window)
//! - [`interrupt`] - Optional level-change interrupt relay for low-power platforms
//!
//! The engine is driven by calling [`ButtonEngine::update`] from a periodic
//! control loop; consumers poll the one-shot `take_*` accessors between
//! updates. Pins are anything implementing
//! [`embedded_hal::digital::InputPin`], time comes from [`embassy_time`].

#![no_std]

#[cfg(test)]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod debounce;
pub mod engine;
pub mod event;
pub mod interrupt;

pub use config::ButtonConfig;
pub use engine::ButtonEngine;
pub use event::ButtonEvent;
pub use interrupt::InterruptRelay;

/// Fixed upper bound of button lines. The line table is allocated once at
/// construction and never resized; extra pins passed to
/// [`ButtonEngine::new`] are silently discarded.
pub const MAX_BUTTONS: usize = 16;

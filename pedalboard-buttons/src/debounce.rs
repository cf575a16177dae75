//! Per-line debounce state machine.
//!
//! Each line tracks the instantaneous raw level and the accepted stable
//! level separately. Any raw change restarts the settle timer; the stable
//! level follows only once the raw level has held constant for the whole
//! debounce window.

use embassy_time::{Duration, Instant};

/// Outcome of feeding one raw sample into the debouncer.
pub enum DebounceState {
    /// The stable level just changed; this transition feeds the classifier.
    Debounced,
    /// The raw level differs from the stable level but has not yet held long
    /// enough to be accepted.
    InProgress,
    /// Raw and stable levels agree, nothing to do.
    Ignored,
}

/// Debounce state of a single line, on logical (polarity-normalized) levels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Debouncer {
    raw: bool,
    raw_since: Instant,
    stable: bool,
    stable_since: Instant,
}

impl Debouncer {
    /// Seed raw and stable state from the line's current level. The initial
    /// condition is not a transition, so nothing is reported for it.
    pub(crate) fn new(level: bool, now: Instant) -> Self {
        Self {
            raw: level,
            raw_since: now,
            stable: level,
            stable_since: now,
        }
    }

    /// The last sampled raw level. Used to re-evaluate interrupt-capable
    /// lines on ticks where the relay reported no activity.
    pub(crate) fn raw(&self) -> bool {
        self.raw
    }

    /// The accepted, debounced level.
    pub(crate) fn stable(&self) -> bool {
        self.stable
    }

    /// When the stable level last changed.
    pub(crate) fn stable_since(&self) -> Instant {
        self.stable_since
    }

    /// Feed one raw sample. The elapsed-time comparison is inclusive: a level
    /// held for exactly the window is accepted.
    pub(crate) fn sample(&mut self, level: bool, now: Instant, window: Duration) -> DebounceState {
        if level != self.raw {
            // Any bounce restarts the settle timer
            self.raw = level;
            self.raw_since = now;
        }

        if self.raw == self.stable {
            return DebounceState::Ignored;
        }

        if now - self.raw_since >= window {
            self.stable = self.raw;
            self.stable_since = now;
            DebounceState::Debounced
        } else {
            DebounceState::InProgress
        }
    }
}

//! Level-change interrupt relay.
//!
//! A single coalesced pending flag shared between asynchronous signal
//! contexts (ISRs) and the control loop. The ISR side only ever sets the
//! flag; it must not call into the debounce or classifier logic. The control
//! loop performs the read-and-clear at the start of every evaluation.
//!
//! The relay is purely an optimization: an engine without one samples every
//! line every evaluation with identical externally observable behavior.

use core::sync::atomic::{AtomicBool, Ordering};

/// Coalesced "some watched line changed" flag, safe to keep in a `static`
/// and share with interrupt handlers.
///
/// A `notify` ordered before an engine update is visible to that update; one
/// arriving during an update is visible to the next. A signal is never lost,
/// at worst it is delayed by one evaluation period.
pub struct InterruptRelay {
    pending: AtomicBool,
}

impl InterruptRelay {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Record that a watched line changed level. Safe to call from an
    /// interrupt context; does nothing beyond setting the flag.
    pub fn notify(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Read-and-clear the pending flag.
    pub(crate) fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for InterruptRelay {
    fn default() -> Self {
        Self::new()
    }
}

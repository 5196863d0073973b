//! Tick flag shared between a timer and the match loop
//!
//! The timer side only ever raises the flag; the loop side reads and
//! clears it with a single swap.

use portable_atomic::{AtomicBool, Ordering};
use volley_core::traits::TickSource;

/// One-bit tick mailbox
///
/// Ticks raised while one is already pending are merged.
pub struct TickFlag {
    pending: AtomicBool,
}

impl Default for TickFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl TickFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a tick as pending
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Read and clear in one atomic operation
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl TickSource for &TickFlag {
    fn tick_ready(&self) -> bool {
        self.is_pending()
    }

    fn clear_tick(&mut self) {
        self.pending.store(false, Ordering::Release);
    }

    fn take_tick(&mut self) -> bool {
        self.take()
    }
}

//! Player occupancy counter.
//!
//! Connect and disconnect notifications may arrive off the host's main
//! update thread, so every mutation serializes through one mutex. The
//! count is clamped at zero: a double disconnect, or a disconnect racing
//! ahead of its connect, must not drive it negative.

use std::sync::{Mutex, PoisonError};

/// Thread-safe counter of currently connected human participants.
///
/// Incremented and decremented as connect/disconnect events arrive, and
/// overwritten with an authoritative recount on every environment start.
#[derive(Debug, Default)]
pub struct PlayerCounter {
    count: Mutex<u32>,
}

impl PlayerCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a connect. Returns the new count.
    pub fn increment(&self) -> u32 {
        let mut count = self.lock();
        *count = count.saturating_add(1);
        *count
    }

    /// Record a disconnect, clamped so the count never goes below zero.
    /// Returns the new count.
    pub fn decrement(&self) -> u32 {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        *count
    }

    /// Overwrite the count with an authoritative recount.
    pub fn reset(&self, n: u32) {
        *self.lock() = n;
    }

    /// Snapshot of the current count.
    pub fn current(&self) -> u32 {
        *self.lock()
    }

    /// True iff no human participants are connected.
    pub fn is_empty(&self) -> bool {
        self.current() == 0
    }

    // A poisoned lock still holds a sane count; recover the guard.
    fn lock(&self) -> std::sync::MutexGuard<'_, u32> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Single-shot idle timer.
//!
//! Wraps one delayed, cancellable action. At most one timeout is ever
//! pending: starting while armed is a no-op so spurious re-triggers cannot
//! extend the delay, and stopping clears the handle before any future
//! expiry can fire.
//!
//! `JoinHandle::abort` alone cannot suppress a task that has already woken
//! from its sleep, so each armed instance carries a generation token.
//! `stop` bumps the generation under the handle lock; a firing that lost
//! the race observes the mismatch and discards itself instead of running
//! the action.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Single-shot cancellable timer enforcing an at-most-one-pending
/// invariant.
///
/// The handle self-clears immediately before the expiry action runs, so a
/// fired (or stopped) timer accepts a new [`start`](IdleTimer::start).
#[derive(Debug, Default)]
pub struct IdleTimer {
    inner: Arc<TimerInner>,
}

#[derive(Debug, Default)]
struct TimerInner {
    handle: Mutex<Option<JoinHandle<()>>>,
    generation: AtomicU64,
}

impl TimerInner {
    fn handle(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IdleTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer: run `on_expire` once after `delay`.
    ///
    /// No-op returning `false` while a timeout is already pending, so a
    /// spurious re-trigger neither resets nor extends the running delay.
    /// Must be called within a tokio runtime.
    pub fn start<F>(&self, delay: Duration, on_expire: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut handle = self.inner.handle();
        if handle.is_some() {
            return false;
        }

        let armed = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);

        *handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Claim this firing under the handle lock. A stop() that got
            // the lock first has bumped the generation and this firing is
            // stale; otherwise clear the handle so the action may re-arm.
            {
                let mut handle = inner.handle();
                if inner
                    .generation
                    .compare_exchange(armed, armed + 1, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    return;
                }
                *handle = None;
            }

            on_expire.await;
        }));

        true
    }

    /// Cancel a pending timeout and clear the handle.
    ///
    /// No-op returning `false` when nothing is pending. When this returns
    /// `true`, the cancelled action will not run afterwards: the
    /// generation bump invalidates even a firing that already woke.
    pub fn stop(&self) -> bool {
        let mut handle = self.inner.handle();
        let Some(task) = handle.take() else {
            return false;
        };
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        task.abort();
        true
    }

    /// Whether a timeout is currently pending.
    pub fn is_pending(&self) -> bool {
        self.inner.handle().is_some()
    }
}

impl Drop for IdleTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

//! # Delayed-task scheduling keyed by identity.
//!
//! The store never sleeps itself. It hands "remove toast X after D" to a
//! [`Scheduler`], which owns the timers and runs the callback on expiry.
//!
//! ## Implementations
//! - [`TokioScheduler`]: real timers on a tokio runtime, cancelled through
//!   `CancellationToken`s.
//! - [`ManualScheduler`]: a fake clock advanced by hand, for tests and for
//!   hosts that drive their own frame loop.
//!
//! ## Rules
//! - At most one pending task per key: `schedule` on a pending key is a
//!   no-op and returns `false` (the new task is dropped unrun).
//! - A key is cleared from the bookkeeping **before** its task runs, so the
//!   task may freely call back into `cancel`/`schedule`.
//! - `cancel` never runs the task.
//! - Implementations must not hold internal locks while running a task.

mod manual;
mod timer;

pub use manual::ManualScheduler;
pub use timer::TokioScheduler;

use std::time::Duration;

/// One-shot callback run when a timer expires.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Schedule/cancel-by-key abstraction over one-shot timers.
pub trait Scheduler<K>: Send + Sync + 'static {
    /// Registers `task` to run once after `delay`.
    ///
    /// Returns `false` (dropping `task`) if `key` already has a pending timer.
    fn schedule(&self, key: K, delay: Duration, task: Task) -> bool;

    /// Clears the pending timer for `key` without running it.
    ///
    /// Returns `true` if a timer was pending.
    fn cancel(&self, key: &K) -> bool;

    /// True if `key` has a pending timer.
    fn is_pending(&self, key: &K) -> bool;

    /// Number of pending timers.
    fn pending(&self) -> usize;
}

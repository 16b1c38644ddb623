//! # Dismissal timers: "closed" → "purged" after a fixed delay.
//!
//! Decouples marking a toast closed from removing it, so renderers have time
//! to play an exit transition. Wraps the injected [`Scheduler`] with the
//! store's fixed delay and the at-most-one-timer-per-id rule.
//!
//! ## Rules
//! - `schedule(id)` is a no-op while a timer for `id` is pending.
//! - `cancel(id)` is used when a toast leaves the list by any other path
//!   (explicit remove, truncation) so no late removal fires.

use std::sync::Arc;
use std::time::Duration;

use crate::scheduler::{Scheduler, Task};
use crate::toasts::ToastId;

pub(crate) struct Dismissals {
    scheduler: Arc<dyn Scheduler<ToastId>>,
    delay: Duration,
}

impl Dismissals {
    pub(crate) fn new(scheduler: Arc<dyn Scheduler<ToastId>>, delay: Duration) -> Self {
        Self { scheduler, delay }
    }

    /// Arms the removal timer for `id` unless one is pending.
    pub(crate) fn schedule(&self, id: ToastId, on_expire: impl FnOnce() + Send + 'static) -> bool {
        if self.scheduler.is_pending(&id) {
            tracing::trace!(id = %id, "removal timer already pending");
            return false;
        }
        let task: Task = Box::new(on_expire);
        let armed = self.scheduler.schedule(id, self.delay, task);
        if armed {
            tracing::debug!(id = %id, delay = ?self.delay, "removal timer armed");
        }
        armed
    }

    /// Clears the pending timer for `id`, if any.
    pub(crate) fn cancel(&self, id: ToastId) -> bool {
        let cancelled = self.scheduler.cancel(&id);
        if cancelled {
            tracing::debug!(id = %id, "removal timer cancelled");
        }
        cancelled
    }

    pub(crate) fn is_pending(&self, id: ToastId) -> bool {
        self.scheduler.is_pending(&id)
    }

    pub(crate) fn pending(&self) -> usize {
        self.scheduler.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_at_most_one_timer_per_id() {
        let clock = Arc::new(ManualScheduler::<ToastId>::new());
        let dismissals = Dismissals::new(clock.clone(), Duration::from_secs(1));
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let h = Arc::clone(&hits);
            dismissals.schedule(ToastId::new(1), move || {
                h.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(dismissals.pending(), 1);

        clock.advance(Duration::from_secs(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!dismissals.is_pending(ToastId::new(1)));
    }

    #[test]
    fn test_cancel_before_expiry() {
        let clock = Arc::new(ManualScheduler::<ToastId>::new());
        let dismissals = Dismissals::new(clock.clone(), Duration::from_secs(1));
        let hits = Arc::new(AtomicUsize::new(0));

        let h = Arc::clone(&hits);
        dismissals.schedule(ToastId::new(1), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert!(dismissals.cancel(ToastId::new(1)));
        assert!(!dismissals.cancel(ToastId::new(1)));

        clock.run_all();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}

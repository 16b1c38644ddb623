//! # TokioScheduler: one cancellable tokio task per key.
//!
//! ## Architecture
//! ```text
//! schedule(key, delay, task)
//!     ├─► timers[key] = { generation, token }        (rejected if key present)
//!     └─► spawn:
//!           select! {
//!             token.cancelled()  ─► exit, task dropped
//!             sleep(delay)       ─► timers[key].generation matches?
//!                                     ├─ yes ─► remove key, run task
//!                                     └─ no  ─► exit (cancelled and rescheduled)
//!           }
//!
//! cancel(key) ─► remove timers[key] ─► token.cancel()
//! ```
//!
//! ## Rules
//! - The generation check closes the window between the sleep completing and
//!   a concurrent `cancel`: a cancelled timer never runs its task, even if a
//!   new timer was scheduled for the same key in between.
//! - Dropping the scheduler cancels every pending timer.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::{Scheduler, Task};
use crate::error::ToasterError;
use crate::sync::lock;

/// Bookkeeping for one pending timer.
struct Timer {
    /// Distinguishes successive timers for the same key.
    generation: u64,
    /// Cancels the spawned sleeper.
    token: CancellationToken,
}

/// Production [`Scheduler`] backed by `tokio::time::sleep`.
pub struct TokioScheduler<K> {
    handle: Handle,
    timers: Arc<Mutex<HashMap<K, Timer>>>,
    generation: AtomicU64,
}

impl<K> TokioScheduler<K>
where
    K: Eq + Hash + Clone + Send + Sync + fmt::Debug + 'static,
{
    /// Creates a scheduler bound to the current tokio runtime.
    ///
    /// Returns [`ToasterError::NoRuntime`] when called outside a runtime.
    pub fn new() -> Result<Self, ToasterError> {
        Handle::try_current()
            .map(Self::with_handle)
            .map_err(|_| ToasterError::NoRuntime)
    }

    /// Creates a scheduler spawning its timers on `handle`.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            timers: Arc::new(Mutex::new(HashMap::new())),
            generation: AtomicU64::new(0),
        }
    }
}

impl<K> Scheduler<K> for TokioScheduler<K>
where
    K: Eq + Hash + Clone + Send + Sync + fmt::Debug + 'static,
{
    fn schedule(&self, key: K, delay: Duration, task: Task) -> bool {
        let token = CancellationToken::new();
        let generation = self.generation.fetch_add(1, AtomicOrdering::Relaxed);

        {
            let mut timers = lock(&self.timers);
            if timers.contains_key(&key) {
                return false;
            }
            timers.insert(
                key.clone(),
                Timer {
                    generation,
                    token: token.clone(),
                },
            );
        }

        let timers = Arc::clone(&self.timers);
        self.handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let due = {
                        let mut map = lock(&timers);
                        match map.get(&key) {
                            Some(timer) if timer.generation == generation => {
                                map.remove(&key);
                                true
                            }
                            _ => false,
                        }
                    };
                    if due {
                        tracing::trace!(key = ?key, "timer fired");
                        task();
                    }
                }
            }
        });
        true
    }

    fn cancel(&self, key: &K) -> bool {
        match lock(&self.timers).remove(key) {
            Some(timer) => {
                timer.token.cancel();
                true
            }
            None => false,
        }
    }

    fn is_pending(&self, key: &K) -> bool {
        lock(&self.timers).contains_key(key)
    }

    fn pending(&self) -> usize {
        lock(&self.timers).len()
    }
}

impl<K> Drop for TokioScheduler<K> {
    fn drop(&mut self) {
        let mut timers = lock(&self.timers);
        for (_, timer) in timers.drain() {
            timer.token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Task) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let make = move || -> Task {
            let h = Arc::clone(&h);
            Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            })
        };
        (hits, make)
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let res = TokioScheduler::<u32>::new();
        assert!(matches!(res, Err(ToasterError::NoRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay_not_before() {
        let sched = TokioScheduler::<u32>::new().unwrap();
        let (hits, task) = counter();

        assert!(sched.schedule(1u32, Duration::from_millis(100), task()));
        assert!(sched.is_pending(&1));

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(sched.is_pending(&1));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!sched.is_pending(&1));
        assert_eq!(sched.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_schedule_for_same_key_is_noop() {
        let sched = TokioScheduler::<u32>::new().unwrap();
        let (hits, task) = counter();

        assert!(sched.schedule(7u32, Duration::from_millis(10), task()));
        assert!(!sched.schedule(7u32, Duration::from_millis(10), task()));
        assert_eq!(sched.pending(), 1);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let sched = TokioScheduler::<u32>::new().unwrap();
        let (hits, task) = counter();

        sched.schedule(1u32, Duration::from_millis(10), task());
        assert!(sched.cancel(&1));
        assert!(!sched.cancel(&1));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_after_cancel_runs_only_new_timer() {
        let sched = TokioScheduler::<u32>::new().unwrap();
        let (hits, task) = counter();

        sched.schedule(1u32, Duration::from_millis(10), task());
        sched.cancel(&1);
        assert!(sched.schedule(1u32, Duration::from_millis(40), task()));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timers() {
        let sched = TokioScheduler::<u32>::new().unwrap();
        let (hits, task) = counter();

        sched.schedule(1u32, Duration::from_millis(10), task());
        sched.schedule(2u32, Duration::from_millis(10), task());
        drop(sched);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}

//! # ManualScheduler: a fake clock advanced by hand.
//!
//! Time only moves when [`ManualScheduler::advance`] or
//! [`ManualScheduler::run_all`] is called. Due tasks run on the caller's
//! thread, in deadline order (ties in scheduling order).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::time::Duration;
//! use toastvisor::{ManualScheduler, Scheduler};
//!
//! let clock = ManualScheduler::<&str>::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let f = Arc::clone(&fired);
//! clock.schedule("k", Duration::from_secs(1), Box::new(move || f.store(true, Ordering::SeqCst)));
//!
//! clock.advance(Duration::from_millis(999));
//! assert!(!fired.load(Ordering::SeqCst));
//! clock.advance(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::Duration;

use super::{Scheduler, Task};
use crate::sync::lock;

struct Entry {
    deadline: Duration,
    /// Scheduling order, breaks deadline ties.
    order: u64,
    task: Task,
}

struct Inner<K> {
    now: Duration,
    next_order: u64,
    timers: HashMap<K, Entry>,
}

/// Deterministic [`Scheduler`] driven by an explicit clock.
pub struct ManualScheduler<K> {
    inner: Mutex<Inner<K>>,
}

impl<K> Default for ManualScheduler<K> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                now: Duration::ZERO,
                next_order: 0,
                timers: HashMap::new(),
            }),
        }
    }
}

impl<K> ManualScheduler<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    /// Creates a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed fake time.
    pub fn now(&self) -> Duration {
        lock(&self.inner).now
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        lock(&self.inner).timers.values().map(|e| e.deadline).min()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks scheduled by a running task are honored if they fall due within
    /// the same window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = lock(&self.inner).now.saturating_add(by);
        let mut fired = 0;

        loop {
            let task = {
                let mut inner = lock(&self.inner);
                let due = inner
                    .timers
                    .iter()
                    .filter(|(_, e)| e.deadline <= target)
                    .min_by_key(|(_, e)| (e.deadline, e.order))
                    .map(|(key, _)| key.clone());

                match due.and_then(|key| inner.timers.remove(&key)) {
                    Some(entry) => {
                        inner.now = inner.now.max(entry.deadline);
                        entry.task
                    }
                    None => {
                        inner.now = inner.now.max(target);
                        break;
                    }
                }
            };
            task();
            fired += 1;
        }

        fired
    }

    /// Advances until no timer is pending. Returns the number of tasks run.
    pub fn run_all(&self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            let by = deadline.saturating_sub(self.now());
            fired += self.advance(by);
        }
        fired
    }
}

impl<K> Scheduler<K> for ManualScheduler<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    fn schedule(&self, key: K, delay: Duration, task: Task) -> bool {
        let mut inner = lock(&self.inner);
        if inner.timers.contains_key(&key) {
            return false;
        }
        let deadline = inner.now.saturating_add(delay);
        let order = inner.next_order;
        inner.next_order += 1;
        inner.timers.insert(
            key,
            Entry {
                deadline,
                order,
                task,
            },
        );
        true
    }

    fn cancel(&self, key: &K) -> bool {
        lock(&self.inner).timers.remove(key).is_some()
    }

    fn is_pending(&self, key: &K) -> bool {
        lock(&self.inner).timers.contains_key(key)
    }

    fn pending(&self) -> usize {
        lock(&self.inner).timers.len()
    }
}

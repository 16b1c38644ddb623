//! # SubscriberSet: synchronous fan-out with dynamic subscribe/unsubscribe.
//!
//! [`SubscriberSet`] delivers each [`Snapshot`] to every registered
//! subscriber, in the caller's thread, before `emit` returns.
//!
//! ## What it guarantees
//! - Per-subscriber monotonic delivery: a snapshot whose `seq` is not newer
//!   than the last one handed to that subscriber is skipped.
//! - Panics inside subscribers are caught and logged (isolation).
//! - Unsubscribing takes effect immediately, including for a broadcast that
//!   is already in progress.
//!
//! ## What it does **not** guarantee
//! - No ordering across different subscribers.
//!
//! ## Diagram
//! ```text
//!    emit(&Snapshot)
//!        │   (slots cloned under a read lock, lock released before delivery)
//!        ├──► slot S1 ── seq newer? ──► S1.on_snapshot()
//!        ├──► slot S2 ── seq newer? ──► S2.on_snapshot()
//!        └──► slot SN ── seq newer? ──► SN.on_snapshot()
//! ```

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock, Weak};

use crate::events::Snapshot;
use crate::sync::{read, write};
use crate::toasts::Content;

use super::Subscribe;

/// Identifies one registration within a [`SubscriberSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Delivery state of one subscriber.
pub(crate) struct Slot<C> {
    sub: Arc<dyn Subscribe<C>>,
    /// `seq + 1` of the newest snapshot delivered; `0` = none yet.
    delivered: AtomicU64,
    alive: AtomicBool,
}

impl<C: 'static> Slot<C> {
    /// Hands `snapshot` to the subscriber unless it is stale or the slot was detached.
    pub(crate) fn deliver(&self, snapshot: &Snapshot<C>) {
        if !self.alive.load(AtomicOrdering::Acquire) {
            return;
        }
        let mark = snapshot.seq().saturating_add(1);
        if self.delivered.fetch_max(mark, AtomicOrdering::AcqRel) >= mark {
            return;
        }
        if catch_unwind(AssertUnwindSafe(|| self.sub.on_snapshot(snapshot))).is_err() {
            tracing::error!(
                subscriber = self.sub.name(),
                seq = snapshot.seq(),
                "subscriber panicked"
            );
        }
    }
}

struct Entry<C> {
    id: SubscriberId,
    slot: Arc<Slot<C>>,
}

struct SetInner<C> {
    entries: RwLock<Vec<Entry<C>>>,
    next_id: AtomicU64,
}

/// Type-erased removal, so [`Subscription`] does not carry the content type.
trait Detach: Send + Sync {
    fn detach(&self, id: SubscriberId) -> bool;
}

impl<C: Content> Detach for SetInner<C> {
    fn detach(&self, id: SubscriberId) -> bool {
        let mut entries = write(&self.entries);
        match entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                let entry = entries.remove(pos);
                entry.slot.alive.store(false, AtomicOrdering::Release);
                tracing::trace!(subscriber = entry.slot.sub.name(), "unsubscribed");
                true
            }
            None => false,
        }
    }
}

/// Registry of snapshot subscribers.
pub struct SubscriberSet<C = String> {
    inner: Arc<SetInner<C>>,
}

impl<C> Default for SubscriberSet<C> {
    fn default() -> Self {
        Self {
            inner: Arc::new(SetInner {
                entries: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }
}

impl<C: Content> SubscriberSet<C> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sub`; it receives every subsequent [`emit`](Self::emit).
    ///
    /// Dropping the returned [`Subscription`] unsubscribes.
    pub fn subscribe(&self, sub: Arc<dyn Subscribe<C>>) -> Subscription {
        self.register(sub).0
    }

    /// Registers `sub` and also returns its slot, for an initial delivery by the caller.
    pub(crate) fn register(&self, sub: Arc<dyn Subscribe<C>>) -> (Subscription, Arc<Slot<C>>) {
        let id = SubscriberId(self.inner.next_id.fetch_add(1, AtomicOrdering::Relaxed));
        let name = sub.name();
        let slot = Arc::new(Slot {
            sub,
            delivered: AtomicU64::new(0),
            alive: AtomicBool::new(true),
        });

        write(&self.inner.entries).push(Entry {
            id,
            slot: Arc::clone(&slot),
        });
        tracing::trace!(subscriber = name, "subscribed");

        let set = Arc::clone(&self.inner) as Arc<dyn Detach>;
        let subscription = Subscription {
            id,
            set: Arc::downgrade(&set),
            active: AtomicBool::new(true),
        };
        (subscription, slot)
    }

    /// Fan-out one snapshot to all subscribers (synchronous).
    pub fn emit(&self, snapshot: &Snapshot<C>) {
        let slots: Vec<Arc<Slot<C>>> = read(&self.inner.entries)
            .iter()
            .map(|e| Arc::clone(&e.slot))
            .collect();

        for slot in slots {
            slot.deliver(snapshot);
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.inner.entries).is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.inner.entries).len()
    }
}

/// Unsubscribe capability returned by `subscribe`.
///
/// Unsubscribes when dropped (scoped teardown). [`unsubscribe`](Self::unsubscribe)
/// is idempotent; [`detach`](Self::detach) keeps the subscriber registered for
/// the lifetime of its set.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriberId,
    set: Weak<dyn Detach>,
    active: AtomicBool,
}

impl Subscription {
    /// Registration id.
    #[inline]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// True until unsubscribed (or until the owning set is gone).
    pub fn is_active(&self) -> bool {
        self.active.load(AtomicOrdering::Acquire) && self.set.strong_count() > 0
    }

    /// Removes the subscriber. Returns `true` only for the call that removed it.
    pub fn unsubscribe(&self) -> bool {
        if !self.active.swap(false, AtomicOrdering::AcqRel) {
            return false;
        }
        self.set.upgrade().is_some_and(|set| set.detach(self.id))
    }

    /// Gives up the capability; the subscriber stays registered.
    pub fn detach(self) {
        self.active.store(false, AtomicOrdering::Release);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ActionKind;
    use std::sync::Mutex;

    fn snap(seq: u64) -> Snapshot {
        Snapshot::new(seq, ActionKind::Add, Vec::new())
    }

    fn probe() -> (Arc<Mutex<Vec<u64>>>, Arc<dyn Subscribe>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let sub = move |snapshot: &Snapshot| s.lock().unwrap().push(snapshot.seq());
        (seen, Arc::new(sub))
    }

    #[test]
    fn test_emit_reaches_every_subscriber() {
        let set = SubscriberSet::new();
        let (a, sub_a) = probe();
        let (b, sub_b) = probe();
        let _ga = set.subscribe(sub_a);
        let _gb = set.subscribe(sub_b);

        set.emit(&snap(1));

        assert_eq!(set.len(), 2);
        assert_eq!(*a.lock().unwrap(), vec![1]);
        assert_eq!(*b.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_stale_snapshots_are_skipped() {
        let set = SubscriberSet::new();
        let (seen, sub) = probe();
        let _guard = set.subscribe(sub);

        set.emit(&snap(2));
        set.emit(&snap(1));
        set.emit(&snap(2));
        set.emit(&snap(3));

        assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_drop_unsubscribes_and_unsubscribe_is_idempotent() {
        let set = SubscriberSet::new();
        let (seen, sub) = probe();
        let guard = set.subscribe(sub);

        assert!(guard.is_active());
        assert!(guard.unsubscribe());
        assert!(!guard.unsubscribe());
        assert!(!guard.is_active());
        drop(guard);

        set.emit(&snap(1));
        assert!(set.is_empty());
        assert!(seen.lock().unwrap().is_empty());

        let (seen, sub) = probe();
        {
            let _scoped = set.subscribe(sub);
            set.emit(&snap(2));
        }
        set.emit(&snap(3));
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_detach_keeps_subscriber() {
        let set = SubscriberSet::new();
        let (seen, sub) = probe();
        set.subscribe(sub).detach();

        set.emit(&snap(1));
        assert_eq!(set.len(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_panicking_subscriber_is_isolated() {
        let set = SubscriberSet::new();
        let boom: Arc<dyn Subscribe> = Arc::new(|_: &Snapshot| panic!("boom"));
        let (seen, sub) = probe();
        let _g1 = set.subscribe(boom);
        let _g2 = set.subscribe(sub);

        set.emit(&snap(1));
        set.emit(&snap(2));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_during_emit_stops_delivery() {
        let set = Arc::new(SubscriberSet::new());
        let (seen, sub) = probe();
        let victim = Arc::new(Mutex::new(None::<Subscription>));

        let v = Arc::clone(&victim);
        let killer: Arc<dyn Subscribe> = Arc::new(move |_: &Snapshot| {
            if let Some(guard) = v.lock().unwrap().take() {
                guard.unsubscribe();
            }
        });
        let _k = set.subscribe(killer);
        *victim.lock().unwrap() = Some(set.subscribe(sub));

        set.emit(&snap(1));

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(set.len(), 1);
    }
}

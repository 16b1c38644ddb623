//! # Toaster: the notification store.
//!
//! The [`Toaster`] owns the toast list, serializes every mutation through one
//! lock, arms/cancels removal timers, and broadcasts the resulting
//! [`Snapshot`] to subscribers.
//!
//! ## Key responsibilities
//! - assign fresh, never-reused ids under the store lock (a newer id always
//!   sits above an older one) and enforce the capacity cap
//! - apply `show` / `update` / `dismiss` / `remove` as pure [`Action`]s
//! - keep exactly one removal timer per closed toast
//! - fan out snapshots to [`Subscribe`] implementors and the watch channel
//!
//! ## Operation flow
//! ```text
//! show/update/dismiss/remove ──► dispatch(Action)
//!                                   │  (store lock held)
//!                                   ├─► ToastState::apply ──► Outcome
//!                                   ├─► Outcome.removed ──► Dismissals::cancel(id)
//!                                   ├─► Outcome.closed  ──► Dismissals::schedule(id)
//!                                   │                          └─(delay)─► dispatch(Expire(id))
//!                                   └─► changed? seq += 1, cache snapshot
//!                                   │  (lock released)
//!                                   └─► SubscriberSet::emit(&Snapshot) + watch.send
//! ```
//!
//! Timer callbacks hold only a [`WeakToaster`]: dropping the last [`Toaster`]
//! handle drops the scheduler, which cancels whatever is pending. A
//! subscriber that needs to call back into the store must capture a
//! [`WeakToaster`] too; a strong clone inside a registered subscriber is a
//! reference cycle (store → subscribers → store) that keeps the store and its
//! timers alive until that subscriber is unsubscribed.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use toastvisor::{Config, ManualScheduler, Toaster, ToastId, ToastRequest};
//!
//! let clock = Arc::new(ManualScheduler::<ToastId>::new());
//! let toaster: Toaster = Toaster::builder(Config::default())
//!     .with_scheduler(clock.clone())
//!     .build()
//!     .expect("explicit scheduler needs no runtime");
//!
//! let id = toaster.show(ToastRequest::titled("Saved".to_string()));
//! toaster.dismiss(Some(id));
//! assert_eq!(toaster.snapshot().get(id).map(|t| t.open), Some(false));
//!
//! clock.advance(Config::default().remove_delay);
//! assert!(toaster.snapshot().is_empty());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::sync::watch;

use super::builder::ToasterBuilder;
use super::config::Config;
use super::dismissals::Dismissals;
use super::state::{Action, ToastState};
use crate::error::ToasterError;
use crate::events::Snapshot;
use crate::scheduler::Scheduler;
use crate::subscribers::{Subscribe, SubscriberSet, Subscription};
use crate::sync::lock;
use crate::toasts::{Content, ToastHandle, ToastId, ToastPatch, ToastRequest};

/// State guarded by the store lock.
struct Inner<C> {
    state: ToastState<C>,
    /// Last published snapshot (also the answer to [`Toaster::snapshot`]).
    snapshot: Snapshot<C>,
}

struct Shared<C> {
    cfg: Config,
    inner: Mutex<Inner<C>>,
    dismissals: Dismissals,
    subs: SubscriberSet<C>,
    watch: watch::Sender<Snapshot<C>>,
}

/// Handle to a toast store.
///
/// Cheap to clone; every clone addresses the same list. Construct it once
/// and pass it to whichever parts of the application show or render toasts.
///
/// Subscribers should hold a [`WeakToaster`] (see [`Toaster::downgrade`])
/// rather than a clone, otherwise the store can outlive every other handle.
pub struct Toaster<C = String> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for Toaster<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Content> Toaster<C> {
    /// Returns a builder for a store with the given configuration.
    pub fn builder(cfg: Config) -> ToasterBuilder<C> {
        ToasterBuilder::new(cfg)
    }

    /// Creates a store using tokio timers.
    ///
    /// Must be called within a tokio runtime, otherwise returns
    /// [`ToasterError::NoRuntime`].
    pub fn new(cfg: Config) -> Result<Self, ToasterError> {
        Self::builder(cfg).build()
    }

    pub(crate) fn with_scheduler(cfg: Config, scheduler: Arc<dyn Scheduler<ToastId>>) -> Self {
        let (watch, _) = watch::channel(Snapshot::default());
        let shared = Shared {
            inner: Mutex::new(Inner {
                state: ToastState::new(cfg.max_active_clamped()),
                snapshot: Snapshot::default(),
            }),
            dismissals: Dismissals::new(scheduler, cfg.remove_delay),
            subs: SubscriberSet::new(),
            watch,
            cfg,
        };
        Self {
            shared: Arc::new(shared),
        }
    }

    /// Returns a non-owning handle to this store.
    pub fn downgrade(&self) -> WeakToaster<C> {
        WeakToaster {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Configuration the store was built with.
    pub fn config(&self) -> &Config {
        &self.shared.cfg
    }

    /// Adds a toast at the head of the list and returns its id.
    ///
    /// Always succeeds; older toasts beyond `max_active` are dropped.
    pub fn show(&self, request: ToastRequest<C>) -> ToastId {
        let mut inner = lock(&self.shared.inner);
        let id = inner.state.allocate_id();
        self.commit(inner, Action::Add(request.into_toast(id)));
        id
    }

    /// Like [`show`](Self::show), returning a handle bound to the new toast.
    pub fn toast(&self, request: ToastRequest<C>) -> ToastHandle<C> {
        let id = self.show(request);
        ToastHandle::new(id, self.clone())
    }

    /// Merges the set fields of `patch` into toast `id`.
    ///
    /// Unknown ids (e.g. already removed) and empty patches are ignored.
    pub fn update(&self, id: ToastId, patch: ToastPatch<C>) {
        self.dispatch(Action::Update { id, patch });
    }

    /// Marks toast `id` (or every toast, for `None`) as closed and arms its
    /// removal timer.
    ///
    /// Dismissing an already-closed toast does not restart its timer.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.dispatch(Action::Dismiss(id));
    }

    /// Purges toast `id` (or every toast, for `None`) immediately, cancelling
    /// pending removal timers.
    pub fn remove(&self, id: Option<ToastId>) {
        self.dispatch(Action::Remove(id));
    }

    /// Visibility callback for renderers: `false` dismisses, `true` is ignored
    /// (a dismissed toast cannot be reopened).
    pub fn set_open(&self, id: ToastId, open: bool) {
        if open {
            tracing::trace!(id = %id, "reopen request ignored");
            return;
        }
        self.dismiss(Some(id));
    }

    /// Current ordered list (newest first).
    pub fn snapshot(&self) -> Snapshot<C> {
        lock(&self.shared.inner).snapshot.clone()
    }

    /// Registers `sub`, delivering the current snapshot before returning.
    ///
    /// Dropping the returned [`Subscription`] unsubscribes.
    pub fn subscribe<S>(&self, sub: S) -> Subscription
    where
        S: Subscribe<C>,
    {
        self.subscribe_arc(Arc::new(sub))
    }

    /// Same as [`subscribe`](Self::subscribe) for an already shared subscriber.
    pub fn subscribe_arc(&self, sub: Arc<dyn Subscribe<C>>) -> Subscription {
        let (subscription, slot, current) = {
            let inner = lock(&self.shared.inner);
            let (subscription, slot) = self.shared.subs.register(sub);
            (subscription, slot, inner.snapshot.clone())
        };
        slot.deliver(&current);
        subscription
    }

    /// Async view of the list: the receiver always holds the newest snapshot.
    pub fn watch(&self) -> watch::Receiver<Snapshot<C>> {
        self.shared.watch.subscribe()
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subs.len()
    }

    /// Number of armed removal timers.
    pub fn pending_removals(&self) -> usize {
        self.shared.dismissals.pending()
    }

    /// True if toast `id` has an armed removal timer.
    pub fn is_removal_pending(&self, id: ToastId) -> bool {
        self.shared.dismissals.is_pending(id)
    }

    /// Applies one action; returns `true` if the list changed.
    fn dispatch(&self, action: Action<C>) -> bool {
        let inner = lock(&self.shared.inner);
        self.commit(inner, action)
    }

    /// Applies `action` under the held store lock, releases it, then broadcasts.
    fn commit(&self, mut inner: MutexGuard<'_, Inner<C>>, action: Action<C>) -> bool {
        let kind = action.kind();
        let target = action.target();
        let outcome = inner.state.apply(action);

        for id in &outcome.removed {
            self.shared.dismissals.cancel(*id);
        }
        for id in &outcome.closed {
            self.arm(*id);
        }

        if !outcome.changed {
            tracing::trace!(action = kind.as_label(), target = ?target, "nothing changed");
            return false;
        }

        let seq = inner.snapshot.seq() + 1;
        let snapshot = Snapshot::new(seq, kind, inner.state.toasts().to_vec());
        inner.snapshot = snapshot.clone();
        drop(inner);

        tracing::debug!(
            action = kind.as_label(),
            target = ?target,
            seq,
            len = snapshot.len(),
            dropped = ?outcome.removed,
            "toasts changed"
        );
        self.broadcast(&snapshot);
        true
    }

    /// Arms the removal timer for `id`; the callback only keeps a weak handle.
    fn arm(&self, id: ToastId) {
        let weak = self.downgrade();
        self.shared.dismissals.schedule(id, move || {
            if let Some(toaster) = weak.upgrade() {
                toaster.dispatch(Action::Expire(id));
            }
        });
    }

    fn broadcast(&self, snapshot: &Snapshot<C>) {
        self.shared.subs.emit(snapshot);
        self.shared.watch.send_if_modified(|current| {
            if snapshot.seq() > current.seq() {
                *current = snapshot.clone();
                true
            } else {
                false
            }
        });
    }
}

impl<C> std::fmt::Debug for Toaster<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("cfg", &self.shared.cfg)
            .finish_non_exhaustive()
    }
}

/// Non-owning handle to a [`Toaster`].
///
/// Does not keep the store alive. Capture this (not a [`Toaster`] clone) in
/// subscribers and callbacks owned by the store itself.
pub struct WeakToaster<C = String> {
    shared: Weak<Shared<C>>,
}

impl<C> Clone for WeakToaster<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<C: Content> WeakToaster<C> {
    /// Returns a strong handle, or `None` once every [`Toaster`] was dropped.
    pub fn upgrade(&self) -> Option<Toaster<C>> {
        self.shared.upgrade().map(|shared| Toaster { shared })
    }
}

impl<C> std::fmt::Debug for WeakToaster<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakToaster")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

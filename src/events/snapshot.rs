//! # Snapshot of the toast list.
//!
//! A [`Snapshot`] is an immutable, cheaply cloneable view of the store's list
//! (newest first). Observers never see the live list, only snapshots, so no
//! code outside the store can mutate it.
//!
//! ## Ordering guarantees
//! Each state change bumps a per-store sequence number (`seq`). Snapshots
//! with a higher `seq` are strictly newer; use it to drop stale deliveries
//! when a store is shared across threads.

use std::sync::Arc;

use crate::events::ActionKind;
use crate::toasts::{Toast, ToastId};

/// Ordered list of current toasts at a point in time.
pub struct Snapshot<C = String> {
    seq: u64,
    cause: Option<ActionKind>,
    toasts: Arc<[Toast<C>]>,
}

impl<C> Snapshot<C> {
    pub(crate) fn new(seq: u64, cause: ActionKind, toasts: Vec<Toast<C>>) -> Self {
        Self {
            seq,
            cause: Some(cause),
            toasts: toasts.into(),
        }
    }

    /// Sequence number; `0` for the initial empty list.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Transition that produced this snapshot (`None` for the initial list).
    #[inline]
    pub fn cause(&self) -> Option<ActionKind> {
        self.cause
    }

    /// Toasts, newest first.
    #[inline]
    pub fn toasts(&self) -> &[Toast<C>] {
        &self.toasts
    }

    /// Newest toast, if any.
    #[inline]
    pub fn head(&self) -> Option<&Toast<C>> {
        self.toasts.first()
    }

    /// Looks up a toast by id.
    pub fn get(&self, id: ToastId) -> Option<&Toast<C>> {
        self.toasts.iter().find(|t| t.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of toasts still displayed (`open = true`).
    pub fn open_count(&self) -> usize {
        self.toasts.iter().filter(|t| t.open).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast<C>> {
        self.toasts.iter()
    }
}

impl<C> Default for Snapshot<C> {
    fn default() -> Self {
        Self {
            seq: 0,
            cause: None,
            toasts: Arc::new([]),
        }
    }
}

impl<C> Clone for Snapshot<C> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            cause: self.cause,
            toasts: Arc::clone(&self.toasts),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Snapshot<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("seq", &self.seq)
            .field("cause", &self.cause)
            .field("toasts", &self.toasts)
            .finish()
    }
}

impl<'a, C> IntoIterator for &'a Snapshot<C> {
    type Item = &'a Toast<C>;
    type IntoIter = std::slice::Iter<'a, Toast<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::ToastRequest;

    #[test]
    fn test_default_is_empty_seq_zero() {
        let snap: Snapshot = Snapshot::default();
        assert_eq!(snap.seq(), 0);
        assert_eq!(snap.cause(), None);
        assert!(snap.is_empty());
        assert!(snap.head().is_none());
    }

    #[test]
    fn test_lookup_and_open_count() {
        let mut closed = ToastRequest::titled("old").into_toast(ToastId::new(1));
        closed.open = false;
        let open = ToastRequest::titled("new").into_toast(ToastId::new(2));

        let snap = Snapshot::new(3, ActionKind::Add, vec![open, closed]);

        assert_eq!(snap.len(), 2);
        assert_eq!(snap.open_count(), 1);
        assert_eq!(snap.head().map(|t| t.id), Some(ToastId::new(2)));
        assert_eq!(snap.get(ToastId::new(1)).map(|t| t.open), Some(false));
        assert!(snap.get(ToastId::new(9)).is_none());
        assert_eq!(snap.clone().seq(), 3);
    }
}

//! # Toast: the unit tracked by the store.
//!
//! A [`Toast`] is created by [`Toaster::show`](crate::Toaster::show), mutated in
//! place by `update`/`dismiss`, and destroyed by `remove` (explicit or timer-driven).
//!
//! ## State machine
//! ```text
//! show() ──► ACTIVE (open=true) ──dismiss──► CLOSING (open=false, timer armed)
//!                                               │
//!                            timer fires or remove()
//!                                               ▼
//!                                 REMOVED (absent from the list)
//! ```
//! There is no way back from `CLOSING` to `ACTIVE` for the same id; a fresh
//! `show()` produces a new id.

use std::fmt;

/// Bounds required from toast payloads (title, description, action).
///
/// The store never inspects content; it only clones it into snapshots and
/// hands it to subscribers, possibly on another thread.
pub trait Content: Clone + Send + Sync + 'static {}

impl<T> Content for T where T: Clone + Send + Sync + 'static {}

/// Opaque toast identifier.
///
/// Generated by the store from a per-instance monotonic counter, so an id is
/// never reused for the lifetime of a [`Toaster`](crate::Toaster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[inline]
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation kind of a toast.
///
/// Renderers and action components may branch on it; the store does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

impl Variant {
    /// Returns a short stable label for logs.
    pub fn as_label(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Destructive => "destructive",
        }
    }
}

/// A notification as seen in a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, PartialEq)]
pub struct Toast<C = String> {
    /// Identity assigned at creation.
    pub id: ToastId,
    /// Optional heading.
    pub title: Option<C>,
    /// Optional body.
    pub description: Option<C>,
    /// Optional action payload (e.g. an "undo" button description).
    pub action: Option<C>,
    /// Presentation kind.
    pub variant: Variant,
    /// `true` while displayed; `false` once dismissed and waiting for removal.
    pub open: bool,
}

impl<C> Toast<C> {
    /// True once the toast was dismissed and is waiting for its removal timer.
    #[inline]
    pub fn is_closing(&self) -> bool {
        !self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_raw_number() {
        assert_eq!(ToastId::new(42).to_string(), "42");
        assert_eq!(ToastId::new(42).get(), 42);
    }

    #[test]
    fn test_variant_default_and_labels() {
        assert_eq!(Variant::default(), Variant::Default);
        assert_eq!(Variant::Default.as_label(), "default");
        assert_eq!(Variant::Destructive.as_label(), "destructive");
    }
}

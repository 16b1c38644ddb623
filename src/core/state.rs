//! # Toast list state and its transitions.
//!
//! [`ToastState`] is the pure part of the store: a newest-first list plus the
//! capacity rule. [`ToastState::apply`] performs one [`Action`] and reports
//! what happened in an [`Outcome`]; it never touches timers or subscribers.
//! The store turns the outcome into side effects:
//! - `closed` ids → arm removal timers (no-op if already armed)
//! - `removed` ids → cancel removal timers
//! - `changed` → bump `seq` and broadcast
//!
//! ## Transitions
//! ```text
//! Add(t)            prepend t; truncate tail           ─► removed = truncated
//! Update(id, patch) merge patch into id                ─► changed if id present and patch non-empty
//! Dismiss(Some(id)) open=false on id                   ─► closed = [id] if present
//! Dismiss(None)     open=false on all                  ─► closed = all ids
//! Remove(Some(id))  delete id                          ─► removed = [id] if present
//! Remove(None)      delete all                         ─► removed = all ids
//! Expire(id)        same as Remove(Some(id))
//! ```
//! `Dismiss` reports already-closed toasts in `closed` too (so a lost timer is
//! re-armed), but only flips count as `changed`.

use crate::events::ActionKind;
use crate::toasts::{Toast, ToastId, ToastPatch};

/// One store transition.
pub(crate) enum Action<C> {
    Add(Toast<C>),
    Update { id: ToastId, patch: ToastPatch<C> },
    Dismiss(Option<ToastId>),
    Remove(Option<ToastId>),
    Expire(ToastId),
}

impl<C> Action<C> {
    pub(crate) fn kind(&self) -> ActionKind {
        match self {
            Action::Add(_) => ActionKind::Add,
            Action::Update { .. } => ActionKind::Update,
            Action::Dismiss(_) => ActionKind::Dismiss,
            Action::Remove(_) => ActionKind::Remove,
            Action::Expire(_) => ActionKind::Expire,
        }
    }

    /// Targeted id; `None` for the "all" forms.
    pub(crate) fn target(&self) -> Option<ToastId> {
        match self {
            Action::Add(toast) => Some(toast.id),
            Action::Update { id, .. } | Action::Expire(id) => Some(*id),
            Action::Dismiss(id) | Action::Remove(id) => *id,
        }
    }
}

/// Effects of one [`Action`].
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Outcome {
    /// The list differs from before.
    pub changed: bool,
    /// Ids now closed that need a removal timer.
    pub closed: Vec<ToastId>,
    /// Ids no longer in the list.
    pub removed: Vec<ToastId>,
}

/// Newest-first toast list with a capacity cap.
pub(crate) struct ToastState<C> {
    toasts: Vec<Toast<C>>,
    limit: usize,
    /// Raw value of the next id handed out by [`ToastState::allocate_id`].
    next_id: u64,
}

impl<C> ToastState<C> {
    /// Creates an empty list holding at most `limit` toasts (min 1).
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Hands out a fresh id; never returns the same id twice.
    ///
    /// Called under the same lock as the `Add` that uses it, so a larger id
    /// always lands above a smaller one.
    pub(crate) fn allocate_id(&mut self) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn toasts(&self) -> &[Toast<C>] {
        &self.toasts
    }

    pub(crate) fn apply(&mut self, action: Action<C>) -> Outcome {
        match action {
            Action::Add(toast) => self.add(toast),
            Action::Update { id, patch } => self.update(id, patch),
            Action::Dismiss(Some(id)) => self.dismiss_one(id),
            Action::Dismiss(None) => self.dismiss_all(),
            Action::Remove(Some(id)) | Action::Expire(id) => self.remove_one(id),
            Action::Remove(None) => self.remove_all(),
        }
    }

    fn add(&mut self, toast: Toast<C>) -> Outcome {
        self.toasts.insert(0, toast);
        let removed = if self.toasts.len() > self.limit {
            self.toasts
                .split_off(self.limit)
                .into_iter()
                .map(|t| t.id)
                .collect()
        } else {
            Vec::new()
        };
        Outcome {
            changed: true,
            closed: Vec::new(),
            removed,
        }
    }

    fn update(&mut self, id: ToastId, patch: ToastPatch<C>) -> Outcome {
        if patch.is_empty() {
            return Outcome::default();
        }
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                patch.apply_to(toast);
                Outcome {
                    changed: true,
                    ..Outcome::default()
                }
            }
            None => Outcome::default(),
        }
    }

    fn dismiss_one(&mut self, id: ToastId) -> Outcome {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                let changed = toast.open;
                toast.open = false;
                Outcome {
                    changed,
                    closed: vec![id],
                    removed: Vec::new(),
                }
            }
            None => Outcome::default(),
        }
    }

    fn dismiss_all(&mut self) -> Outcome {
        let mut out = Outcome::default();
        for toast in &mut self.toasts {
            out.changed |= toast.open;
            toast.open = false;
            out.closed.push(toast.id);
        }
        out
    }

    fn remove_one(&mut self, id: ToastId) -> Outcome {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.toasts.remove(pos);
                Outcome {
                    changed: true,
                    closed: Vec::new(),
                    removed: vec![id],
                }
            }
            None => Outcome::default(),
        }
    }

    fn remove_all(&mut self) -> Outcome {
        let removed: Vec<ToastId> = self.toasts.drain(..).map(|t| t.id).collect();
        Outcome {
            changed: !removed.is_empty(),
            closed: Vec::new(),
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::{ToastRequest, Variant};

    fn toast(id: u64, title: &'static str) -> Toast<&'static str> {
        ToastRequest::titled(title).into_toast(ToastId::new(id))
    }

    fn ids<C>(state: &ToastState<C>) -> Vec<u64> {
        state.toasts().iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn test_add_prepends_and_truncates_tail() {
        let mut state = ToastState::new(2);

        assert!(state.apply(Action::Add(toast(1, "a"))).removed.is_empty());
        state.apply(Action::Add(toast(2, "b")));
        let out = state.apply(Action::Add(toast(3, "c")));

        assert!(out.changed);
        assert_eq!(out.removed, vec![ToastId::new(1)]);
        assert_eq!(ids(&state), vec![3, 2]);
    }

    #[test]
    fn test_limit_one_keeps_newest_only() {
        let mut state = ToastState::new(1);
        state.apply(Action::Add(toast(1, "A")));
        state.apply(Action::Add(toast(2, "B")));

        assert_eq!(ids(&state), vec![2]);
        assert_eq!(state.toasts()[0].title, Some("B"));
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut state = ToastState::new(0);
        state.apply(Action::Add(toast(1, "a")));
        assert_eq!(ids(&state), vec![1]);
    }

    #[test]
    fn test_update_merges_and_ignores_unknown() {
        let mut state = ToastState::new(3);
        state.apply(Action::Add(toast(1, "a")));

        let out = state.apply(Action::Update {
            id: ToastId::new(1),
            patch: ToastPatch::new().with_variant(Variant::Destructive),
        });
        assert!(out.changed);
        assert_eq!(state.toasts()[0].variant, Variant::Destructive);
        assert_eq!(state.toasts()[0].title, Some("a"));

        let out = state.apply(Action::Update {
            id: ToastId::new(9),
            patch: ToastPatch::new().with_title("x"),
        });
        assert_eq!(out, Outcome::default());

        let out = state.apply(Action::Update {
            id: ToastId::new(1),
            patch: ToastPatch::new(),
        });
        assert!(!out.changed);
    }

    #[test]
    fn test_dismiss_one_reports_closed_even_when_already_closed() {
        let mut state = ToastState::new(3);
        state.apply(Action::Add(toast(1, "a")));

        let first = state.apply(Action::Dismiss(Some(ToastId::new(1))));
        assert!(first.changed);
        assert_eq!(first.closed, vec![ToastId::new(1)]);
        assert!(!state.toasts()[0].open);

        let again = state.apply(Action::Dismiss(Some(ToastId::new(1))));
        assert!(!again.changed);
        assert_eq!(again.closed, vec![ToastId::new(1)]);

        let unknown = state.apply(Action::Dismiss(Some(ToastId::new(5))));
        assert_eq!(unknown, Outcome::default());
    }

    #[test]
    fn test_dismiss_all_closes_everything() {
        let mut state = ToastState::new(3);
        state.apply(Action::Add(toast(1, "a")));
        state.apply(Action::Add(toast(2, "b")));

        let out = state.apply(Action::Dismiss(None));
        assert!(out.changed);
        assert_eq!(out.closed, vec![ToastId::new(2), ToastId::new(1)]);
        assert!(state.toasts().iter().all(|t| !t.open));
    }

    #[test]
    fn test_remove_one_all_and_expire() {
        let mut state = ToastState::new(3);
        state.apply(Action::Add(toast(1, "a")));
        state.apply(Action::Add(toast(2, "b")));
        state.apply(Action::Add(toast(3, "c")));

        let out = state.apply(Action::Remove(Some(ToastId::new(2))));
        assert_eq!(out.removed, vec![ToastId::new(2)]);
        assert_eq!(ids(&state), vec![3, 1]);

        let out = state.apply(Action::Expire(ToastId::new(3)));
        assert_eq!(out.removed, vec![ToastId::new(3)]);

        assert_eq!(
            state.apply(Action::Remove(Some(ToastId::new(3)))),
            Outcome::default()
        );

        let out = state.apply(Action::Remove(None));
        assert!(out.changed);
        assert_eq!(out.removed, vec![ToastId::new(1)]);
        assert!(state.toasts().is_empty());

        assert!(!state.apply(Action::Remove(None)).changed);
    }

    #[test]
    fn test_allocated_ids_increase() {
        let mut state = ToastState::<&str>::new(1);
        let a = state.allocate_id();
        let b = state.allocate_id();

        assert_eq!(a.get(), 1);
        assert!(b > a);
    }

    #[test]
    fn test_action_kinds() {
        assert_eq!(Action::<&str>::Dismiss(None).kind(), ActionKind::Dismiss);
        assert_eq!(Action::<&str>::Expire(ToastId::new(1)).kind(), ActionKind::Expire);
    }
}

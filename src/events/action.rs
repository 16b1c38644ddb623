//! # Classification of store transitions.
//!
//! Every [`Snapshot`](crate::Snapshot) records which kind of transition
//! produced it. Subscribers use it for logging or to pick an animation; the
//! list itself remains the source of truth.

/// Kind of transition applied to the toast list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// A toast was created (and older ones possibly truncated).
    Add,
    /// A toast's display fields were patched.
    Update,
    /// One or all toasts were marked closed.
    Dismiss,
    /// One or all toasts were purged explicitly.
    Remove,
    /// A toast was purged by its removal timer.
    Expire,
}

impl ActionKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            ActionKind::Add => "toast_add",
            ActionKind::Update => "toast_update",
            ActionKind::Dismiss => "toast_dismiss",
            ActionKind::Remove => "toast_remove",
            ActionKind::Expire => "toast_expire",
        }
    }
}

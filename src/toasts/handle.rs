use super::{
    request::ToastPatch,
    toast::{Content, ToastId},
};
use crate::core::Toaster;

/// A toast id bound to the store that created it.
///
/// Returned by [`Toaster::toast`]; lets the caller close or edit "its" toast
/// without threading the id around. Calls after the toast was removed are
/// no-ops, like any other call with an unknown id.
#[derive(Clone)]
pub struct ToastHandle<C = String> {
    id: ToastId,
    toaster: Toaster<C>,
}

impl<C: Content> ToastHandle<C> {
    pub(crate) fn new(id: ToastId, toaster: Toaster<C>) -> Self {
        Self { id, toaster }
    }

    /// The id assigned by the store.
    #[inline]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Dismisses this toast (arms its removal timer).
    pub fn dismiss(&self) {
        self.toaster.dismiss(Some(self.id));
    }

    /// Patches this toast.
    pub fn update(&self, patch: ToastPatch<C>) {
        self.toaster.update(self.id, patch);
    }

    /// True while the toast is still in the store's list (open or closing).
    pub fn is_present(&self) -> bool {
        self.toaster.snapshot().get(self.id).is_some()
    }
}

impl<C> std::fmt::Debug for ToastHandle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}

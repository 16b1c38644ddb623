//! # Payloads for creating and patching toasts.
//!
//! - [`ToastRequest`] carries the display fields of a new toast.
//! - [`ToastPatch`] carries the fields to overwrite or clear on an existing
//!   toast; unset fields are left untouched.
//!
//! Neither type can touch `open`: visibility only changes through
//! [`Toaster::dismiss`](crate::Toaster::dismiss).

use super::toast::{Toast, ToastId, Variant};

/// Display payload for [`Toaster::show`](crate::Toaster::show).
///
/// ## Example
/// ```rust
/// use toastvisor::{ToastRequest, Variant};
///
/// let req: ToastRequest = ToastRequest::new()
///     .with_title("Payment failed".to_string())
///     .with_description("The installment was not registered.".to_string())
///     .with_variant(Variant::Destructive);
/// assert_eq!(req.variant, Variant::Destructive);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest<C = String> {
    pub title: Option<C>,
    pub description: Option<C>,
    pub action: Option<C>,
    pub variant: Variant,
}

impl<C> Default for ToastRequest<C> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            action: None,
            variant: Variant::Default,
        }
    }
}

impl<C> ToastRequest<C> {
    /// Creates an empty request with [`Variant::Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a request carrying only a title.
    pub fn titled(title: C) -> Self {
        Self::new().with_title(title)
    }

    #[inline]
    pub fn with_title(mut self, title: C) -> Self {
        self.title = Some(title);
        self
    }

    #[inline]
    pub fn with_description(mut self, description: C) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_action(mut self, action: C) -> Self {
        self.action = Some(action);
        self
    }

    #[inline]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Builds the toast the store inserts: fresh id, `open = true`.
    pub(crate) fn into_toast(self, id: ToastId) -> Toast<C> {
        Toast {
            id,
            title: self.title,
            description: self.description,
            action: self.action,
            variant: self.variant,
            open: true,
        }
    }
}

/// Partial payload for [`Toaster::update`](crate::Toaster::update).
///
/// Each field is a change: `None` leaves the toast's field untouched,
/// `Some(value)` overwrites it. For the optional display fields `value` is
/// itself an `Option`, so a patch can also clear a field (`Some(None)`).
///
/// ## Example
/// ```rust
/// use toastvisor::ToastPatch;
///
/// let patch: ToastPatch = ToastPatch::new()
///     .with_title("Retrying".to_string())
///     .clear_description();
/// assert_eq!(patch.title, Some(Some("Retrying".to_string())));
/// assert_eq!(patch.description, Some(None));
/// assert_eq!(patch.action, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToastPatch<C = String> {
    pub title: Option<Option<C>>,
    pub description: Option<Option<C>>,
    pub action: Option<Option<C>>,
    pub variant: Option<Variant>,
}

impl<C> Default for ToastPatch<C> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            action: None,
            variant: None,
        }
    }
}

impl<C> ToastPatch<C> {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_title(mut self, title: C) -> Self {
        self.title = Some(Some(title));
        self
    }

    #[inline]
    pub fn with_description(mut self, description: C) -> Self {
        self.description = Some(Some(description));
        self
    }

    #[inline]
    pub fn with_action(mut self, action: C) -> Self {
        self.action = Some(Some(action));
        self
    }

    #[inline]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Removes the title.
    #[inline]
    pub fn clear_title(mut self) -> Self {
        self.title = Some(None);
        self
    }

    /// Removes the description.
    #[inline]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Removes the action.
    #[inline]
    pub fn clear_action(mut self) -> Self {
        self.action = Some(None);
        self
    }

    /// True if the patch changes no field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.action.is_none()
            && self.variant.is_none()
    }

    /// Merges the set fields into `toast`.
    pub(crate) fn apply_to(self, toast: &mut Toast<C>) {
        if let Some(title) = self.title {
            toast.title = title;
        }
        if let Some(description) = self.description {
            toast.description = description;
        }
        if let Some(action) = self.action {
            toast.action = action;
        }
        if let Some(variant) = self.variant {
            toast.variant = variant;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_into_toast_is_open() {
        let toast = ToastRequest::titled("A")
            .with_description("body")
            .into_toast(ToastId::new(7));

        assert_eq!(toast.id, ToastId::new(7));
        assert!(toast.open);
        assert_eq!(toast.title, Some("A"));
        assert_eq!(toast.description, Some("body"));
        assert_eq!(toast.action, None);
        assert_eq!(toast.variant, Variant::Default);
    }

    #[test]
    fn test_patch_only_touches_set_fields() {
        let mut toast = ToastRequest::titled("A")
            .with_description("keep me")
            .with_variant(Variant::Destructive)
            .into_toast(ToastId::new(1));

        ToastPatch::new().with_title("X").apply_to(&mut toast);

        assert_eq!(toast.title, Some("X"));
        assert_eq!(toast.description, Some("keep me"));
        assert_eq!(toast.variant, Variant::Destructive);
        assert!(toast.open);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut toast = ToastRequest::titled("A")
            .with_description("stale")
            .with_action("undo")
            .into_toast(ToastId::new(1));

        ToastPatch::new()
            .clear_description()
            .clear_action()
            .apply_to(&mut toast);

        assert_eq!(toast.title, Some("A"));
        assert_eq!(toast.description, None);
        assert_eq!(toast.action, None);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ToastPatch::<String>::new().is_empty());
        assert!(!ToastPatch::<String>::new()
            .with_variant(Variant::Default)
            .is_empty());
        assert!(!ToastPatch::<String>::new().clear_title().is_empty());
    }
}

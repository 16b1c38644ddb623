//! Error types used by the toastvisor store.
//!
//! Store operations (`show`, `update`, `dismiss`, `remove`) are total: an
//! unknown id is a no-op and exceeding the capacity truncates instead of
//! rejecting. The only failures are raised while **constructing** a store,
//! and they are grouped in [`ToasterError`].
//!
//! Like the rest of the crate, the error provides helper methods
//! (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced while building a [`Toaster`](crate::Toaster).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToasterError {
    /// A [`TokioScheduler`](crate::TokioScheduler) was requested outside a tokio runtime.
    ///
    /// Either build the store from within a runtime, or pass an explicit
    /// scheduler through [`ToasterBuilder::with_scheduler`](crate::ToasterBuilder::with_scheduler).
    #[error("no tokio runtime available for the dismissal timers")]
    NoRuntime,
}

impl ToasterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use toastvisor::ToasterError;
    ///
    /// assert_eq!(ToasterError::NoRuntime.as_label(), "toaster_no_runtime");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ToasterError::NoRuntime => "toaster_no_runtime",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ToasterError::NoRuntime => {
                "dismissal timers need a tokio runtime; build inside one or inject a scheduler"
                    .to_string()
            }
        }
    }
}

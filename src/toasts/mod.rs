//! # Toast data model.
//!
//! This module provides the notification-related types:
//! - [`Toast`] - a notification tracked by the store
//! - [`ToastId`] - opaque, never-reused identifier assigned by the store
//! - [`Variant`] - presentation kind (opaque to the store's logic)
//! - [`ToastRequest`] - payload for creating a toast
//! - [`ToastPatch`] - partial payload for updating a toast
//! - [`ToastHandle`] - id plus bound `dismiss`/`update` returned by [`Toaster::toast`](crate::Toaster::toast)

mod handle;
mod request;
mod toast;

pub use handle::ToastHandle;
pub use request::{ToastPatch, ToastRequest};
pub use toast::{Content, Toast, ToastId, Variant};

//! # toastvisor
//!
//! **Toastvisor** is a small notification (toast) queue for Rust applications.
//!
//! It keeps an ordered, capacity-bounded list of toasts, lets any part of
//! the program show, update, dismiss, or remove them, purges dismissed
//! toasts after a fixed delay, and pushes every new list state to
//! subscribers. Rendering is left to the host.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  app code    │   │  app code    │   │ ToastHandle  │
//!     │ show/update  │   │dismiss/remove│   │ dismiss/upd. │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Toaster (store, one lock)                                        │
//! │  - ToastState (newest-first list, capacity cap)                   │
//! │  - Dismissals (one removal timer per closed toast)                │
//! │  - Snapshot cache (seq-numbered)                                  │
//! └──────┬──────────────────────────────┬─────────────────────────────┘
//!        │ schedule/cancel              │ after the lock is released
//!        ▼                              ▼
//! ┌──────────────────┐      ┌───────────────────────────────────────┐
//! │ Scheduler        │      │ SubscriberSet           watch channel │
//! │ Tokio | Manual   │      │ (sync fan-out)          (async view)  │
//! └────────┬─────────┘      └───┬──────────┬──────────┬─────────────┘
//!          │ on expiry          ▼          ▼          ▼
//!          └─► Expire(id)    sub1.on   sub2.on   subN.on
//!                            _snapshot _snapshot _snapshot
//! ```
//!
//! ### Lifecycle
//! ```text
//! show(req) ──► id = next_id ──► prepend { open: true } ──► truncate to max_active
//!                                                          (dropped ids: timers cancelled)
//!
//! dismiss(id) ──► open = false ──► arm timer(id, remove_delay)  (no-op if armed)
//!                                        │
//!                                        └─(remove_delay)─► purge id
//!
//! remove(id)  ──► purge id ──► cancel timer(id)
//!
//! every change ──► seq += 1 ──► Snapshot ──► subscribers + watch
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                         |
//! |-------------------|-----------------------------------------------------------------|--------------------------------------------|
//! | **Store**         | Show, update, dismiss, remove; capacity cap; delayed purge.     | [`Toaster`], [`WeakToaster`], [`ToastHandle`] |
//! | **Subscriber API**| Receive every list state, synchronously and in order.           | [`Subscribe`], [`Subscription`]            |
//! | **Timers**        | Pluggable one-shot timers keyed by toast id.                    | [`Scheduler`], [`TokioScheduler`], [`ManualScheduler`] |
//! | **Data model**    | Toasts, requests, patches, snapshots.                           | [`Toast`], [`ToastRequest`], [`ToastPatch`], [`Snapshot`] |
//! | **Errors**        | Typed construction errors.                                      | [`ToasterError`]                           |
//! | **Configuration** | Capacity and removal delay.                                     | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use toastvisor::{Config, ManualScheduler, Snapshot, ToastId, ToastPatch, ToastRequest, Toaster};
//!
//! let clock = Arc::new(ManualScheduler::<ToastId>::new());
//! let cfg = Config { max_active: 3, remove_delay: Duration::from_secs(5) };
//!
//! let toaster: Toaster = Toaster::builder(cfg)
//!     .with_scheduler(clock.clone())
//!     .build()
//!     .expect("explicit scheduler needs no runtime");
//!
//! // Render on every change.
//! let _sub = toaster.subscribe(|snap: &Snapshot| {
//!     for toast in snap {
//!         let _ = (&toast.title, toast.open);
//!     }
//! });
//!
//! let id = toaster.show(ToastRequest::titled("Uploading".to_string()));
//! toaster.update(id, ToastPatch::new().with_title("Uploaded".to_string()));
//! toaster.dismiss(Some(id));
//!
//! clock.advance(Duration::from_secs(5));
//! assert!(toaster.snapshot().is_empty());
//! ```
mod core;
mod error;
mod events;
mod scheduler;
mod subscribers;
mod sync;
mod toasts;

// ---- Public re-exports ----

pub use core::{
    Config, Toaster, ToasterBuilder, WeakToaster, DEFAULT_MAX_ACTIVE, DEFAULT_REMOVE_DELAY,
};
pub use error::ToasterError;
pub use events::{ActionKind, Snapshot};
pub use scheduler::{ManualScheduler, Scheduler, Task, TokioScheduler};
pub use subscribers::{Subscribe, SubscriberId, SubscriberSet, Subscription};
pub use toasts::{Content, Toast, ToastHandle, ToastId, ToastPatch, ToastRequest, Variant};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;

//! # Snapshot subscribers for the toastvisor store.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`]
//! registry and built-in implementations for observing the toast list.
//!
//! ## Architecture
//! ```text
//! Snapshot flow:
//!   Toaster op ── state changed ──► Snapshot{seq, cause, toasts}
//!                                        │
//!                                        ├──► SubscriberSet::emit(&Snapshot)
//!                                        │         │
//!                                        │    ┌────┴─────┬─────────┬───────┐
//!                                        │    ▼          ▼         ▼       ▼
//!                                        │  Renderer  LogWriter  Probe    ...
//!                                        │
//!                                        └──► watch channel (Toaster::watch)
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use toastvisor::{Snapshot, Subscribe};
//!
//! struct Badge;
//!
//! impl Subscribe for Badge {
//!     fn on_snapshot(&self, snapshot: &Snapshot) {
//!         let _unread = snapshot.open_count();
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod embedded;
mod set;
mod subscriber;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use set::{SubscriberId, SubscriberSet, Subscription};
pub use subscriber::Subscribe;

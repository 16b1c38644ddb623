//! # Snapshot subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for renderers, test probes,
//! loggers, or anything else that must stay in sync with a
//! [`Toaster`](crate::Toaster).
//!
//! ## Rules
//! - Delivery is **synchronous**: `on_snapshot` runs on the thread that
//!   performed the store operation, after the store lock was released.
//! - Treat the snapshot as the sole source of truth; there is no ordering
//!   guarantee across different subscribers.
//! - A subscriber never receives a snapshot older (lower `seq`) than one it
//!   already received.
//! - Panics are caught and logged; other subscribers are unaffected.
//! - Calling back into the store from `on_snapshot` is allowed. Capture a
//!   [`WeakToaster`](crate::WeakToaster) for that: a [`Toaster`](crate::Toaster)
//!   clone inside a registered subscriber keeps the store alive.
//!
//! ## Example
//! ```rust
//! use toastvisor::{Snapshot, Subscribe};
//!
//! struct Counter;
//!
//! impl Subscribe for Counter {
//!     fn on_snapshot(&self, snapshot: &Snapshot) {
//!         let _open = snapshot.open_count();
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```
//!
//! Closures taking `&Snapshot<C>` implement the trait directly.

use crate::events::Snapshot;

/// Observer of store snapshots.
pub trait Subscribe<C = String>: Send + Sync + 'static {
    /// Handles one snapshot.
    fn on_snapshot(&self, snapshot: &Snapshot<C>);

    /// Returns the subscriber name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose; override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<C, F> Subscribe<C> for F
where
    F: Fn(&Snapshot<C>) + Send + Sync + 'static,
{
    fn on_snapshot(&self, snapshot: &Snapshot<C>) {
        self(snapshot)
    }
}

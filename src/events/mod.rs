//! Store events: snapshots and the actions that produce them.
//!
//! This module groups the data handed to observers of a
//! [`Toaster`](crate::Toaster):
//!
//! ## Contents
//! - [`Snapshot`] the ordered toast list at one point in time, with `seq` and `cause`
//! - [`ActionKind`] classification of the transition that produced a snapshot
//!
//! ## Quick reference
//! - **Producer**: the store, once per state-changing operation (and once per
//!   subscription, for the initial delivery).
//! - **Consumers**: [`Subscribe`](crate::Subscribe) implementors via
//!   [`SubscriberSet`](crate::SubscriberSet), and async readers of
//!   [`Toaster::watch`](crate::Toaster::watch).

mod action;
mod snapshot;

pub use action::ActionKind;
pub use snapshot::Snapshot;

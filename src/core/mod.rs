//! Store core: state, timers, and the public handle.
//!
//! The only public API from this module is [`Toaster`] (plus its builder and
//! configuration), which owns the toast list and its removal timers.
//!
//! Internal modules:
//! - [`state`]: pure list transitions (`Action` → `Outcome`);
//! - [`dismissals`]: one removal timer per closed toast;
//! - [`toaster`]: serializes operations, applies side effects, broadcasts snapshots.

mod builder;
mod config;
mod dismissals;
mod state;
mod toaster;

pub use builder::ToasterBuilder;
pub use config::{Config, DEFAULT_MAX_ACTIVE, DEFAULT_REMOVE_DELAY};
pub use toaster::{Toaster, WeakToaster};

//! # Built-in subscribers
//!
//! These are small, self-contained implementations useful for demos and debugging.
//!
//! - [`LogWriter`]: logs every snapshot through `tracing` (demo/debug).

mod log;

pub use log::LogWriter;

//! # LogWriter: snapshot logger
//!
//! A minimal subscriber that logs every [`Snapshot`] through `tracing` at
//! `info` level. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! INFO toastvisor: [toast_add] seq=1 open=1 closing=0 head=Some(1)
//! INFO toastvisor: [toast_dismiss] seq=2 open=0 closing=1 head=Some(1)
//! INFO toastvisor: [toast_expire] seq=3 open=0 closing=0 head=None
//! ```

use crate::events::Snapshot;
use crate::subscribers::Subscribe;

/// Snapshot logging subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<C> Subscribe<C> for LogWriter {
    fn on_snapshot(&self, s: &Snapshot<C>) {
        let cause = s.cause().map_or("initial", |c| c.as_label());
        let open = s.open_count();
        tracing::info!(
            target: "toastvisor",
            seq = s.seq(),
            open,
            closing = s.len() - open,
            head = ?s.head().map(|t| t.id.get()),
            "[{cause}]"
        );
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

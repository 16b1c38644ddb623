//! # Example: basic
//!
//! Shows a toast, edits it, dismisses it, and watches it get purged.
//!
//! Shows how to:
//! - Build a [`Toaster`] on a tokio runtime.
//! - Attach the built-in [`LogWriter`] and an async `watch` reader.
//! - Drive a toast through ACTIVE → CLOSING → REMOVED.
//!
//! ## Flow
//! ```text
//! show("Uploading")    ──► [toast_add]     seq=1 open=1
//! update("Uploaded")   ──► [toast_update]  seq=2 open=1
//! show("Sync failed")  ──► [toast_add]     seq=3 open=2
//! dismiss(None)        ──► [toast_dismiss] seq=4 open=0 closing=2
//! (remove_delay)       ──► [toast_expire]  seq=5, seq=6 (empty)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example basic --features logging
//! ```

use std::{sync::Arc, time::Duration};
use toastvisor::{Config, LogWriter, Subscribe, ToastPatch, ToastRequest, Toaster, Variant};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = Config {
        max_active: 3,
        remove_delay: Duration::from_millis(500),
    };
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let toaster: Toaster = Toaster::builder(cfg).with_subscribers(subs).build()?;

    let mut rx = toaster.watch();
    let reader = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snap = rx.borrow_and_update().clone();
            println!(" ├─► seq={} toasts={}", snap.seq(), snap.len());
            if snap.seq() > 0 && snap.is_empty() {
                break;
            }
        }
    });

    let upload = toaster.toast(
        ToastRequest::titled("Uploading".to_string())
            .with_description("report.pdf".to_string()),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;

    upload.update(ToastPatch::new().with_title("Uploaded".to_string()));
    tokio::time::sleep(Duration::from_millis(100)).await;

    let failed = toaster.show(
        ToastRequest::titled("Sync failed".to_string()).with_variant(Variant::Destructive),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;

    toaster.dismiss(None);
    println!(" ├─► pending removals: {}", toaster.pending_removals());

    reader.await?;
    println!(" └─► done (last failed id = {failed})");
    Ok(())
}

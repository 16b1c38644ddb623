use std::sync::Arc;

use crate::{
    core::Config,
    error::ToasterError,
    scheduler::{Scheduler, TokioScheduler},
    subscribers::Subscribe,
    toasts::{Content, ToastId},
};
use super::toaster::Toaster;

/// Builder for constructing a Toaster with optional collaborators.
pub struct ToasterBuilder<C = String> {
    cfg: Config,
    scheduler: Option<Arc<dyn Scheduler<ToastId>>>,
    subscribers: Vec<Arc<dyn Subscribe<C>>>,
}

impl<C: Content> ToasterBuilder<C> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            scheduler: None,
            subscribers: Vec::new(),
        }
    }

    /// Sets the timer source for delayed removals.
    ///
    /// Defaults to a [`TokioScheduler`] on the current runtime. Pass a
    /// [`ManualScheduler`](crate::ManualScheduler) for deterministic tests.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler<ToastId>>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Sets subscribers registered for the whole lifetime of the store.
    ///
    /// Use [`Toaster::subscribe`] instead when the subscriber must be able to
    /// unsubscribe.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe<C>>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds and returns the Toaster.
    ///
    /// Fails with [`ToasterError::NoRuntime`] only when no scheduler was given
    /// and no tokio runtime is running.
    pub fn build(self) -> Result<Toaster<C>, ToasterError> {
        let scheduler: Arc<dyn Scheduler<ToastId>> = match self.scheduler {
            Some(scheduler) => scheduler,
            None => Arc::new(TokioScheduler::<ToastId>::new()?),
        };

        let toaster = Toaster::with_scheduler(self.cfg, scheduler);
        for sub in self.subscribers {
            toaster.subscribe_arc(sub).detach();
        }

        tracing::debug!(
            max_active = toaster.config().max_active_clamped(),
            remove_delay = ?toaster.config().remove_delay,
            subscribers = toaster.subscriber_count(),
            "toaster built"
        );
        Ok(toaster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Snapshot;
    use crate::scheduler::ManualScheduler;
    use std::sync::Mutex;

    #[test]
    fn test_build_registers_lifetime_subscribers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let sub: Arc<dyn Subscribe> =
            Arc::new(move |snap: &Snapshot| s.lock().unwrap().push(snap.seq()));

        let toaster = ToasterBuilder::new(Config::default())
            .with_scheduler(Arc::new(ManualScheduler::<ToastId>::new()))
            .with_subscribers(vec![sub])
            .build()
            .unwrap();

        assert_eq!(toaster.subscriber_count(), 1);
        toaster.show(crate::toasts::ToastRequest::titled("A".to_string()));
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_build_without_runtime_or_scheduler_fails() {
        let res = ToasterBuilder::<String>::new(Config::default()).build();
        assert!(matches!(res, Err(ToasterError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_build_inside_runtime_uses_tokio_timers() {
        let toaster = ToasterBuilder::<String>::new(Config::stack(3)).build().unwrap();
        assert_eq!(toaster.config().max_active_clamped(), 3);
        assert_eq!(toaster.pending_removals(), 0);
    }
}

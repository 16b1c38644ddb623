//! # Store configuration.
//!
//! Provides [`Config`], the settings a [`Toaster`](crate::Toaster) is built with.
//!
//! ## Sentinel values
//! - `max_active = 0` → clamped to 1 (a new toast must always fit)

use std::time::Duration;

/// Default removal delay after a dismiss: long enough to outlast any exit
/// animation, so in practice closed toasts linger until explicitly removed
/// or pushed out by newer ones.
pub const DEFAULT_REMOVE_DELAY: Duration = Duration::from_millis(1_000_000);

/// Default maximum list length.
pub const DEFAULT_MAX_ACTIVE: usize = 1;

/// Configuration for a toast store.
///
/// ## Field semantics
/// - `max_active`: maximum number of toasts kept in the list, open or closing (min 1)
/// - `remove_delay`: time between `dismiss` and the automatic purge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of toasts in the list.
    ///
    /// Adding beyond the cap drops the oldest entries from the list entirely
    /// (their removal timers are cancelled). `1` keeps only the newest toast.
    pub max_active: usize,

    /// Delay between marking a toast closed and purging it from the list.
    ///
    /// Fixed per store; there is no per-call override.
    pub remove_delay: Duration,
}

impl Config {
    /// Returns `max_active` clamped to a minimum of 1.
    #[inline]
    pub fn max_active_clamped(&self) -> usize {
        self.max_active.max(1)
    }

    /// Convenience: a config keeping a stack of `n` toasts.
    pub fn stack(n: usize) -> Self {
        Self {
            max_active: n,
            ..Self::default()
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `max_active = 1` (only the newest toast is kept)
    /// - `remove_delay = 1_000_000ms`
    fn default() -> Self {
        Self {
            max_active: DEFAULT_MAX_ACTIVE,
            remove_delay: DEFAULT_REMOVE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.max_active, 1);
        assert_eq!(cfg.remove_delay, Duration::from_millis(1_000_000));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cfg = Config::stack(0);
        assert_eq!(cfg.max_active_clamped(), 1);
        assert_eq!(Config::stack(3).max_active_clamped(), 3);
    }
}

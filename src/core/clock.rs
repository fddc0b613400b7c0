//! Time source for record timestamps
//!
//! Timestamps are nanoseconds since the Unix epoch as `u64`.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of "now"
pub trait Clock: Send + Sync {
    /// Current time in nanoseconds since the Unix epoch
    fn now(&self) -> u64;
}

/// Wall clock that never goes backwards
///
/// Readings are clamped to the largest value returned so far, so a system
/// clock step backwards cannot produce an `updatedAt` earlier than a prior
/// `createdAt`.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let wall = Utc::now()
            .timestamp_nanos_opt()
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(0);
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}

/// Manually driven clock
///
/// Returns whatever value it was last set to. Useful wherever a test needs
/// deterministic timestamps.
#[derive(Debug, Default)]
pub struct FixedClock {
    value: AtomicU64,
}

impl FixedClock {
    /// Create a clock reading `value`
    pub fn new(value: u64) -> Self {
        Self {
            value: AtomicU64::new(value),
        }
    }

    /// Set the current reading
    pub fn set(&self, value: u64) {
        self.value.store(value, Ordering::SeqCst);
    }

    /// Move the reading forward by `delta`
    pub fn advance(&self, delta: u64) {
        self.value.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_non_decreasing() {
        let clock = SystemClock::new();
        let mut last = clock.now();
        assert!(last > 0);
        for _ in 0..1000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(10);
        assert_eq!(clock.now(), 10);
        clock.advance(5);
        assert_eq!(clock.now(), 15);
        clock.set(3);
        assert_eq!(clock.now(), 3);
    }
}

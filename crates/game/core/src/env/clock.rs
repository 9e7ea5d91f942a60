//! Time source for the engine.
//!
//! The engine is tick driven: the host passes the current instant into
//! every update and all phase transitions compare that instant with stored
//! phase starts. [`Clock`] is the seam hosts use to produce that instant.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic instant in milliseconds since an arbitrary origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// `self + millis`, saturating.
    pub const fn add_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Milliseconds from `earlier` to `self`, zero if `earlier` is later.
    pub const fn millis_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// True once at least `duration` ms have passed since `start`.
    pub const fn has_elapsed(&self, start: Timestamp, duration: u64) -> bool {
        self.millis_since(start) >= duration
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Produces the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock advanced by hand. Used by tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: AtomicU64::new(start.0),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.millis.store(now.0, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) -> Timestamp {
        let previous = self.millis.fetch_add(millis, Ordering::SeqCst);
        Timestamp(previous.saturating_add(millis))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_inclusive() {
        let start = Timestamp(100);
        assert!(!Timestamp(499).has_elapsed(start, 400));
        assert!(Timestamp(500).has_elapsed(start, 400));
        assert_eq!(Timestamp(50).millis_since(start), 0);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(Timestamp(10));
        assert_eq!(clock.advance(5), Timestamp(15));
        clock.set(Timestamp(400));
        assert_eq!(clock.now(), Timestamp(400));
    }
}

//! Time source for the generators

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in nanoseconds since the Unix epoch
///
/// [`crate::generators::uniq_with`] takes a clock so tests can pin the
/// timestamp instead of reading the wall clock.
pub trait Clock {
    /// Nanoseconds elapsed since `1970-01-01T00:00:00Z`
    fn unix_nanos(&self) -> u128;
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_nanos(&self) -> u128 {
        // A clock set before 1970 reads as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos())
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u128);

impl Clock for FixedClock {
    fn unix_nanos(&self) -> u128 {
        self.0
    }
}

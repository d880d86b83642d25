//! Wall-clock timing of a single calculation.

use std::time::{Duration, Instant};

/// Start and end instants of one timed call.
///
/// Each computation produces its own record; nothing is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingRecord {
    start: Instant,
    end: Instant,
}

impl TimingRecord {
    /// Build a record from two instants.
    #[must_use]
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// A zero-length record, as if no calculation had run.
    #[must_use]
    pub fn empty() -> Self {
        let now = Instant::now();
        Self::new(now, now)
    }

    /// Instant the call started.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Instant the call returned.
    #[must_use]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// `end - start`, or zero if the instants are reversed.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Elapsed time in nanoseconds.
    #[must_use]
    pub fn as_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for TimingRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Run `f` and return its output with the time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, TimingRecord) {
    let start = Instant::now();
    let output = f();
    let end = Instant::now();
    (output, TimingRecord::new(start, end))
}

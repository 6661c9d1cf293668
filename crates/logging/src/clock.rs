//! crates/logging/src/clock.rs
//! Time sources the logger stamps each line with.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the elapsed time written at the start of every log line.
///
/// The logger reads the clock once per emitted line and never for filtered
/// messages. Values should be non-decreasing, though the logger itself does
/// not depend on that.
pub trait Clock: Send + Sync {
    /// Returns the time elapsed since the clock's epoch.
    fn elapsed(&self) -> Duration;
}

impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

impl<C> Clock for Box<C>
where
    C: Clock + ?Sized,
{
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Clock measuring time since it was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Starts a clock whose epoch is `start`.
    #[must_use]
    pub const fn starting_at(start: Instant) -> Self {
        Self { start }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that always reports the same value.
///
/// Used to produce reproducible timestamps in tests.
///
/// # Examples
///
/// ```
/// use logging::{Clock, ConstantClock};
/// use std::time::Duration;
///
/// let clock = ConstantClock::from_millis(250);
/// assert_eq!(clock.elapsed(), Duration::from_millis(250));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstantClock {
    value: Duration,
}

impl ConstantClock {
    /// Creates a clock fixed at `value`.
    #[must_use]
    pub const fn new(value: Duration) -> Self {
        Self { value }
    }

    /// Creates a clock fixed at `millis` milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Clock for ConstantClock {
    fn elapsed(&self) -> Duration {
        self.value
    }
}

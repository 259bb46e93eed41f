//! Time abstraction traits for platform-agnostic timing.
//!
//! Debounce settling is measured against a monotonic clock supplied by the
//! host. Implement these traits for your platform's instant and duration
//! types (e.g. `embassy_time::Instant`, a hardware tick counter, or a plain
//! millisecond counter).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must be monotonic: `duration_since` is only ever called with an
/// `earlier` instant that was observed before `self`.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

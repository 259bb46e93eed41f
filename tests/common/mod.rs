//! Shared test infrastructure for button-fusion integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_fusion::{InputPin, Level, PullMode, TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock pin sampling a level the test drives through a shared `Cell`.
///
/// The debouncer takes ownership of the pin, so tests keep the `Cell` and
/// flip it between `update` calls to simulate electrical transitions.
pub struct MockPin<'a> {
    level: &'a Cell<Level>,
    applied_mode: Cell<Option<PullMode>>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<Level>) -> Self {
        Self {
            level,
            applied_mode: Cell::new(None),
        }
    }
}

impl InputPin for MockPin<'_> {
    fn set_mode(&mut self, mode: PullMode) {
        self.applied_mode.set(Some(mode));
    }

    fn read(&mut self) -> Level {
        self.level.get()
    }
}

//! Clock adapters for time operations.
//!
//! `SystemClock` reads the wall clock. `FixedClock` always reports the same
//! time, which keeps evaluations reproducible.
//!
//! See `MockClock` (in `crate::infrastructure::mocks`) for a clock tests can
//! move. It is available with the `test-helpers` feature or in test builds.

use crate::application::ports::Clock;
use std::time::SystemTime;

/// System clock implementation using `SystemTime::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

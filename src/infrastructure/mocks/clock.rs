//! Mock clock for testing.

use crate::application::ports::Clock;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// Mock clock for testing.
///
/// Allows tests to move wall-clock time explicitly, so the temporal gate can
/// be exercised without sleeping.
///
/// All clones share the same underlying time value.
#[derive(Debug, Clone)]
pub struct MockClock {
    current_time: Arc<Mutex<SystemTime>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific time.
    pub fn new(start: SystemTime) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward by a duration.
    pub fn advance(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned");
        *time += duration;
    }

    /// Move the clock backward by a duration.
    ///
    /// Phones may correct their clock backwards.
    pub fn rewind(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned");
        *time -= duration;
    }

    /// Set the clock to a specific time.
    pub fn set(&self, now: SystemTime) {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned") = now;
    }
}

impl Clock for MockClock {
    fn now(&self) -> SystemTime {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn test_clones_share_time() {
        let start = UNIX_EPOCH + Duration::from_secs(500);
        let clock = MockClock::new(start);
        let clone = clock.clone();

        let handle = std::thread::spawn(move || clone.advance(Duration::from_secs(5)));
        handle.join().unwrap();

        assert_eq!(clock.now(), start + Duration::from_secs(5));

        clock.rewind(Duration::from_secs(10));
        assert_eq!(clock.now(), start - Duration::from_secs(5));

        clock.set(UNIX_EPOCH);
        assert_eq!(clock.now(), UNIX_EPOCH);
    }
}

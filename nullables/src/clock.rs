//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use vws_types::Timestamp;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_millis: u64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.current.get())
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }

    /// Set the time to a specific value.
    pub fn set(&self, millis: u64) {
        self.current.set(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_when_told() {
        let clock = NullClock::new(1_000);
        assert_eq!(clock.now().as_millis(), 1_000);
        clock.advance(250);
        assert_eq!(clock.now().as_millis(), 1_250);
        clock.set(7);
        assert_eq!(clock.now(), Timestamp::from_millis(7));
    }
}

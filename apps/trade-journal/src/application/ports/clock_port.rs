//! Clock Port (Driven Port)

use std::sync::RwLock;

use crate::domain::shared::Timestamp;

/// Source of the current time.
pub trait ClockPort: Send + Sync {
    /// Current time.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<Timestamp>,
}

impl FixedClock {
    /// Create a clock reading `now`.
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Move the clock to `now`.
    pub fn set(&self, now: Timestamp) {
        *self
            .now
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = now;
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> Timestamp {
        *self
            .now
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reads_what_was_set() {
        let start = Timestamp::parse("2026-05-01T10:00:00Z").unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        let later = Timestamp::parse("2026-05-01T11:00:00Z").unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}

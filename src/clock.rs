//! Sources of "now" in an explicit timezone.

use chrono::Utc;

use crate::ParseError;
use crate::instant::{CalendarInstant, LocalDateTime, UtcOffset};

/// Abstraction over the current local time, so callers stay deterministic in tests.
pub trait Clock {
    /// # Errors
    /// Returns a `ParseError` if the clock reads a date outside years 1..=9999.
    fn now(&self) -> Result<LocalDateTime, ParseError>;

    /// # Errors
    /// Same as [`Clock::now`].
    fn today(&self) -> Result<CalendarInstant, ParseError> {
        self.now().map(|now| now.date())
    }
}

/// Reads the system clock and shifts it by a fixed UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub const fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(UtcOffset::utc())
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<LocalDateTime, ParseError> {
        LocalDateTime::from_utc(Utc::now(), self.offset)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: LocalDateTime,
}

impl FixedClock {
    pub const fn new(now: LocalDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<LocalDateTime, ParseError> {
        Ok(self.now)
    }
}

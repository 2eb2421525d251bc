mod clock;
mod consts;
mod date_math;
mod fixed;
mod format;
mod instant;
mod prelude;
mod report;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date_math::{
    YearDayDelta, add_years, days_between, elapsed, format_ordinal, next_anniversary_of,
    normalize, years_and_days_until, years_between,
};
pub use fixed::{FixedDates, FixedDatesError};
pub use format::{format_clock_time, group_thousands, ordinal_suffix};
pub use instant::{CalendarInstant, LocalDateTime, UtcOffset, Weekday};
pub use report::{Document, Section, Snapshot, Upcoming};
pub use types::{Day, Month, MonthDay, Year, is_leap_year};

use crate::prelude::*;

/// Rejected calendar input: malformed text or an out-of-range component.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

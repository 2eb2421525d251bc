use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_COMMON, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A calendar year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// Const counterpart of [`Year::new`], `None` when out of range.
    pub const fn checked(value: u16) -> Option<Self> {
        if value < MIN_YEAR || value > MAX_YEAR {
            return None;
        }
        match NonZeroU16::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this is a Gregorian leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Shifts the year by a signed amount, `None` if the result leaves the valid range.
    pub fn checked_add(self, years: i32) -> Option<Self> {
        let shifted = i32::from(self.get()).checked_add(years)?;
        u16::try_from(shifted).ok().and_then(|y| Self::new(y).ok())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub const fn checked(value: u8) -> Option<Self> {
        if value > MAX_MONTH {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, validated against its year and month on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Const counterpart of [`Day::new`], `None` when the day is not in the month.
    pub const fn checked(value: u8, year: u16, month: u8) -> Option<Self> {
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recurring (month, day) pair, such as the date of an anniversary.
///
/// February 29 is accepted. In common years it resolves to February 28,
/// see [`MonthDay::in_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when the pair
    /// does not occur in any year.
    pub fn new(month: u8, day: u8) -> Result<Self, ParseError> {
        let month_typed = Month::new(month)?;
        let longest = if month == FEBRUARY {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        };
        if day == 0 || day > longest {
            return Err(ParseError::InvalidDay {
                month,
                day,
                year: 0,
            });
        }
        Ok(Self {
            month: month_typed,
            day,
        })
    }

    /// The month and day of a date that is already valid.
    pub const fn from_date_parts(month: Month, day: Day) -> Self {
        Self {
            month,
            day: day.get(),
        }
    }

    pub const fn month(self) -> Month {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn is_leap_day(self) -> bool {
        self.month.get() == FEBRUARY && self.day == FEBRUARY_DAYS_LEAP
    }

    /// The day this pair falls on in `year`. Feb 29 becomes Feb 28 in common years.
    pub fn in_year(self, year: Year) -> Day {
        let day = if self.is_leap_day() && !year.is_leap() {
            FEBRUARY_DAYS_COMMON
        } else {
            self.day
        };
        // day never exceeds the month length after the leap-day clamp
        Day(NonZeroU8::new(day).unwrap_or(NonZeroU8::MIN))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month.get(), self.day)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

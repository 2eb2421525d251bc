//! Day-resolution calendar instants and local wall-clock times.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_ERA, MAX_OFFSET_MINUTES, UNIX_EPOCH_DAY_OFFSET, UNIX_EPOCH_WEEKDAY,
    WEEKDAY_NAMES,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::ParseError;

/// A calendar day with no time-of-day component.
///
/// Equality and ordering are by calendar day, so two instants are equal iff they
/// name the same day in the local reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarInstant {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarInstant {
    /// # Errors
    /// Returns a `ParseError` if any component is out of range for the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Const counterpart of [`CalendarInstant::new`], `None` for an invalid date.
    pub const fn checked(year: u16, month: u8, day: u8) -> Option<Self> {
        match (
            Year::checked(year),
            Month::checked(month),
            Day::checked(day, year, month),
        ) {
            (Some(year), Some(month), Some(day)) => Some(Self { year, month, day }),
            _ => None,
        }
    }

    /// Builds an instant from components that are already validated.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Signed count of days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        let month = i64::from(self.month.get());
        let day = i64::from(self.day.get());
        // Years start in March so the leap day sits at the end of the cycle
        let year = i64::from(self.year.get()) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = (month + 9) % 12;
        let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY_OFFSET
    }

    /// Inverse of [`CalendarInstant::day_number`]; `None` outside years 1..=9999.
    pub fn from_day_number(days: i64) -> Option<Self> {
        let shifted = days.checked_add(UNIX_EPOCH_DAY_OFFSET)?;
        let era = shifted.div_euclid(DAYS_PER_ERA);
        let day_of_era = shifted - era * DAYS_PER_ERA;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);

        let year = u16::try_from(year).ok()?;
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        Self::new(year, month, day).ok()
    }

    /// Moves by a signed number of days, `None` if the result leaves years 1..=9999.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Midnight of this day as a [`LocalDateTime`].
    pub const fn at_midnight(&self) -> LocalDateTime {
        LocalDateTime {
            date: *self,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarInstant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_u16(year)?;
                let month = Self::parse_u8(month)?;
                let day = Self::parse_u8(day)?;
                Self::new(year, month, day)
            }
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            ))),
        }
    }
}

impl Serialize for CalendarInstant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarInstant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    fn from_day_number(days: i64) -> Self {
        // rem_euclid keeps the index in 0..7 for days before 1970
        let index = (days + UNIX_EPOCH_WEEKDAY).rem_euclid(7);
        Self::ALL[usize::try_from(index).unwrap_or_default()]
    }

    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed offset from UTC, limited to ±18 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct UtcOffset(FixedOffset);

impl UtcOffset {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the offset exceeds ±18 hours.
    pub fn from_minutes(minutes: i16) -> Result<Self, ParseError> {
        let out_of_range = || {
            ParseError::InvalidFormat(format!(
                "UTC offset of {minutes} minutes is beyond ±{MAX_OFFSET_MINUTES}"
            ))
        };
        if minutes.unsigned_abs() > MAX_OFFSET_MINUTES.unsigned_abs() {
            return Err(out_of_range());
        }
        FixedOffset::east_opt(i32::from(minutes) * 60)
            .map(Self)
            .ok_or_else(out_of_range)
    }

    pub fn minutes(self) -> i16 {
        // from_minutes bounds the offset to ±1080 minutes
        i16::try_from(self.0.local_minus_utc() / 60).unwrap_or_default()
    }

    pub const fn fixed(self) -> FixedOffset {
        self.0
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl TryFrom<i16> for UtcOffset {
    type Error = ParseError;

    fn try_from(minutes: i16) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<UtcOffset> for i16 {
    fn from(offset: UtcOffset) -> Self {
        offset.minutes()
    }
}

/// A wall-clock time in the local reference timezone, millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalDateTime {
    date: CalendarInstant,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl LocalDateTime {
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if a time component is out of range.
    pub fn new(
        date: CalendarInstant,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, ParseError> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(ParseError::InvalidFormat(format!(
                "Invalid time of day {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            )));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Maps a chrono wall-clock time onto the validated calendar.
    ///
    /// # Errors
    /// Returns a `ParseError` if the date falls outside years 1..=9999.
    pub fn from_naive(naive: NaiveDateTime) -> Result<Self, ParseError> {
        let year = u16::try_from(naive.year()).map_err(|_| {
            ParseError::InvalidFormat(format!("Year {} is outside 1-9999", naive.year()))
        })?;
        // chrono keeps month, day and time fields within their ranges
        let month = u8::try_from(naive.month()).unwrap_or_default();
        let day = u8::try_from(naive.day()).unwrap_or_default();
        let date = CalendarInstant::new(year, month, day)?;

        let hour = u8::try_from(naive.hour()).unwrap_or_default();
        let minute = u8::try_from(naive.minute()).unwrap_or_default();
        let second = u8::try_from(naive.second()).unwrap_or_default();
        // A leap second reports nanosecond >= 1e9; it folds into the last millisecond
        let millisecond = u16::try_from((naive.nanosecond() / 1_000_000).min(999)).unwrap_or_default();
        Self::new(date, hour, minute, second, millisecond)
    }

    /// Local time at `offset` for a UTC instant.
    ///
    /// # Errors
    /// Returns a `ParseError` if the local date falls outside years 1..=9999.
    pub fn from_utc(instant: DateTime<Utc>, offset: UtcOffset) -> Result<Self, ParseError> {
        Self::from_naive(instant.with_timezone(&offset.fixed()).naive_local())
    }

    /// Converts milliseconds since the Unix epoch into local time at `offset`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the timestamp is out of chrono's range
    /// or the local date falls outside years 1..=9999.
    pub fn from_unix_millis(millis: i64, offset: UtcOffset) -> Result<Self, ParseError> {
        let instant = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| ParseError::InvalidFormat(format!("Timestamp out of range: {millis}")))?;
        Self::from_utc(instant, offset)
    }

    pub const fn date(&self) -> CalendarInstant {
        self.date
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }
}

impl From<CalendarInstant> for LocalDateTime {
    fn from(date: CalendarInstant) -> Self {
        date.at_midnight()
    }
}

impl From<LocalDateTime> for CalendarInstant {
    fn from(value: LocalDateTime) -> Self {
        value.date
    }
}

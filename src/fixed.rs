use serde::{Deserialize, Serialize};

use crate::consts::{CENTENNIAL_YEARS, EPOCH_YMD, TARGET_YMD};
use crate::date_math::{self, YearDayDelta};
use crate::instant::CalendarInstant;
use crate::types::MonthDay;
use crate::ParseError;

/// The epoch and its milestone target, read-only once constructed.
/// `epoch` is always strictly before `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FixedDates {
    epoch: CalendarInstant,
    target: CalendarInstant,
    #[serde(skip)]
    anniversary: MonthDay,
}

/// Error type for building [`FixedDates`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedDatesError {
    /// Epoch is not before target.
    #[error("Invalid fixed dates: epoch ({epoch}) must be before target ({target})")]
    InvalidRange {
        epoch: CalendarInstant,
        target: CalendarInstant,
    },

    /// Error building one of the dates.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FixedDates {
    /// # Errors
    /// Returns `FixedDatesError::InvalidRange` if `epoch >= target`.
    pub fn new(epoch: CalendarInstant, target: CalendarInstant) -> Result<Self, FixedDatesError> {
        if epoch >= target {
            return Err(FixedDatesError::InvalidRange { epoch, target });
        }
        Ok(Self::from_checked(epoch, target))
    }

    const fn from_checked(epoch: CalendarInstant, target: CalendarInstant) -> Self {
        Self {
            epoch,
            target,
            anniversary: MonthDay::from_date_parts(epoch.month_typed(), epoch.day_typed()),
        }
    }

    /// Pairs `epoch` with the same day one hundred years later.
    ///
    /// # Errors
    /// Returns `FixedDatesError::Parse` if the centennial is past year 9999.
    pub fn centennial_of(epoch: CalendarInstant) -> Result<Self, FixedDatesError> {
        let target = date_math::add_years(epoch, i32::from(CENTENNIAL_YEARS)).ok_or(
            ParseError::InvalidYear(epoch.year().saturating_add(CENTENNIAL_YEARS)),
        )?;
        Self::new(epoch, target)
    }

    pub const fn epoch(&self) -> CalendarInstant {
        self.epoch
    }

    pub const fn target(&self) -> CalendarInstant {
        self.target
    }

    /// The recurring month and day of the epoch.
    pub const fn anniversary(&self) -> MonthDay {
        self.anniversary
    }

    /// Full years and days elapsed since the epoch.
    pub fn age_on(&self, today: CalendarInstant) -> YearDayDelta {
        date_math::elapsed(self.epoch, today)
    }

    pub fn next_anniversary(&self, today: CalendarInstant) -> Option<CalendarInstant> {
        date_math::next_anniversary_of(self.anniversary(), today)
    }

    pub fn days_until_next_anniversary(&self, today: CalendarInstant) -> Option<i64> {
        self.next_anniversary(today)
            .map(|next| date_math::days_between(today, next))
    }

    /// Years and days left until the target, counted forward from `today`.
    pub fn countdown(&self, today: CalendarInstant) -> YearDayDelta {
        date_math::years_and_days_until(today, self.target)
    }
}

// Evaluated at compile time, so a bad constant fails the build instead of panicking.
const INDEPENDENCE_CENTENNIAL: FixedDates = {
    let (ey, em, ed) = EPOCH_YMD;
    let (ty, tm, td) = TARGET_YMD;
    let (Some(epoch), Some(target)) = (
        CalendarInstant::checked(ey, em, ed),
        CalendarInstant::checked(ty, tm, td),
    ) else {
        panic!("EPOCH_YMD and TARGET_YMD must be calendar dates");
    };
    assert!(ymd_before(EPOCH_YMD, TARGET_YMD), "EPOCH_YMD must precede TARGET_YMD");
    FixedDates::from_checked(epoch, target)
};

const fn ymd_before(a: (u16, u8, u8), b: (u16, u8, u8)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && (a.1 < b.1 || (a.1 == b.1 && a.2 < b.2)))
}

impl Default for FixedDates {
    fn default() -> Self {
        INDEPENDENCE_CENTENNIAL
    }
}

impl<'de> Deserialize<'de> for FixedDates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            epoch: CalendarInstant,
            target: CalendarInstant,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.epoch, raw.target).map_err(serde::de::Error::custom)
    }
}

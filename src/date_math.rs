//! Pure date arithmetic over [`CalendarInstant`] values.
//!
//! Nothing here reads the clock. Callers pass "now" in explicitly, usually via
//! [`crate::Clock::today`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::ordinal_suffix;
use crate::instant::{CalendarInstant, LocalDateTime};
use crate::prelude::*;
use crate::types::{Day, MonthDay, Year};

/// Whole years and whole days between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{years} years and {days} days")]
pub struct YearDayDelta {
    pub years: i32,
    pub days: i64,
}

/// Strips the time of day, leaving the local calendar day.
pub const fn normalize(instant: LocalDateTime) -> CalendarInstant {
    instant.date()
}

/// Full years elapsed from `start` to `end`.
///
/// The plain year difference, less one when `end`'s (month, day) comes before
/// `start`'s. Negative spans follow the same rule, and a Feb 29 start is
/// compared as an ordinary month/day.
pub fn years_between(start: CalendarInstant, end: CalendarInstant) -> i32 {
    let years = i32::from(end.year()) - i32::from(start.year());
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years - 1
    } else {
        years
    }
}

/// Whole days from `start` to `end`, floored toward negative infinity.
pub fn days_between(start: CalendarInstant, end: CalendarInstant) -> i64 {
    // Both sides are midnight, so the day-number difference is already the floor.
    end.day_number() - start.day_number()
}

/// Elapsed years and days, each computed on its own.
pub fn elapsed(start: CalendarInstant, end: CalendarInstant) -> YearDayDelta {
    YearDayDelta {
        years: years_between(start, end),
        days: days_between(start, end),
    }
}

/// Renders an instant as e.g. `14th August, 1947`.
pub fn format_ordinal(instant: CalendarInstant) -> String {
    let day = instant.day();
    format!(
        "{day}{} {}, {}",
        ordinal_suffix(day),
        instant.month_typed().name(),
        instant.year()
    )
}

/// The same month and day `years` later. Feb 29 lands on Feb 28 in common years.
///
/// Returns `None` if the result falls outside years 1..=9999.
pub fn add_years(instant: CalendarInstant, years: i32) -> Option<CalendarInstant> {
    let year = instant.year_typed().checked_add(years)?;
    let month_day = MonthDay::new(instant.month(), instant.day()).ok()?;
    Some(occurrence_in(month_day, year))
}

/// First occurrence of `month_day` on or after `from`.
///
/// Returns `None` only when that occurrence would be past year 9999.
pub fn next_anniversary_of(month_day: MonthDay, from: CalendarInstant) -> Option<CalendarInstant> {
    let this_year = occurrence_in(month_day, from.year_typed());
    if from <= this_year {
        return Some(this_year);
    }
    let next_year = from.year_typed().checked_add(1)?;
    Some(occurrence_in(month_day, next_year))
}

/// Countdown from `from` to `target` as whole years plus remaining days.
///
/// Walks forward from `from` one calendar year at a time and keeps the largest
/// year count that does not pass `target`. The remainder is counted with
/// [`days_between`]. When `target` is before `from` the result is zero years
/// and a negative day count.
pub fn years_and_days_until(from: CalendarInstant, target: CalendarInstant) -> YearDayDelta {
    if target < from {
        debug!(%from, %target, "target precedes start; no whole years to count");
        return YearDayDelta {
            years: 0,
            days: days_between(from, target),
        };
    }

    let max_steps = i32::from(target.year()) - i32::from(from.year()) + 1;
    let mut years = 0;
    let mut reached = from;
    for step in 1..=max_steps {
        // Each candidate comes from `from` itself so a Feb 28 clamp never drifts
        let Some(candidate) = add_years(from, step) else {
            debug!(%from, step, "year ceiling reached during forward walk");
            break;
        };
        if candidate > target {
            break;
        }
        years = step;
        reached = candidate;
    }

    YearDayDelta {
        years,
        days: days_between(reached, target),
    }
}

fn occurrence_in(month_day: MonthDay, year: Year) -> CalendarInstant {
    let day: Day = month_day.in_year(year);
    CalendarInstant::from_parts(year, month_day.month(), day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarInstant {
        CalendarInstant::new(year, month, day).unwrap()
    }

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::new(month, day).unwrap()
    }

    #[test]
    fn test_normalize_discards_time_of_day() {
        let day = date(2026, 10, 19);
        let evening = LocalDateTime::new(day, 23, 59, 59, 999).unwrap();
        let morning = LocalDateTime::new(day, 0, 0, 0, 1).unwrap();
        assert_eq!(normalize(evening), day);
        assert_eq!(normalize(evening), normalize(morning));
        assert_eq!(days_between(normalize(evening), normalize(morning)), 0);
    }

    #[test]
    fn test_same_instant_is_zero() {
        for instant in [date(1947, 8, 14), date(2024, 2, 29), date(9999, 12, 31)] {
            assert_eq!(days_between(instant, instant), 0);
            assert_eq!(years_between(instant, instant), 0);
        }
    }

    #[test]
    fn test_years_between_anniversary_boundary() {
        let epoch = date(1947, 8, 14);
        assert_eq!(years_between(epoch, date(2024, 8, 13)), 76);
        assert_eq!(years_between(epoch, date(2024, 8, 14)), 77);
        assert_eq!(years_between(epoch, date(2024, 12, 31)), 77);
        assert_eq!(years_between(epoch, date(1948, 1, 1)), 0);
    }

    #[test]
    fn test_years_between_reversed() {
        let epoch = date(1947, 8, 14);
        assert_eq!(years_between(date(2024, 8, 14), epoch), -77);
        // 2024-08-15 -> 1947-08-14: (8, 14) < (8, 15), so one less
        assert_eq!(years_between(date(2024, 8, 15), epoch), -78);
        assert_eq!(years_between(date(1947, 8, 15), epoch), -1);
    }

    #[test]
    fn test_years_between_leap_day_start() {
        let leap = date(2024, 2, 29);
        assert_eq!(years_between(leap, date(2025, 2, 28)), 0);
        assert_eq!(years_between(leap, date(2025, 3, 1)), 1);
        assert_eq!(years_between(leap, date(2028, 2, 29)), 4);
    }

    #[test]
    fn test_days_between_known_spans() {
        let epoch = date(1947, 8, 14);
        assert_eq!(days_between(epoch, date(1947, 8, 15)), 1);
        assert_eq!(days_between(epoch, date(1948, 8, 14)), 366);
        assert_eq!(days_between(epoch, date(2025, 8, 14)), 28_490);
        assert_eq!(days_between(epoch, date(2047, 8, 14)), 36_525);
    }

    #[test]
    fn test_days_between_antisymmetric() {
        let pairs = [
            (date(1947, 8, 14), date(2026, 10, 19)),
            (date(2024, 2, 28), date(2024, 3, 1)),
            (date(1, 1, 1), date(9999, 12, 31)),
        ];
        for (a, b) in pairs {
            assert_eq!(days_between(a, b), -days_between(b, a), "{a} / {b}");
            assert!(days_between(b, a) < 0);
        }
    }

    #[test]
    fn test_elapsed_days_independent_of_years() {
        let delta = elapsed(date(1947, 8, 14), date(2024, 8, 13));
        assert_eq!(delta.years, 76);
        assert_eq!(delta.days, days_between(date(1947, 8, 14), date(2024, 8, 13)));
        assert_eq!(delta.to_string(), format!("76 years and {} days", delta.days));
    }

    #[test]
    fn test_format_ordinal() {
        struct TestCase {
            date: CalendarInstant,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                date: date(1947, 8, 14),
                expected: "14th August, 1947",
            },
            TestCase {
                date: date(2025, 1, 1),
                expected: "1st January, 2025",
            },
            TestCase {
                date: date(2025, 3, 2),
                expected: "2nd March, 2025",
            },
            TestCase {
                date: date(2025, 5, 3),
                expected: "3rd May, 2025",
            },
            TestCase {
                date: date(2025, 6, 11),
                expected: "11th June, 2025",
            },
            TestCase {
                date: date(2025, 7, 12),
                expected: "12th July, 2025",
            },
            TestCase {
                date: date(2025, 9, 13),
                expected: "13th September, 2025",
            },
            TestCase {
                date: date(2025, 10, 21),
                expected: "21st October, 2025",
            },
            TestCase {
                date: date(2025, 11, 22),
                expected: "22nd November, 2025",
            },
            TestCase {
                date: date(2025, 12, 23),
                expected: "23rd December, 2025",
            },
            TestCase {
                date: date(2025, 12, 31),
                expected: "31st December, 2025",
            },
        ];

        for case in &cases {
            assert_eq!(format_ordinal(case.date), case.expected);
        }
    }

    #[test]
    fn test_next_anniversary_on_the_day() {
        let anniversary = md(8, 14);
        assert_eq!(
            next_anniversary_of(anniversary, date(2025, 8, 14)),
            Some(date(2025, 8, 14))
        );
    }

    #[test]
    fn test_next_anniversary_rolls_over() {
        let anniversary = md(8, 14);
        assert_eq!(
            next_anniversary_of(anniversary, date(2025, 8, 15)),
            Some(date(2026, 8, 14))
        );
        assert_eq!(
            next_anniversary_of(anniversary, date(2025, 1, 1)),
            Some(date(2025, 8, 14))
        );
        assert_eq!(
            next_anniversary_of(anniversary, date(2025, 12, 31)),
            Some(date(2026, 8, 14))
        );
    }

    #[test]
    fn test_next_anniversary_leap_day_falls_back_to_feb_28() {
        let leap_day = md(2, 29);
        assert_eq!(
            next_anniversary_of(leap_day, date(2025, 1, 10)),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            next_anniversary_of(leap_day, date(2025, 3, 1)),
            Some(date(2026, 2, 28))
        );
        assert_eq!(
            next_anniversary_of(leap_day, date(2027, 3, 1)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_next_anniversary_past_year_ceiling() {
        assert_eq!(next_anniversary_of(md(1, 1), date(9999, 6, 1)), None);
        assert_eq!(
            next_anniversary_of(md(12, 31), date(9999, 6, 1)),
            Some(date(9999, 12, 31))
        );
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(date(1947, 8, 14), 100), Some(date(2047, 8, 14)));
        assert_eq!(add_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_years(date(2024, 2, 29), 4), Some(date(2028, 2, 29)));
        assert_eq!(add_years(date(2024, 2, 29), -4), Some(date(2020, 2, 29)));
        assert_eq!(add_years(date(9999, 1, 1), 1), None);
    }

    #[test]
    fn test_years_and_days_until_centennial() {
        let target = date(2047, 8, 14);
        assert_eq!(
            years_and_days_until(date(2026, 10, 19), target),
            YearDayDelta { years: 20, days: 299 }
        );
        assert_eq!(
            years_and_days_until(date(2026, 8, 14), target),
            YearDayDelta { years: 21, days: 0 }
        );
        assert_eq!(
            years_and_days_until(date(2026, 8, 15), target),
            YearDayDelta { years: 20, days: 364 }
        );
        assert_eq!(
            years_and_days_until(target, target),
            YearDayDelta { years: 0, days: 0 }
        );
    }

    #[test]
    fn test_years_and_days_until_is_maximal_and_non_negative() {
        let target = date(2047, 8, 14);
        let mut from = date(2020, 1, 1);
        while from <= target {
            let delta = years_and_days_until(from, target);
            assert!(delta.days >= 0, "negative days from {from}");
            let reached = add_years(from, delta.years).unwrap();
            assert!(reached <= target);
            let beyond = add_years(from, delta.years + 1).unwrap();
            assert!(beyond > target, "years not maximal from {from}");
            assert_eq!(delta.days, days_between(reached, target));
            from = from.checked_add_days(37).unwrap();
        }
    }

    #[test]
    fn test_years_and_days_until_leap_day_does_not_drift() {
        assert_eq!(
            years_and_days_until(date(2024, 2, 29), date(2028, 2, 29)),
            YearDayDelta { years: 4, days: 0 }
        );
        // 2027-02-28 is reached after three years; one more day to Mar 1
        assert_eq!(
            years_and_days_until(date(2024, 2, 29), date(2027, 3, 1)),
            YearDayDelta { years: 3, days: 1 }
        );
    }

    #[test]
    fn test_years_and_days_until_differs_from_years_between() {
        // Walking forward from Feb 29 lands on Feb 28, one day before the
        // backward calendar subtraction would count a full year.
        let from = date(2024, 2, 29);
        let target = date(2025, 2, 28);
        assert_eq!(years_between(from, target), 0);
        assert_eq!(
            years_and_days_until(from, target),
            YearDayDelta { years: 1, days: 0 }
        );
    }

    #[test]
    fn test_years_and_days_until_target_in_past() {
        assert_eq!(
            years_and_days_until(date(2048, 8, 14), date(2047, 8, 14)),
            YearDayDelta { years: 0, days: -366 }
        );
    }

    #[test]
    fn test_years_and_days_until_near_year_ceiling() {
        assert_eq!(
            years_and_days_until(date(9998, 6, 1), date(9999, 12, 31)),
            YearDayDelta { years: 1, days: 213 }
        );
    }
}

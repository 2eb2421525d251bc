/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years, also the leap-day fallback
pub const FEBRUARY_DAYS_COMMON: u8 = 28;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Day number of 1970-01-01 counted from 0000-03-01
pub(crate) const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;
/// 1970-01-01 was a Thursday (index into `WEEKDAY_NAMES`)
pub(crate) const UNIX_EPOCH_WEEKDAY: i64 = 3;

/// Milliseconds in one civil day
pub const MS_PER_DAY: i64 = 86_400_000;
/// Largest accepted UTC offset, in minutes (±18 hours)
pub const MAX_OFFSET_MINUTES: i16 = 18 * 60;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Digit group separator for en-US number formatting
pub const GROUP_SEPARATOR: char = ',';

/// Historical reference date as (year, month, day)
pub const EPOCH_YMD: (u16, u8, u8) = (1947, 8, 14);
/// Years between the epoch and the target
pub const CENTENNIAL_YEARS: u16 = 100;
/// Centennial of the epoch as (year, month, day)
pub const TARGET_YMD: (u16, u8, u8) = (EPOCH_YMD.0 + CENTENNIAL_YEARS, EPOCH_YMD.1, EPOCH_YMD.2);

/// Country the event belongs to
pub const COUNTRY_NAME: &str = "Pakistan";
/// Short label for the event, used in headings and field names
pub const EVENT_LABEL: &str = "Independence";
/// Name of the commemorated event, used in document titles
pub const EVENT_NAME: &str = "Pakistan Independence";

/// Hijri date of the epoch. Not computed, the calendar is lunar-observational.
pub const EPOCH_HIJRI: &str = "27th Ramadan, 1366 AH, Friday, Laylat-ul-Qadr";
/// Hijri date of the target
pub const TARGET_HIJRI: &str = "27th Ramadan, 1466 AH";
/// Closing line of the exported document
pub const MOTTO: &str = "\u{1f31f} Pakistan Zindabad \u{1f31f}";

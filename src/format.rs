//! English (en-US) rendering helpers for days, counts and clock times.

use crate::consts::GROUP_SEPARATOR;
use crate::instant::LocalDateTime;

/// English ordinal suffix for a day of month: `st`, `nd`, `rd` or `th`.
pub const fn ordinal_suffix(day: u8) -> &'static str {
    // 11, 12 and 13 take "th" despite their last digit
    match (day % 10, day % 100) {
        (1, tens) if tens != 11 => "st",
        (2, tens) if tens != 12 => "nd",
        (3, tens) if tens != 13 => "rd",
        _ => "th",
    }
}

/// Formats an integer with comma digit groups, e.g. `28,490`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Two-digit 12-hour clock time, e.g. `03:05 PM`.
pub fn format_clock_time(time: LocalDateTime) -> String {
    let hour = time.hour();
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour:02}:{:02} {meridiem}", time.minute())
}

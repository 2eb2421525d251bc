//! Display fields and the exported document built from one moment in time.

use serde::Serialize;
use tracing::trace;

use crate::consts::{
    CENTENNIAL_YEARS, COUNTRY_NAME, EPOCH_HIJRI, EVENT_LABEL, EVENT_NAME, MOTTO, TARGET_HIJRI,
};
use crate::date_math::{self, YearDayDelta, format_ordinal};
use crate::fixed::FixedDates;
use crate::format::{format_clock_time, group_thousands};
use crate::instant::{CalendarInstant, LocalDateTime};

/// The next anniversary and how many days away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Upcoming {
    pub date: CalendarInstant,
    pub days_until: i64,
}

/// Every derived figure for one refresh of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub epoch: CalendarInstant,
    pub target: CalendarInstant,
    pub years_elapsed: i32,
    pub days_elapsed: i64,
    /// `None` only when the next anniversary would be past year 9999.
    pub next_anniversary: Option<Upcoming>,
    pub countdown: YearDayDelta,
    pub updated_at: LocalDateTime,
}

impl Snapshot {
    pub fn capture(fixed: &FixedDates, now: LocalDateTime) -> Self {
        let today = date_math::normalize(now);
        let age = fixed.age_on(today);
        let next_anniversary = fixed.next_anniversary(today).map(|date| Upcoming {
            date,
            days_until: date_math::days_between(today, date),
        });
        let countdown = fixed.countdown(today);
        trace!(%today, years = age.years, days = age.days, %countdown, "captured snapshot");

        Self {
            epoch: fixed.epoch(),
            target: fixed.target(),
            years_elapsed: age.years,
            days_elapsed: age.days,
            next_anniversary,
            countdown,
            updated_at: now,
        }
    }

    /// e.g. `79 Years`
    pub fn years_text(&self) -> String {
        format!("{} Years", self.years_elapsed)
    }

    /// e.g. `28,921 Days`
    pub fn days_text(&self) -> String {
        format!("{} Days", group_thousands(self.days_elapsed))
    }

    /// e.g. `14th August, 2027 (299 days)`
    pub fn next_anniversary_text(&self) -> String {
        self.next_anniversary.map_or_else(
            || String::from("No further anniversary in range"),
            |next| format!("{} ({} days)", format_ordinal(next.date), next.days_until),
        )
    }

    /// e.g. `20 years and 299 days until Pakistan's Centennial!`
    pub fn countdown_text(&self) -> String {
        format!("{} until {COUNTRY_NAME}'s Centennial!", self.countdown)
    }

    /// e.g. `19th October, 2026 at 03:05 PM`
    pub fn updated_text(&self) -> String {
        format!(
            "{} at {}",
            format_ordinal(self.updated_at.date()),
            format_clock_time(self.updated_at)
        )
    }
}

/// A titled block of lines in an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
        }
    }
}

/// The printable fact sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    pub banner: String,
    pub motto: String,
    pub footer: String,
}

impl Document {
    /// Lays out one snapshot so every figure in the document agrees.
    pub fn export(fixed: &FixedDates, now: LocalDateTime) -> Self {
        let snapshot = Snapshot::capture(fixed, now);
        let epoch = snapshot.epoch;

        let sections = vec![
            Section::new(
                format!("{EVENT_LABEL} Date"),
                vec![
                    format!(
                        "Gregorian Calendar: {}, {}",
                        format_ordinal(epoch),
                        epoch.weekday()
                    ),
                    format!("Islamic (Hijri) Calendar: {EPOCH_HIJRI}"),
                ],
            ),
            Section::new(
                "Current Age",
                vec![
                    format!("Years Since {EVENT_LABEL}: {}", snapshot.years_text()),
                    format!("Days Since {EVENT_LABEL}: {}", snapshot.days_text()),
                    format!(
                        "Next {EVENT_LABEL} Day: {}",
                        snapshot.next_anniversary_text()
                    ),
                ],
            ),
            Section::new(
                format!("{CENTENNIAL_YEARS} Years Completion"),
                vec![
                    format!("Gregorian Calendar: {}", format_ordinal(snapshot.target)),
                    format!("Islamic (Hijri) Calendar: {TARGET_HIJRI}"),
                ],
            ),
        ];

        let document = Self {
            title: EVENT_NAME.to_owned(),
            subtitle: String::from("Historical Dates & Centennial Information"),
            sections,
            banner: snapshot.countdown_text(),
            motto: MOTTO.to_owned(),
            footer: format!("Last updated: {}", snapshot.updated_text()),
        };
        trace!(sections = document.sections.len(), "exported document");
        document
    }

    /// Plain-text rendering with underlined headings.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        push_heading(&mut out, &self.title, '=');
        out.push_str(&self.subtitle);
        out.push_str("\n\n");
        for section in &self.sections {
            push_heading(&mut out, &section.heading, '-');
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&self.banner);
        out.push_str("\n\n");
        out.push_str(&self.motto);
        out.push('\n');
        out.push_str(&self.footer);
        out.push('\n');
        out
    }
}

fn push_heading(out: &mut String, text: &str, underline: char) {
    out.push_str(text);
    out.push('\n');
    out.extend(std::iter::repeat_n(underline, text.chars().count()));
    out.push('\n');
}

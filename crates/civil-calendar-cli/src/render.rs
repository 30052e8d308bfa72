//! Output formatting for the presentation layer.
//!
//! The engine returns structured values; this module turns them into
//! either human-readable text (pluralized units, grouped thousands, full
//! weekday names) or pretty JSON.

use anyhow::{Context, Result};
use civil_calendar::{AgeReport, CivilDate, DateDifference, DateOffset, Weekday};
use serde::Serialize;

use crate::cli::OutputFormat;

const LABEL_WIDTH: usize = 15;

/// Formats results according to the resolved output settings.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub format: OutputFormat,
    pub thousands_separator: String,
}

#[derive(Serialize)]
struct DiffOutput {
    from: CivilDate,
    to: CivilDate,
    #[serde(flatten)]
    difference: DateDifference,
}

#[derive(Serialize)]
struct AddOutput {
    date: CivilDate,
    offset: DateOffset,
    result: CivilDate,
    weekday: Weekday,
}

#[derive(Serialize)]
struct WeekdayOutput {
    date: CivilDate,
    weekday: Weekday,
    day_of_year: u32,
    is_leap_year: bool,
}

impl Renderer {
    pub fn difference(
        &self,
        from: CivilDate,
        to: CivilDate,
        diff: &DateDifference,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&DiffOutput {
                from,
                to,
                difference: *diff,
            });
        }
        let lines = [
            line("From:", format!("{from} ({})", weekday_name(from.weekday()))),
            line("To:", format!("{to} ({})", weekday_name(to.weekday()))),
            line("Difference:", self.calendar_parts(diff)),
            self.totals(diff),
        ];
        Ok(lines.join("\n"))
    }

    pub fn age(&self, report: &AgeReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(report);
        }
        let countdown = match report.days_until_next_birthday {
            0 => "today".to_string(),
            days => format!("in {}", self.count(days, "day")),
        };
        let lines = [
            line("Age:", self.calendar_parts(&report.age)),
            line(
                "Born on:",
                format!("{}, {}", weekday_name(report.born_on), report.birth_date),
            ),
            self.totals(&report.age),
            line(
                "Next birthday:",
                format!(
                    "{} ({}), turning {}, {countdown}",
                    report.next_birthday,
                    weekday_name(report.next_birthday_weekday),
                    self.group(report.next_age),
                ),
            ),
        ];
        Ok(lines.join("\n"))
    }

    pub fn added(&self, date: CivilDate, offset: DateOffset, result: CivilDate) -> Result<String> {
        let weekday = result.weekday();
        if self.format == OutputFormat::Json {
            return to_json(&AddOutput {
                date,
                offset,
                result,
                weekday,
            });
        }
        Ok(format!("{date} {offset} = {result} ({})", weekday_name(weekday)))
    }

    pub fn weekday(&self, date: CivilDate) -> Result<String> {
        let weekday = date.weekday();
        if self.format == OutputFormat::Json {
            return to_json(&WeekdayOutput {
                date,
                weekday,
                day_of_year: date.day_of_year(),
                is_leap_year: date.is_leap_year(),
            });
        }
        Ok(format!("{date} is a {}", weekday_name(weekday)))
    }

    /// "2 years, 1 month, 17 days", skipping zero parts; "0 days" when all are zero.
    fn calendar_parts(&self, diff: &DateDifference) -> String {
        let mut parts = Vec::new();
        if diff.years != 0 {
            parts.push(self.count(diff.years, "year"));
        }
        if diff.months != 0 {
            parts.push(self.count(diff.months, "month"));
        }
        if diff.days != 0 || parts.is_empty() {
            parts.push(self.count(diff.days, "day"));
        }
        parts.join(", ")
    }

    fn totals(&self, diff: &DateDifference) -> String {
        [
            line("Total days:", self.group(diff.total_days)),
            line("Total weeks:", self.group(diff.total_weeks)),
            line("Total months:", self.group(diff.total_months)),
        ]
        .join("\n")
    }

    fn count(&self, n: i64, unit: &str) -> String {
        let plural = if n.abs() == 1 { "" } else { "s" };
        format!("{} {unit}{plural}", self.group(n))
    }

    fn group(&self, n: i64) -> String {
        group_thousands(n, &self.thousands_separator)
    }
}

fn line(label: &str, value: String) -> String {
    format!("{label:<width$}{value}", width = LABEL_WIDTH)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Insert `separator` between groups of three digits: 1234567 → "1,234,567".
pub fn group_thousands(n: i64, separator: &str) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

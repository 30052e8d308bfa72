//! Signed year/month/week/day offsets applied to civil dates.
//!
//! An offset is applied in a fixed order: years and months first as
//! calendar units (clamping the day to the end of a shorter month), then
//! weeks and days as raw day counts with full month/year rollover. The
//! order matters: Jan 31 + 1 month + 1 day is Mar 1 (via Feb 28), whereas
//! adding the day first would give Mar 1 + 1 month = Apr 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::{month_length, CivilDate};
use crate::error::{CalendarError, Result};

/// A signed amount of years, months, weeks, and days.
///
/// Each field is independently signed; negative values subtract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOffset {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl DateOffset {
    pub const fn new(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    pub const fn years(years: i64) -> Self {
        Self::new(years, 0, 0, 0)
    }

    pub const fn months(months: i64) -> Self {
        Self::new(0, months, 0, 0)
    }

    pub const fn weeks(weeks: i64) -> Self {
        Self::new(0, 0, weeks, 0)
    }

    pub const fn days(days: i64) -> Self {
        Self::new(0, 0, 0, days)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// The same offset in the opposite direction (saturating at `i64::MIN`).
    pub fn negated(&self) -> Self {
        Self::new(
            self.years.saturating_neg(),
            self.months.saturating_neg(),
            self.weeks.saturating_neg(),
            self.days.saturating_neg(),
        )
    }
}

/// Add `offset` to `base`.
///
/// Applied strictly in this order:
/// 1. `years` and `months` as calendar months, carrying into years. If the
///    day does not exist in the resulting month it is clamped to the
///    month's last day (Jan 31 + 1 month is Feb 28, or Feb 29 in a leap
///    year). Rolling over into the next month is never done.
/// 2. `weeks * 7` raw days.
/// 3. `days` raw days.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result falls outside the
/// supported year range.
///
/// # Examples
///
/// ```
/// use civil_calendar::{add_offset, CivilDate, DateOffset};
///
/// let base = CivilDate::new(2024, 1, 31).unwrap();
/// let result = add_offset(base, DateOffset::months(1)).unwrap();
/// assert_eq!(result, CivilDate::new(2024, 2, 29).unwrap());
/// ```
pub fn add_offset(base: CivilDate, offset: DateOffset) -> Result<CivilDate> {
    let overflow = || CalendarError::OutOfRange(format!("{base} + {offset} overflows"));

    let calendar_months = offset
        .years
        .checked_mul(12)
        .and_then(|m| m.checked_add(offset.months))
        .ok_or_else(overflow)?;
    let raw_days = offset
        .weeks
        .checked_mul(7)
        .and_then(|d| d.checked_add(offset.days))
        .ok_or_else(overflow)?;

    let shifted = add_calendar_months(base, calendar_months)?;
    shifted.checked_add_days(raw_days).map_err(|_| overflow())
}

/// Add calendar months, clamping the day to the target month's length.
fn add_calendar_months(base: CivilDate, months: i64) -> Result<CivilDate> {
    if months == 0 {
        return Ok(base);
    }
    let overflow = || CalendarError::OutOfRange(format!("{base} + {months} months overflows"));

    let index = i64::from(base.year()) * 12 + i64::from(base.month()) - 1;
    let target = index.checked_add(months).ok_or_else(overflow)?;
    let year = i32::try_from(target.div_euclid(12)).map_err(|_| overflow())?;
    let month = (target.rem_euclid(12) + 1) as u32;

    let last_day = month_length(year, month);
    let day = base.day().min(last_day);
    if day != base.day() {
        trace!(%base, months, year, month, day, "clamping day to end of month");
    }
    CivilDate::new(year, month, day).map_err(|_| overflow())
}

// ── Offset expressions ──────────────────────────────────────────────────────

impl FromStr for DateOffset {
    type Err = CalendarError;

    /// Parse an offset expression such as `"+1y2m"`, `"-3w"`, or `"+1y-2d"`.
    ///
    /// The expression must start with `+` or `-`. A sign applies to every
    /// following component until the next sign. Units are `y` (years),
    /// `m` (months), `w` (weeks), and `d` (days); repeated units add up.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CalendarError::InvalidOffset("empty offset".to_string()));
        }
        if !s.starts_with(['+', '-']) {
            return Err(CalendarError::InvalidOffset(format!(
                "offset must start with '+' or '-': '{s}'"
            )));
        }

        let mut offset = DateOffset::default();
        let mut sign = 1i64;
        let mut after_sign = false;
        let mut num_buf = String::new();
        let mut found_any = false;

        for ch in s.chars() {
            match ch {
                '+' | '-' => {
                    if after_sign || !num_buf.is_empty() {
                        return Err(CalendarError::InvalidOffset(format!(
                            "unexpected '{ch}' in '{s}'"
                        )));
                    }
                    sign = if ch == '+' { 1 } else { -1 };
                    after_sign = true;
                }
                c if c.is_ascii_digit() => {
                    num_buf.push(c);
                    after_sign = false;
                }
                unit => {
                    if num_buf.is_empty() {
                        return Err(CalendarError::InvalidOffset(format!(
                            "expected number before '{unit}' in '{s}'"
                        )));
                    }
                    let n: i64 = num_buf.parse().map_err(|_| {
                        CalendarError::InvalidOffset(format!("number too large in '{s}'"))
                    })?;
                    num_buf.clear();
                    found_any = true;

                    let field = match unit {
                        'y' | 'Y' => &mut offset.years,
                        'm' | 'M' => &mut offset.months,
                        'w' | 'W' => &mut offset.weeks,
                        'd' | 'D' => &mut offset.days,
                        _ => {
                            return Err(CalendarError::InvalidOffset(format!(
                                "unknown unit '{unit}' in '{s}'"
                            )));
                        }
                    };
                    *field = field.checked_add(sign * n).ok_or_else(|| {
                        CalendarError::InvalidOffset(format!("component overflow in '{s}'"))
                    })?;
                }
            }
        }

        if !num_buf.is_empty() {
            return Err(CalendarError::InvalidOffset(format!(
                "number without unit at end of '{s}'"
            )));
        }
        if after_sign && found_any {
            return Err(CalendarError::InvalidOffset(format!(
                "dangling sign at end of '{s}'"
            )));
        }
        if !found_any {
            return Err(CalendarError::InvalidOffset(format!(
                "no components in '{s}'"
            )));
        }

        Ok(offset)
    }
}

impl fmt::Display for DateOffset {
    /// Normalized expression form, e.g. `+1y2m` or `+1y-3d`; the zero offset
    /// is `+0d`. Parses back to the same offset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            (self.years, 'y'),
            (self.months, 'm'),
            (self.weeks, 'w'),
            (self.days, 'd'),
        ];
        let mut negative: Option<bool> = None;
        for (value, unit) in components {
            if value == 0 {
                continue;
            }
            let is_negative = value < 0;
            if negative != Some(is_negative) {
                f.write_str(if is_negative { "-" } else { "+" })?;
                negative = Some(is_negative);
            }
            write!(f, "{}{unit}", value.unsigned_abs())?;
        }
        if negative.is_none() {
            f.write_str("+0d")?;
        }
        Ok(())
    }
}

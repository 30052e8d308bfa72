//! Civil dates in the proleptic Gregorian calendar.
//!
//! A [`CivilDate`] is a plain year/month/day value with no time-of-day and
//! no timezone. It can only be constructed for dates that actually exist:
//! `2023-04-31` is rejected with [`CalendarError::InvalidDate`] rather than
//! rolling over to May 1.
//!
//! Internally the value wraps chrono's timezone-free [`NaiveDate`], which
//! bounds the supported year range. Day counting is done on ordinal day
//! numbers (days since the start of the Common Era), never on
//! milliseconds, so there is no DST or floating-point drift.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, Result};

/// Weekdays indexed by `(ordinal_day - 1) % 7`. 0001-01-01 was a Monday.
const WEEKDAYS_FROM_CE: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ── Calendar rules ──────────────────────────────────────────────────────────

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year` (28–31), or `None` for a month
/// outside 1–12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Length of a month already known to be in 1–12.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    days_in_month(year, month).unwrap_or(31)
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── CivilDate ───────────────────────────────────────────────────────────────

/// A calendar date with no time-of-day and no timezone.
///
/// Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    inner: NaiveDate,
}

impl CivilDate {
    /// Construct a date, rejecting any `(year, month, day)` that does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month is outside 1–12 or
    /// the day is outside the month's length (leap years included), and
    /// [`CalendarError::OutOfRange`] if the year is beyond what the engine
    /// supports.
    ///
    /// # Examples
    ///
    /// ```
    /// use civil_calendar::CivilDate;
    ///
    /// assert!(CivilDate::new(2024, 2, 29).is_ok());
    /// assert!(CivilDate::new(2023, 2, 29).is_err());
    /// assert!(CivilDate::new(2023, 4, 31).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        match days_in_month(year, month) {
            Some(length) if (1..=length).contains(&day) => {}
            _ => return Err(CalendarError::InvalidDate { year, month, day }),
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!("year {year} is outside the supported range"))
            })
    }

    /// Construct a date from its ordinal day number (0001-01-01 is day 1).
    pub fn from_ordinal_day(ordinal: i64) -> Result<Self> {
        i32::try_from(ordinal)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Self::from)
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!(
                    "ordinal day {ordinal} is outside the supported range"
                ))
            })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Sequential day number in the proleptic Gregorian calendar, with
    /// 0001-01-01 as day 1. Differences of ordinals are exact day counts.
    pub fn ordinal_day(&self) -> i64 {
        i64::from(self.inner.num_days_from_ce())
    }

    /// Day within the year, 1-based (Jan 1 is 1, Dec 31 is 365 or 366).
    pub fn day_of_year(&self) -> u32 {
        self.inner.ordinal()
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Length of this date's month.
    pub fn days_in_month(&self) -> u32 {
        month_length(self.year(), self.month())
    }

    /// The day of the week this date falls on. See [`day_of_week`].
    pub fn weekday(&self) -> Weekday {
        day_of_week(*self)
    }

    /// Add `days` raw days (negative subtracts), rolling over months and years.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported year range.
    pub fn checked_add_days(&self, days: i64) -> Result<Self> {
        let ordinal = self.ordinal_day().checked_add(days).ok_or_else(|| {
            CalendarError::OutOfRange(format!("{self} + {days} days overflows"))
        })?;
        Self::from_ordinal_day(ordinal)
    }
}

/// The day of the week `date` falls on.
///
/// Computed from the ordinal day number modulo 7, anchored on 0001-01-01
/// being a Monday in the proleptic Gregorian calendar.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use civil_calendar::{day_of_week, CivilDate};
///
/// let date = CivilDate::new(2000, 1, 1).unwrap();
/// assert_eq!(day_of_week(date), Weekday::Sat);
/// ```
pub fn day_of_week(date: CivilDate) -> Weekday {
    let index = (date.ordinal_day() - 1).rem_euclid(7) as usize;
    WEEKDAYS_FROM_CE[index]
}

impl From<NaiveDate> for CivilDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.inner
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(f, "-{:02}-{:02}", self.month(), self.day())
    }
}

impl fmt::Debug for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CivilDate({self})")
    }
}

// ── ISO 8601 parsing ────────────────────────────────────────────────────────

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parse a strict ISO 8601 calendar date: `YYYY-MM-DD`, with an optional
    /// leading sign and more than four year digits allowed.
    ///
    /// Malformed text is [`CalendarError::InvalidDateString`]; well-formed
    /// text naming a date that does not exist is [`CalendarError::InvalidDate`].
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed =
            || CalendarError::InvalidDateString(format!("'{s}': expected YYYY-MM-DD"));

        let (sign, body) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => (1, s),
        };

        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if y.len() < 4 || m.len() != 2 || d.len() != 2 || ![y, m, d].into_iter().all(all_digits)
        {
            return Err(malformed());
        }

        let year: i32 = y.parse().map_err(|_| {
            CalendarError::OutOfRange(format!("year '{y}' is outside the supported range"))
        })?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        let day: u32 = d.parse().map_err(|_| malformed())?;

        CivilDate::new(sign * year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Calendar-correct differences between two civil dates.
//!
//! Differences are decomposed into years, months, and days by borrowing the
//! real length of the month before the later date, never a fixed 30 days.
//! The decomposition composes with [`add_offset`](crate::offset::add_offset):
//! adding `years`, `months`, then `days` to the earlier date gives back the
//! later date.
//!
//! Two ordering policies are offered as separate functions:
//!
//! - [`difference`] is strict and rejects an `earlier` that comes after
//!   `later` (age mode: a birth date must not exceed the target date).
//! - [`difference_unordered`] accepts either order and measures from the
//!   earlier to the later date (date-difference mode).

use serde::Serialize;
use tracing::trace;

use crate::date::{month_length, CivilDate};
use crate::error::{CalendarError, Result};

/// The result of comparing two civil dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateDifference {
    /// Whole years between the dates.
    pub years: i64,
    /// Whole months after `years` (0-11).
    pub months: i64,
    /// Remaining days after `years` and `months`.
    pub days: i64,
    /// Exact number of calendar days between the dates.
    pub total_days: i64,
    /// `total_days / 7`, rounded down.
    pub total_weeks: i64,
    /// `years * 12 + months`.
    pub total_months: i64,
}

impl DateDifference {
    /// Whether both dates were the same day.
    pub fn is_zero(&self) -> bool {
        self.total_days == 0
    }
}

/// Compute the calendar difference from `earlier` to `later`.
///
/// # Errors
///
/// Returns [`CalendarError::Ordering`] if `earlier` is after `later`. The
/// dates are never swapped; use [`difference_unordered`] for that policy.
///
/// # Examples
///
/// ```
/// use civil_calendar::{difference, CivilDate};
///
/// let born = CivilDate::new(1990, 8, 25).unwrap();
/// let today = CivilDate::new(2026, 2, 18).unwrap();
/// let diff = difference(born, today).unwrap();
/// assert_eq!((diff.years, diff.months, diff.days), (35, 5, 24));
/// ```
pub fn difference(earlier: CivilDate, later: CivilDate) -> Result<DateDifference> {
    if earlier > later {
        return Err(CalendarError::Ordering { earlier, later });
    }
    Ok(decompose(earlier, later))
}

/// Compute the calendar difference between `a` and `b` in whichever order
/// makes it non-negative.
///
/// The result is symmetric: `difference_unordered(a, b) == difference_unordered(b, a)`.
pub fn difference_unordered(a: CivilDate, b: CivilDate) -> DateDifference {
    if a <= b {
        decompose(a, b)
    } else {
        trace!(%a, %b, "swapping reversed dates");
        decompose(b, a)
    }
}

/// Decompose `later - earlier`; requires `earlier <= later`.
fn decompose(earlier: CivilDate, later: CivilDate) -> DateDifference {
    let mut years = i64::from(later.year()) - i64::from(earlier.year());
    let mut months = i64::from(later.month()) - i64::from(earlier.month());
    let mut days = i64::from(later.day()) - i64::from(earlier.day());

    if days < 0 {
        months -= 1;
        let (borrow_year, borrow_month) = previous_month(later.year(), later.month());
        let borrowed = month_length(borrow_year, borrow_month);
        // A start day past the end of the borrowed month is clamped to its
        // last day, the same clamp add_offset applies.
        let borrow = borrowed.max(earlier.day());
        trace!(%earlier, %later, borrowed, borrow, "borrowing previous month");
        days += i64::from(borrow);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = later.ordinal_day() - earlier.ordinal_day();

    DateDifference {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days.div_euclid(7),
        total_months: years * 12 + months,
    }
}

/// The month before `(year, month)`, wrapping January to December of the
/// previous year.
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    fn ymd(diff: &DateDifference) -> (i64, i64, i64) {
        (diff.years, diff.months, diff.days)
    }

    // ── difference tests ────────────────────────────────────────────────

    #[test]
    fn test_difference_same_day_is_all_zero() {
        let d = date(2024, 2, 29);
        let diff = difference(d, d).unwrap();
        assert_eq!(diff, DateDifference::default());
        assert!(diff.is_zero());
    }

    #[test]
    fn test_difference_simple() {
        let diff = difference(date(2020, 1, 10), date(2023, 4, 15)).unwrap();
        assert_eq!(ymd(&diff), (3, 3, 5));
        assert_eq!(diff.total_months, 39);
    }

    #[test]
    fn test_difference_borrow_from_leap_february() {
        // Feb 29 lies between: two calendar days
        let diff = difference(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        assert_eq!(ymd(&diff), (0, 0, 2));
        assert_eq!(diff.total_days, 2);
    }

    #[test]
    fn test_difference_borrow_from_common_february() {
        let diff = difference(date(2023, 2, 28), date(2023, 3, 1)).unwrap();
        assert_eq!(ymd(&diff), (0, 0, 1));
        assert_eq!(diff.total_days, 1);
    }

    #[test]
    fn test_difference_borrow_uses_actual_month_length() {
        // Mar 15 → Apr 10 borrows March (31 days): 31 - 15 + 10
        let diff = difference(date(2023, 3, 15), date(2023, 4, 10)).unwrap();
        assert_eq!(ymd(&diff), (0, 0, 26));
        assert_eq!(diff.total_days, 26);

        // Apr 15 → May 10 borrows April (30 days)
        let diff = difference(date(2023, 4, 15), date(2023, 5, 10)).unwrap();
        assert_eq!(ymd(&diff), (0, 0, 25));
        assert_eq!(diff.total_days, 25);
    }

    #[test]
    fn test_difference_borrow_in_january_uses_december() {
        let diff = difference(date(2023, 12, 20), date(2024, 1, 5)).unwrap();
        assert_eq!(ymd(&diff), (0, 0, 16));
        assert_eq!(diff.total_days, 16);
    }

    #[test]
    fn test_difference_start_day_past_borrowed_month_end() {
        // Jan 31 + 1 month clamps to Feb 28, + 1 day is Mar 1
        let diff = difference(date(2023, 1, 31), date(2023, 3, 1)).unwrap();
        assert_eq!(ymd(&diff), (0, 1, 1));
        assert_eq!(diff.total_days, 29);

        let diff = difference(date(2024, 1, 31), date(2024, 3, 1)).unwrap();
        assert_eq!(ymd(&diff), (0, 1, 1));
        assert_eq!(diff.total_days, 30);
    }

    #[test]
    fn test_difference_month_underflow_borrows_year() {
        let diff = difference(date(2019, 11, 5), date(2021, 2, 3)).unwrap();
        assert_eq!(ymd(&diff), (1, 2, 29));
        assert_eq!(diff.total_months, 14);
    }

    #[test]
    fn test_difference_leap_day_birthday() {
        let diff = difference(date(2000, 2, 29), date(2023, 2, 28)).unwrap();
        assert_eq!(ymd(&diff), (22, 11, 30));

        let diff = difference(date(2000, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!(ymd(&diff), (24, 0, 0));
    }

    #[test]
    fn test_difference_crossing_leap_day_backwards() {
        let diff = difference_unordered(date(2024, 3, 1), date(2024, 2, 29));
        assert_eq!(ymd(&diff), (0, 0, 1));
        assert_eq!(diff.total_days, 1);
    }

    #[test]
    fn test_difference_totals() {
        let diff = difference(date(2000, 1, 1), date(2026, 2, 18)).unwrap();
        assert_eq!(diff.total_days, 9545);
        assert_eq!(diff.total_weeks, 1363);
        assert_eq!(ymd(&diff), (26, 1, 17));
        assert_eq!(diff.total_months, 313);
    }

    #[test]
    fn test_difference_total_weeks_rounds_down() {
        let diff = difference(date(2024, 1, 1), date(2024, 1, 14)).unwrap();
        assert_eq!(diff.total_days, 13);
        assert_eq!(diff.total_weeks, 1);
    }

    #[test]
    fn test_difference_reversed_is_ordering_error() {
        let later = date(2024, 5, 1);
        let earlier = date(2020, 5, 1);
        let err = difference(later, earlier).unwrap_err();
        assert_eq!(
            err,
            CalendarError::Ordering {
                earlier: later,
                later: earlier
            }
        );
        assert!(err.to_string().contains("2024-05-01 is after 2020-05-01"));
    }

    // ── difference_unordered tests ──────────────────────────────────────

    #[test]
    fn test_difference_unordered_swaps() {
        let a = date(2024, 5, 1);
        let b = date(2020, 3, 15);
        let diff = difference_unordered(a, b);
        assert_eq!(diff, difference(b, a).unwrap());
        assert_eq!(ymd(&diff), (4, 1, 16));
    }

    #[test]
    fn test_difference_unordered_same_day() {
        let d = date(1999, 12, 31);
        assert!(difference_unordered(d, d).is_zero());
    }

    #[test]
    fn test_difference_serializes_snake_case() {
        let diff = difference(date(2024, 1, 1), date(2024, 1, 8)).unwrap();
        let json = serde_json::to_value(diff).unwrap();
        assert_eq!(json["total_days"], 7);
        assert_eq!(json["total_weeks"], 1);
        assert_eq!(json["days"], 7);
    }
}

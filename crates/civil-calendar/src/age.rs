//! Age reports: how old someone is on a given date, and when the next
//! birthday falls.

use chrono::Weekday;
use serde::Serialize;

use crate::date::{day_of_week, CivilDate};
use crate::difference::{difference, DateDifference};
use crate::error::Result;
use crate::offset::{add_offset, DateOffset};

/// Everything the age view shows for one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub birth_date: CivilDate,
    /// The date the age is measured on.
    pub on: CivilDate,
    /// Time lived. On a birthday this is whole years with no months or days.
    pub age: DateDifference,
    /// Weekday of the birth date.
    pub born_on: Weekday,
    /// The next anniversary on or after `on`. A Feb 29 birth date falls on
    /// Feb 28 in common years.
    pub next_birthday: CivilDate,
    pub next_birthday_weekday: Weekday,
    /// Age in whole years reached on `next_birthday`.
    pub next_age: i64,
    pub days_until_next_birthday: i64,
    /// Whether `on` is itself a birthday (never the birth date itself).
    pub is_birthday: bool,
}

/// Compute the age of someone born on `birth_date`, measured on `on`.
///
/// # Errors
///
/// Returns [`CalendarError::Ordering`](crate::CalendarError::Ordering) if
/// `birth_date` is after `on`, and
/// [`CalendarError::OutOfRange`](crate::CalendarError::OutOfRange) if the next
/// birthday falls past the supported year range.
///
/// # Examples
///
/// ```
/// use civil_calendar::{age, CivilDate};
///
/// let born = CivilDate::new(1990, 8, 25).unwrap();
/// let today = CivilDate::new(2026, 2, 18).unwrap();
/// let report = age(born, today).unwrap();
/// assert_eq!(report.age.years, 35);
/// assert_eq!(report.next_birthday, CivilDate::new(2026, 8, 25).unwrap());
/// assert_eq!(report.next_age, 36);
/// ```
pub fn age(birth_date: CivilDate, on: CivilDate) -> Result<AgeReport> {
    let mut age = difference(birth_date, on)?;

    // The first anniversary is one year after birth, even when measured on
    // the birth date itself.
    let mut years = (i64::from(on.year()) - i64::from(birth_date.year())).max(1);
    let mut next_birthday = add_offset(birth_date, DateOffset::years(years))?;
    if next_birthday < on {
        years += 1;
        next_birthday = add_offset(birth_date, DateOffset::years(years))?;
    }

    let is_birthday = next_birthday == on;
    if is_birthday {
        // A Feb 29 birthday observed on Feb 28 completes the year even
        // though the month borrow leaves 11 months and 30 days.
        age.years = years;
        age.months = 0;
        age.days = 0;
        age.total_months = years * 12;
    }

    Ok(AgeReport {
        birth_date,
        on,
        age,
        born_on: day_of_week(birth_date),
        next_birthday,
        next_birthday_weekday: day_of_week(next_birthday),
        next_age: years,
        days_until_next_birthday: next_birthday.ordinal_day() - on.ordinal_day(),
        is_birthday,
    })
}

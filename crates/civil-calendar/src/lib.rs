//! # civil-calendar
//!
//! Deterministic civil date arithmetic.
//!
//! Computes calendar-correct differences between dates, adds signed
//! year/month/week/day offsets, and looks up weekdays, all on timezone-free
//! proleptic Gregorian dates. Every function is pure: no system clock
//! access, no I/O. The caller supplies "today" when it needs one.
//!
//! ## Modules
//!
//! - [`date`] — `CivilDate`, leap-year and month-length rules, ISO 8601 parsing, weekdays
//! - [`difference`] — Years/months/days decomposition plus day, week, and month totals
//! - [`offset`] — Month-clamped offsets and offset expressions like `+1y2m`
//! - [`age`] — Age on a date, next birthday and countdown
//! - [`error`] — Error types

pub mod age;
pub mod date;
pub mod difference;
pub mod error;
pub mod offset;

pub use age::{age, AgeReport};
pub use chrono::Weekday;
pub use date::{day_of_week, days_in_month, days_in_year, is_leap_year, CivilDate};
pub use difference::{difference, difference_unordered, DateDifference};
pub use error::{CalendarError, Result};
pub use offset::{add_offset, DateOffset};

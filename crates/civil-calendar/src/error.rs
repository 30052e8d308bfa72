//! Error types for civil-calendar operations.

use thiserror::Error;

use crate::date::CivilDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02} does not exist in the Gregorian calendar")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid date string: {0}")]
    InvalidDateString(String),

    #[error("Ordering error: {earlier} is after {later}")]
    Ordering { earlier: CivilDate, later: CivilDate },

    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

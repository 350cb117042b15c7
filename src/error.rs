use thiserror::Error;

use crate::{MAX_YEAR, MIN_YEAR};

/// Errors returned when a date cannot be resolved to a weekday.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The year lies outside the centuries that have a known anchor day.
    #[error("year {year} is outside the supported range {}-{}", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange { year: i32 },

    #[error("month {month} is outside the range 1-12")]
    InvalidMonth { month: u8 },

    #[error("unknown weekday name {0:?}")]
    UnknownWeekdayName(String),

    #[error("unknown month name {0:?}")]
    UnknownMonthName(String),
}

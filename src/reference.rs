use crate::Month;

/// A date that falls on the year's doomsday, used as the starting point for counting to a target
/// date in the same month.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ReferenceDate {
    pub month: Month,
    pub day: u8,
}

impl ReferenceDate {
    const fn new(month: Month, day: u8) -> Self {
        ReferenceDate { month, day }
    }
}

/// The doomsday reference date used for dates in `month`.
///
/// April through December use the even-month doubles (4/4, 6/6, ...) and the "9 to 5 at the 7-11"
/// pairs. January and February shift by a day in leap years. March counts from the last day of
/// February, and always from the 28th, even in leap years.
pub fn closest_doomsday(month: Month, is_leap: bool) -> ReferenceDate {
    match month {
        Month::January if is_leap => ReferenceDate::new(Month::January, 4),
        Month::January => ReferenceDate::new(Month::January, 3),
        Month::February if is_leap => ReferenceDate::new(Month::February, 29),
        Month::February => ReferenceDate::new(Month::February, 28),
        Month::March => ReferenceDate::new(Month::February, 28),
        Month::April => ReferenceDate::new(Month::April, 4),
        Month::May => ReferenceDate::new(Month::May, 9),
        Month::June => ReferenceDate::new(Month::June, 6),
        Month::July => ReferenceDate::new(Month::July, 11),
        Month::August => ReferenceDate::new(Month::August, 8),
        Month::September => ReferenceDate::new(Month::September, 5),
        Month::October => ReferenceDate::new(Month::October, 10),
        Month::November => ReferenceDate::new(Month::November, 7),
        Month::December => ReferenceDate::new(Month::December, 12),
    }
}

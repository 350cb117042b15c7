use log::{debug, trace};

use crate::anchor::{century_anchor, year_anchor};
use crate::{closest_doomsday, is_leap_year, Error, Month, Weekday};

/// Day of the week on which the given date falls.
///
/// The year must be within [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR) and the
/// month within 1-12. The year is checked first, so a date with both out of range fails with
/// [`Error::YearOutOfRange`].
///
/// The day is not checked against the length of the month; any day number, including zero and
/// negative ones, is counted linearly from the month's reference date, so April 35 resolves like
/// May 5 and March 0 like February 28.
pub fn day_of_week(year: i32, month: u8, day: i32) -> Result<Weekday, Error> {
    let century_anchor = century_anchor(year).map_err(|e| {
        debug!("rejecting {}-{}-{}: {}", year, month, day, e);
        e
    })?;
    let month = Month::try_from(month).map_err(|e| {
        debug!("rejecting {}-{}-{}: {}", year, month, day, e);
        e
    })?;
    let year_anchor = year_anchor(year, century_anchor);
    let reference = closest_doomsday(month, is_leap_year(year));
    let distance = i64::from(day) - i64::from(reference.day);
    let weekday = year_anchor.add_days(distance);
    trace!(
        "{}-{}-{}: century anchor {}, doomsday {}, reference {} {}, distance {}, result {}",
        year,
        month.number(),
        day,
        century_anchor,
        year_anchor,
        reference.month,
        reference.day,
        distance,
        weekday
    );
    Ok(weekday)
}

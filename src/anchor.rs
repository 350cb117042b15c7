// Century and year anchors.
//
// Each century starts on a fixed anchor day. The doomsday for a given year is found by counting
// forward from that anchor using the "12/4" rule on the last two digits of the year: take the
// number of dozens, the remainder after removing the dozens and the number of fours in that
// remainder, and add them up. Every whole dozen years moves the doomsday by 12 + 3 = 15 days, i.e.
// one weekday, which is why the dozens only count once.

use num_integer::Integer;

use crate::div_rem::RemFloor;
use crate::{Error, Weekday, MAX_YEAR, MIN_YEAR};

const CENTURY_ANCHORS: [(i32, Weekday); 4] = [
    (1800, Weekday::Friday),
    (1900, Weekday::Wednesday),
    (2000, Weekday::Tuesday),
    (2100, Weekday::Sunday),
];

pub(crate) fn century_anchor(year: i32) -> Result<Weekday, Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange { year });
    }
    let century = year - last_two_digits(year);
    CENTURY_ANCHORS
        .iter()
        .find(|(start, _)| *start == century)
        .map(|&(_, anchor)| anchor)
        .ok_or(Error::YearOutOfRange { year })
}

pub(crate) fn last_two_digits(year: i32) -> i32 {
    year.rem_floor(100)
}

pub(crate) fn year_anchor(year: i32, century_anchor: Weekday) -> Weekday {
    let n = last_two_digits(year);
    let (dozens, remainder) = n.div_rem(&12);
    let fours = remainder / 4;
    let d = dozens + remainder + fours;
    century_anchor.add_days((d % 7) as i64)
}

/// Weekday on which every doomsday reference date of `year` falls.
pub fn doomsday(year: i32) -> Result<Weekday, Error> {
    Ok(year_anchor(year, century_anchor(year)?))
}

/// Whether `year` is treated as a leap year.
///
/// Only the divisible-by-four rule is applied. Century years such as 1900 and 2100 count as leap
/// years here, unlike the full Gregorian rule; the doomsday reference days for January and
/// February depend on this, so changing it changes results for those years.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

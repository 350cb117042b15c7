use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::div_rem::RemFloor;
use crate::Error;

const DAYS_PER_WEEK: i64 = 7;

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
///
/// The numbering is cyclic: arithmetic on weekdays is done modulo 7, so stepping forward from
/// Saturday gives Sunday.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

lazy_static! {
    static ref WEEKDAYS_BY_NAME: HashMap<String, Weekday> = Weekday::ALL
        .iter()
        .map(|&weekday| (weekday.name().to_lowercase(), weekday))
        .collect();
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday for an arbitrary day count, wrapping around the week in both directions, so
    /// `-1` is Saturday and `7` is Sunday.
    pub fn from_number(number: i64) -> Self {
        Self::ALL[number.rem_floor(DAYS_PER_WEEK) as usize]
    }

    pub fn number_days_from_sunday(self) -> u8 {
        self as u8
    }

    pub fn add_days(self, days: i64) -> Self {
        // Reduce first so large offsets cannot overflow.
        Self::from_number(self as i64 + days.rem_floor(DAYS_PER_WEEK))
    }

    pub fn next(self) -> Self {
        self.add_days(1)
    }

    pub fn previous(self) -> Self {
        self.add_days(-1)
    }

    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    // Full names only, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAYS_BY_NAME
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::UnknownWeekdayName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering() {
        assert_eq!(Weekday::Sunday.number_days_from_sunday(), 0);
        assert_eq!(Weekday::Monday.number_days_from_sunday(), 1);
        assert_eq!(Weekday::Saturday.number_days_from_sunday(), 6);
        for (i, weekday) in Weekday::ALL.iter().enumerate() {
            assert_eq!(weekday.number_days_from_sunday() as usize, i);
        }
    }

    #[test]
    fn test_from_number_wraps() {
        assert_eq!(Weekday::from_number(0), Weekday::Sunday);
        assert_eq!(Weekday::from_number(6), Weekday::Saturday);
        assert_eq!(Weekday::from_number(7), Weekday::Sunday);
        assert_eq!(Weekday::from_number(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_number(-11), Weekday::Wednesday);
        assert_eq!(Weekday::from_number(701), Weekday::Monday);
    }

    #[test]
    fn test_cyclic_stepping() {
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.previous(), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.add_days(14), Weekday::Wednesday);
        assert_eq!(Weekday::Wednesday.add_days(-3), Weekday::Sunday);
        for weekday in Weekday::ALL {
            assert_eq!(weekday.next().previous(), weekday);
        }
    }

    #[test]
    fn test_add_days_extreme_offsets() {
        // i64::MAX = 7 * 1317624576693539401, i64::MIN = -7 * 1317624576693539401 - 1.
        assert_eq!(Weekday::Saturday.add_days(i64::MAX), Weekday::Saturday);
        assert_eq!(Weekday::Saturday.add_days(i64::MIN), Weekday::Friday);
        assert_eq!(Weekday::Sunday.add_days(i64::MAX - 1), Weekday::Saturday);
        for weekday in Weekday::ALL {
            assert_eq!(
                weekday.add_days(i64::MAX),
                weekday.add_days(i64::MAX.rem_floor(DAYS_PER_WEEK))
            );
            assert_eq!(
                weekday.add_days(i64::MIN),
                weekday.add_days(i64::MIN.rem_floor(DAYS_PER_WEEK))
            );
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Weekday::Monday.to_string(), "Monday");
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
        assert_eq!(format!("{}", Weekday::Thursday), "Thursday");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("saturday".parse::<Weekday>(), Ok(Weekday::Saturday));
        assert_eq!(" FRIDAY ".parse::<Weekday>(), Ok(Weekday::Friday));
        for weekday in Weekday::ALL {
            assert_eq!(weekday.name().parse::<Weekday>(), Ok(weekday));
        }

        assert_eq!(
            "Mon".parse::<Weekday>(),
            Err(Error::UnknownWeekdayName("Mon".to_string()))
        );
    }
}

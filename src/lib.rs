//! Day-of-week calculation for Gregorian dates using Conway's Doomsday algorithm.
//!
//! ```
//! use doomsday::{day_of_week, Weekday};
//!
//! assert_eq!(day_of_week(2015, 11, 24).unwrap(), Weekday::Tuesday);
//! ```

pub use anchor::doomsday;
pub use day_of_week::day_of_week;
pub use error::Error;
pub use leap_year::is_leap_year;
pub use month::Month;
pub use reference::{closest_doomsday, ReferenceDate};
pub use weekday::Weekday;

mod anchor;
mod day_of_week;
mod div_rem;
mod error;
mod leap_year;
mod month;
mod reference;
mod weekday;

/// Earliest year with a known century anchor.
pub const MIN_YEAR: i32 = 1800;
/// Latest year with a known century anchor.
pub const MAX_YEAR: i32 = 2199;

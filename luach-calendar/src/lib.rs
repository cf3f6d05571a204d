//! The fixed Hebrew calendar.
//!
//! Leap cycle, molad, postponement rules, year types and the day-number
//! engine, plus civil anchoring and seasons. Everything is a pure function of
//! the year, month and day; nothing is cached.
//!
//! ```
//! use luach_calendar::{CivilCalendar, CivilDate, HebrewDate};
//!
//! let date = HebrewDate::from_civil(CivilCalendar::Gregorian, &CivilDate::new(2023, 3, 19)).unwrap();
//! assert_eq!(date, HebrewDate::new(5783, 6, 26).unwrap());
//! assert_eq!(date.weekday().unwrap(), 1);
//! ```

pub mod civil;
pub mod date;
pub mod day_number;
pub mod errors;
pub mod leap;
pub mod molad;
pub mod months;
pub mod names;
pub mod postponement;
pub mod seasons;
pub mod year;

pub use civil::{CivilCalendar, CivilDate};
pub use date::HebrewDate;
pub use day_number::{
    add_days, date_from_day_number, day_number, day_number_by_years, days_between,
    signed_days_between, year_start, DayNumber,
};
pub use errors::{CalendarError, CalendarResult};
pub use leap::{is_leap, months_in_year};
pub use molad::{molad, molad_absolute};
pub use postponement::{year_head, Postponement, PostponementRule};
pub use seasons::{seasons, Season, SeasonInstant, SeasonReckoning};
pub use year::{
    month_length, month_lengths, weekday, year_length, year_pattern, year_type, YearPattern,
    YearType,
};

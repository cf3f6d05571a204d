//! Seasons (tekufot) by the reckonings of Shmuel and Rav Ada.
//!
//! Both reckonings divide a fixed solar year into four equal quarters. The
//! first Nisan season of the era is placed a fixed lead before the molad of
//! Nisan of year 1, and every later Nisan season is a whole number of solar
//! years after it.
//!
//! | Reckoning | Solar year | Quarter | Lead before molad Nisan 1 |
//! |-----------|------------|---------|---------------------------|
//! | Shmuel | 365d 6h | 91d 7h 540p | 7d 9h 642p |
//! | Rav Ada | 365d 5h 997p 48m | 91d 7h 519p 31m | 9h 642p |
//!
//! Instants are on the molad scale, so hour 0 is 18:00 of the preceding
//! civil evening.
//!
//! ```
//! use luach_calendar::seasons::{season_of_nisan, SeasonReckoning};
//! use luach_core::Duration;
//!
//! let first = season_of_nisan(1, SeasonReckoning::Shmuel).unwrap();
//! assert_eq!(first.moment, Duration::new(172, 0, 0));
//! assert_eq!(first.moment.weekday(), 4);
//! ```

use crate::date::HebrewDate;
use crate::day_number::{date_from_day_number, DayNumber};
use crate::errors::CalendarResult;
use crate::leap::{CYCLE_YEARS, MONTHS_PER_CYCLE};
use crate::molad::{molad_absolute, SYNODIC_MONTH};
use crate::year::nisan;
use luach_core::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeasonReckoning {
    /// 365¼ days.
    #[default]
    Shmuel,
    /// Nineteen years of exactly 235 mean months.
    RavAda,
}

impl SeasonReckoning {
    pub const fn year_length(self) -> Duration {
        match self {
            SeasonReckoning::Shmuel => Duration::new(365, 6, 0),
            SeasonReckoning::RavAda => Duration::with_moments(365, 5, 997, 48),
        }
    }

    pub fn quarter(self) -> Duration {
        // Both years divide evenly into quarters at moment resolution.
        self.year_length() / 4
    }

    /// How far the first Nisan season precedes the molad of Nisan of year 1.
    pub const fn lead(self) -> Duration {
        match self {
            SeasonReckoning::Shmuel => Duration::new(7, 9, 642),
            SeasonReckoning::RavAda => Duration::new(0, 9, 642),
        }
    }

    /// Excess of nineteen solar years over 235 mean months.
    pub fn cycle_drift(self) -> Duration {
        self.year_length() * CYCLE_YEARS - SYNODIC_MONTH * MONTHS_PER_CYCLE
    }
}

/// The four seasons, in the order they fall within a Hebrew year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    Tishrei,
    Tevet,
    Nisan,
    Tammuz,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Tishrei, Season::Tevet, Season::Nisan, Season::Tammuz];

    /// Quarters from the Nisan season of the same Hebrew year.
    const fn quarters_from_nisan(self) -> i64 {
        match self {
            Season::Tishrei => -2,
            Season::Tevet => -1,
            Season::Nisan => 0,
            Season::Tammuz => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonInstant {
    pub season: Season,
    /// Absolute instant on the molad scale.
    pub moment: Duration,
    pub date: HebrewDate,
}

fn first_nisan_season(reckoning: SeasonReckoning) -> CalendarResult<Duration> {
    Ok(molad_absolute(1, nisan(1))? - reckoning.lead())
}

fn season_moment(year: i64, season: Season, reckoning: SeasonReckoning) -> CalendarResult<Duration> {
    let nisan_season =
        first_nisan_season(reckoning)? + reckoning.year_length().checked_mul(year - 1)?;
    Ok(nisan_season + reckoning.quarter() * season.quarters_from_nisan())
}

fn instant(year: i64, season: Season, reckoning: SeasonReckoning) -> CalendarResult<SeasonInstant> {
    let moment = season_moment(year, season, reckoning)?;
    let date = date_from_day_number(DayNumber::new(moment.days()))?;
    Ok(SeasonInstant {
        season,
        moment,
        date,
    })
}

/// The Nisan season falling in Hebrew year `year`.
pub fn season_of_nisan(year: i64, reckoning: SeasonReckoning) -> CalendarResult<SeasonInstant> {
    instant(year, Season::Nisan, reckoning)
}

/// All four seasons of Hebrew year `year`, Tishrei first.
///
/// The Tishrei and Tevet seasons of year 1 fall before the epoch and are
/// reported as out of range.
pub fn seasons(year: i64, reckoning: SeasonReckoning) -> CalendarResult<[SeasonInstant; 4]> {
    Ok([
        instant(year, Season::Tishrei, reckoning)?,
        instant(year, Season::Tevet, reckoning)?,
        instant(year, Season::Nisan, reckoning)?,
        instant(year, Season::Tammuz, reckoning)?,
    ])
}

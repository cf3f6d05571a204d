//! Civil calendar anchoring.
//!
//! Each civil calendar is tied to the day-number scale by one fixed pair of
//! corresponding dates, and everything else goes through the integer Julian
//! Day Number of the civil date. Years use astronomical numbering, so 1 BCE is
//! year 0 and the Hebrew epoch falls in year -3760.
//!
//! | Calendar | Anchor |
//! |----------|--------|
//! | Gregorian | 1 Tishrei 5783 = 2022-09-26 |
//! | Julian | 1 Tishrei 1 = -3760-10-07 |
//! | Historical | Julian before 1582-10-15, Gregorian from then on |
//!
//! ```
//! use luach_calendar::{CivilCalendar, CivilDate, HebrewDate};
//!
//! let date = HebrewDate::new(5708, 9, 5).unwrap();
//! let civil = date.to_civil(CivilCalendar::Gregorian).unwrap();
//! assert_eq!(civil, CivilDate::new(1948, 5, 14));
//! assert_eq!(civil.to_string(), "1948-05-14");
//! ```

use crate::date::HebrewDate;
use crate::day_number::{date_from_day_number, day_number, DayNumber};
use crate::errors::{CalendarError, CalendarResult};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Julian Day Number minus day number, for every anchor.
pub const JDN_OFFSET: i64 = 347_996;

/// JDN of 1582-10-15, the first Gregorian day of the historical calendar.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

const GREGORIAN_ANCHOR: (DayNumber, CivilDate) =
    (DayNumber::new(2_111_853), CivilDate::new(2022, 9, 26));

const JULIAN_ANCHOR: (DayNumber, CivilDate) = (DayNumber::new(2), CivilDate::new(-3760, 10, 7));

/// A civil year, month and day, not yet tied to a calendar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CivilCalendar {
    /// Proleptic Gregorian.
    #[default]
    Gregorian,
    /// Proleptic Julian.
    Julian,
    /// Julian until 1582-10-04, Gregorian from 1582-10-15.
    Historical,
}

impl CivilCalendar {
    /// The calendar in force on `jdn`: `Historical` resolves to one of the
    /// other two.
    fn effective(self, jdn: i64) -> CivilCalendar {
        match self {
            CivilCalendar::Historical if jdn < GREGORIAN_CUTOVER_JDN => CivilCalendar::Julian,
            CivilCalendar::Historical => CivilCalendar::Gregorian,
            other => other,
        }
    }

    fn anchor(self) -> (DayNumber, CivilDate) {
        match self {
            CivilCalendar::Julian => JULIAN_ANCHOR,
            _ => GREGORIAN_ANCHOR,
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            CivilCalendar::Julian => year.rem_euclid(4) == 0,
            CivilCalendar::Gregorian => {
                year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
            }
            CivilCalendar::Historical if year < 1582 => CivilCalendar::Julian.is_leap_year(year),
            CivilCalendar::Historical => CivilCalendar::Gregorian.is_leap_year(year),
        }
    }

    pub fn days_in_month(self, year: i32, month: u8) -> u8 {
        match month {
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Checks month and day ranges, and the ten dropped days of October 1582
    /// for the historical calendar.
    pub fn validate(self, date: &CivilDate) -> CalendarResult<()> {
        let invalid = |message: String| {
            CalendarError::invalid_date(
                date.year as i64,
                date.month as i64,
                date.day as i64,
                message,
            )
        };
        if !(1..=12).contains(&date.month) {
            return Err(invalid("month outside 1..=12".to_string()));
        }
        let length = self.days_in_month(date.year, date.month);
        if !(1..=length).contains(&date.day) {
            return Err(invalid(format!("month has {length} days")));
        }
        if self == CivilCalendar::Historical
            && (date.year, date.month) == (1582, 10)
            && (5..=14).contains(&date.day)
        {
            return Err(invalid("dropped by the Gregorian reform".to_string()));
        }
        Ok(())
    }

    /// Julian Day Number of a civil date.
    pub fn to_jdn(self, date: &CivilDate) -> CalendarResult<i64> {
        self.validate(date)?;
        let calendar = match self {
            CivilCalendar::Historical if (date.year, date.month, date.day) < (1582, 10, 15) => {
                CivilCalendar::Julian
            }
            CivilCalendar::Historical => CivilCalendar::Gregorian,
            other => other,
        };
        Ok(match calendar {
            CivilCalendar::Julian => julian_to_jdn(date),
            _ => gregorian_to_jdn(date),
        })
    }

    pub fn from_jdn(self, jdn: i64) -> CivilDate {
        match self.effective(jdn) {
            CivilCalendar::Julian => jdn_to_julian(jdn),
            _ => jdn_to_gregorian(jdn),
        }
    }

    /// Converts through the calendar's anchor pair.
    pub fn to_day_number(self, date: &CivilDate) -> CalendarResult<DayNumber> {
        let jdn = self.to_jdn(date)?;
        let (anchor_day, anchor_civil) = self.effective(jdn).anchor();
        let anchor_jdn = self.effective(jdn).to_jdn(&anchor_civil)?;
        Ok(anchor_day + (jdn - anchor_jdn))
    }

    pub fn from_day_number(self, n: DayNumber) -> CivilDate {
        let calendar = self.effective(n.value() + JDN_OFFSET);
        let (anchor_day, anchor_civil) = calendar.anchor();
        let anchor_jdn = match calendar {
            CivilCalendar::Julian => julian_to_jdn(&anchor_civil),
            _ => gregorian_to_jdn(&anchor_civil),
        };
        calendar.from_jdn(anchor_jdn + (n - anchor_day))
    }
}

impl fmt::Display for CivilCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CivilCalendar::Gregorian => "gregorian",
            CivilCalendar::Julian => "julian",
            CivilCalendar::Historical => "historical",
        };
        f.write_str(name)
    }
}

/// ERFA `eraCal2jd`, shifted from MJD to the integer JDN.
fn gregorian_to_jdn(date: &CivilDate) -> i64 {
    let year = date.year as i64;
    let month = date.month as i64;
    let my = (month - 14) / 12;
    let iypmy = year + my;
    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + date.day as i64
        - 2_432_076;
    mjd + 2_400_001
}

/// Inverse of [`gregorian_to_jdn`], the integer part of ERFA `eraJd2cal`.
fn jdn_to_gregorian(jdn: i64) -> CivilDate {
    let mut l = jdn + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4_000 * (l + 1)) / 1_461_001;
    l -= (1_461 * i) / 4 - 31;
    let k = (80 * l) / 2_447;
    let day = l - (2_447 * k) / 80;
    let l = k / 11;
    let month = k + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    CivilDate::new(year as i32, month as u8, day as u8)
}

fn julian_to_jdn(date: &CivilDate) -> i64 {
    let (y, m, d) = (date.year as i64, date.month as i64, date.day as i64);
    367 * y - (7 * (y + 5_001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d + 1_729_777
}

fn jdn_to_julian(jdn: i64) -> CivilDate {
    let f = jdn + 1_401;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1_461) / 4;
    let h = 5 * g + 2;
    let day = h.rem_euclid(153) / 5 + 1;
    let month = (h / 153 + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1_461) - 4_716 + (14 - month) / 12;
    CivilDate::new(year as i32, month as u8, day as u8)
}

impl HebrewDate {
    pub fn to_civil(&self, calendar: CivilCalendar) -> CalendarResult<CivilDate> {
        Ok(calendar.from_day_number(day_number(self)?))
    }

    pub fn from_civil(calendar: CivilCalendar, date: &CivilDate) -> CalendarResult<Self> {
        date_from_day_number(calendar.to_day_number(date)?)
    }
}

impl DayNumber {
    /// Integer Julian Day Number of the civil day this day number starts
    /// the evening before.
    pub const fn to_jdn(&self) -> i64 {
        self.value() + JDN_OFFSET
    }

    pub const fn from_jdn(jdn: i64) -> Self {
        DayNumber::new(jdn - JDN_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_forward_and_back() {
        // MJD 59848.
        assert_eq!(gregorian_to_jdn(&CivilDate::new(2022, 9, 26)), 2_459_849);
        assert_eq!(gregorian_to_jdn(&CivilDate::new(1582, 10, 15)), GREGORIAN_CUTOVER_JDN);
        assert_eq!(jdn_to_gregorian(2_459_849), CivilDate::new(2022, 9, 26));
    }

    #[test]
    fn test_julian_forward_and_back() {
        assert_eq!(julian_to_jdn(&CivilDate::new(-3760, 10, 7)), 347_998);
        assert_eq!(julian_to_jdn(&CivilDate::new(1582, 10, 4)), GREGORIAN_CUTOVER_JDN - 1);
        assert_eq!(jdn_to_julian(347_998), CivilDate::new(-3760, 10, 7));
        for jdn in (347_998..2_500_000).step_by(997) {
            assert_eq!(julian_to_jdn(&jdn_to_julian(jdn)), jdn);
        }
    }

    #[test]
    fn test_anchors_share_offset() {
        for calendar in [CivilCalendar::Gregorian, CivilCalendar::Julian] {
            let (day, civil) = calendar.anchor();
            assert_eq!(calendar.to_jdn(&civil).unwrap() - day.value(), JDN_OFFSET);
        }
    }

    #[test]
    fn test_validation() {
        let g = CivilCalendar::Gregorian;
        assert!(g.validate(&CivilDate::new(2024, 2, 29)).is_ok());
        assert!(g.validate(&CivilDate::new(1900, 2, 29)).is_err());
        assert!(CivilCalendar::Julian.validate(&CivilDate::new(1900, 2, 29)).is_ok());
        assert!(g.validate(&CivilDate::new(2023, 13, 1)).is_err());
        assert!(CivilCalendar::Historical
            .validate(&CivilDate::new(1582, 10, 10))
            .is_err());
        assert!(g.validate(&CivilDate::new(1582, 10, 10)).is_ok());
    }

    #[test]
    fn test_historical_cutover() {
        let h = CivilCalendar::Historical;
        let last_julian = h.to_jdn(&CivilDate::new(1582, 10, 4)).unwrap();
        let first_gregorian = h.to_jdn(&CivilDate::new(1582, 10, 15)).unwrap();
        assert_eq!(first_gregorian - last_julian, 1);
        assert_eq!(h.from_jdn(last_julian), CivilDate::new(1582, 10, 4));
        assert_eq!(h.from_jdn(first_gregorian), CivilDate::new(1582, 10, 15));
    }

    #[test]
    fn test_display() {
        assert_eq!(CivilDate::new(-3760, 10, 7).to_string(), "-3760-10-07");
        assert_eq!(CivilDate::new(1, 1, 1).to_string(), "0001-01-01");
        assert_eq!(CivilCalendar::Historical.to_string(), "historical");
    }
}

//! Elapsed-day counts and date arithmetic.
//!
//! A [`DayNumber`] counts days on the molad scale: day 2 is 1 Tishrei of year
//! 1, a Monday, so `weekday = ((n - 1) mod 7) + 1`. Both directions of the
//! conversion exist twice:
//!
//! | Quantity | Closed form | Walking |
//! |----------|-------------|---------|
//! | date → day number | [`day_number`] (molad day + delay + month offsets) | [`day_number_by_years`] (sum of year lengths) |
//! | day number → date | [`date_from_day_number`] (synodic estimate, then correction) | [`add_days`] (year and month steps) |
//!
//! The test suites hold each pair equal.
//!
//! ```
//! use luach_calendar::{day_number, date_from_day_number, HebrewDate};
//!
//! let rosh_hashana = HebrewDate::new(5783, 1, 1).unwrap();
//! let n = day_number(&rosh_hashana).unwrap();
//! assert_eq!(n.value(), 2_111_853);
//! assert_eq!(n.weekday(), 2);
//! assert_eq!(date_from_day_number(n).unwrap(), rosh_hashana);
//! ```

use crate::date::HebrewDate;
use crate::errors::{CalendarError, CalendarResult};
use crate::leap::{
    check_year, CYCLE_YEARS, MAX_YEAR, MIN_YEAR, MONTHS_BEFORE_POSITION, MONTHS_PER_CYCLE,
};
use crate::molad::{molad_absolute, FIRST_MOLAD, SYNODIC_MONTH};
use crate::postponement::year_head;
use crate::year::{days_before_month, month_lengths, year_length};
use core::fmt;
use core::ops::{Add, Sub};
use luach_core::constants::{DAYS_PER_WEEK, MOMENTS_PER_DAY};
use luach_core::LuachError;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day number of 1 Tishrei of year 1.
pub const FIRST_DAY: i64 = 2;

/// A count of days on the molad scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayNumber(i64);

impl DayNumber {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// 1 = Sunday.
    pub const fn weekday(&self) -> u8 {
        ((self.0 - 1).rem_euclid(DAYS_PER_WEEK) + 1) as u8
    }
}

impl Add<i64> for DayNumber {
    type Output = DayNumber;

    fn add(self, days: i64) -> DayNumber {
        DayNumber(self.0 + days)
    }
}

impl Sub<i64> for DayNumber {
    type Output = DayNumber;

    fn sub(self, days: i64) -> DayNumber {
        DayNumber(self.0 - days)
    }
}

impl Sub for DayNumber {
    type Output = i64;

    fn sub(self, other: DayNumber) -> i64 {
        self.0 - other.0
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day number of 1 Tishrei of `year`: the day of its molad plus the
/// postponement delay.
pub fn year_start(year: i64) -> CalendarResult<DayNumber> {
    check_year(year)?;
    let molad = molad_absolute(year, 1)?;
    Ok(DayNumber(molad.days() + year_head(year)?.delay))
}

pub fn day_number(date: &HebrewDate) -> CalendarResult<DayNumber> {
    let start = year_start(date.year())?;
    Ok(start + days_before_month(date.year(), date.month())? + date.day() - 1)
}

/// [`day_number`] by summing the lengths of every earlier year.
pub fn day_number_by_years(date: &HebrewDate) -> CalendarResult<DayNumber> {
    let mut days = FIRST_DAY;
    for year in MIN_YEAR..date.year() {
        days += year_length(year)?;
    }
    Ok(DayNumber(
        days + days_before_month(date.year(), date.month())? + date.day() - 1,
    ))
}

/// Inverts [`day_number`].
///
/// The number of molads up to the day estimates the month count, the month
/// count splits into whole cycles and a position inside the cycle, and the
/// resulting year is moved by at most one in either direction until its first
/// day is the last year start not after `n`.
pub fn date_from_day_number(n: DayNumber) -> CalendarResult<HebrewDate> {
    if n.value() < FIRST_DAY {
        return Err(CalendarError::out_of_range(format!(
            "day number {n} precedes the epoch (day {FIRST_DAY})"
        )));
    }
    let moments = n
        .value()
        .checked_mul(MOMENTS_PER_DAY)
        .ok_or_else(|| CalendarError::out_of_range(format!("day number {n} is too large")))?;
    let months = (moments - FIRST_MOLAD.total_moments()).div_euclid(SYNODIC_MONTH.total_moments());

    let cycles = months.div_euclid(MONTHS_PER_CYCLE);
    let remainder = months - cycles * MONTHS_PER_CYCLE;
    let position = (1..=CYCLE_YEARS)
        .rev()
        .find(|&p| MONTHS_BEFORE_POSITION[p as usize] <= remainder)
        .unwrap_or(1);
    let estimated = cycles * CYCLE_YEARS + position;

    let mut year = estimated.clamp(MIN_YEAR, MAX_YEAR);
    while year > MIN_YEAR && year_start(year)? > n {
        year -= 1;
    }
    while year < MAX_YEAR && year_start(year + 1)? <= n {
        year += 1;
    }
    trace!(day_number = n.value(), estimated, year, "located year");

    let mut offset = n - year_start(year)?;
    for (index, length) in month_lengths(year)?.into_iter().enumerate() {
        let length = length as i64;
        if offset < length {
            return HebrewDate::new(year, index as i64 + 1, offset + 1);
        }
        offset -= length;
    }
    Err(CalendarError::out_of_range(format!(
        "day number {n} is past the end of year {MAX_YEAR}"
    )))
}

/// Moves `date` by `days`, stepping through whole years and then months.
pub fn add_days(date: &HebrewDate, days: i64) -> CalendarResult<HebrewDate> {
    let mut year = date.year();
    let mut offset = days_before_month(year, date.month())? + date.day() - 1 + days;

    while offset < 0 {
        year -= 1;
        check_year(year)?;
        offset += year_length(year)?;
    }
    loop {
        let length = year_length(year)?;
        if offset < length {
            break;
        }
        offset -= length;
        year += 1;
    }

    for (index, length) in month_lengths(year)?.into_iter().enumerate() {
        let length = length as i64;
        if offset < length {
            return HebrewDate::new(year, index as i64 + 1, offset + 1);
        }
        offset -= length;
    }
    Err(LuachError::calculation_error("add_days", "offset ran past the year's months").into())
}

/// Days from `from` to `to`, zero when `to` comes first.
pub fn days_between(from: &HebrewDate, to: &HebrewDate) -> CalendarResult<i64> {
    Ok(signed_days_between(from, to)?.max(0))
}

/// Days from `from` to `to`, negative when `to` comes first.
pub fn signed_days_between(from: &HebrewDate, to: &HebrewDate) -> CalendarResult<i64> {
    Ok(day_number(to)? - day_number(from)?)
}

impl HebrewDate {
    pub fn day_number(&self) -> CalendarResult<DayNumber> {
        day_number(self)
    }

    pub fn from_day_number(n: DayNumber) -> CalendarResult<Self> {
        date_from_day_number(n)
    }

    pub fn add_days(&self, days: i64) -> CalendarResult<Self> {
        add_days(self, days)
    }

    /// 1 = Sunday.
    pub fn weekday(&self) -> CalendarResult<u8> {
        Ok(day_number(self)?.weekday())
    }
}

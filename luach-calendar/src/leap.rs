//! The nineteen-year leap cycle.
//!
//! Years 3, 6, 8, 11, 14, 17 and 19 of each cycle have thirteen months, the
//! rest twelve. Year 1 of the era is year 1 of the first cycle.

use crate::errors::{CalendarError, CalendarResult};

pub const CYCLE_YEARS: i64 = 19;

/// Positions within the cycle that are leap years.
pub const LEAP_POSITIONS: [i64; 7] = [3, 6, 8, 11, 14, 17, 19];

pub const MONTHS_PER_CYCLE: i64 = 235;

/// First year of the era.
pub const MIN_YEAR: i64 = 1;

/// Largest year the engine accepts. Molad products stay far inside `i64` here.
pub const MAX_YEAR: i64 = 1_000_000;

/// Months in cycle positions `1..p`, indexed by `p` (entry 20 is the whole cycle).
pub const MONTHS_BEFORE_POSITION: [i64; 21] = months_before_position();

const fn months_before_position() -> [i64; 21] {
    let mut table = [0; 21];
    let mut p = 1;
    while p <= 19 {
        table[p + 1] = table[p] + months_at_position(p as i64);
        p += 1;
    }
    table
}

const fn months_at_position(position: i64) -> i64 {
    let mut i = 0;
    while i < LEAP_POSITIONS.len() {
        if LEAP_POSITIONS[i] == position {
            return 13;
        }
        i += 1;
    }
    12
}

/// Position of `year` within its cycle, `1..=19`.
#[inline]
pub fn cycle_position(year: i64) -> i64 {
    (year - 1).rem_euclid(CYCLE_YEARS) + 1
}

/// Index of the cycle containing `year`, zero for years 1 through 19.
#[inline]
pub fn cycle_index(year: i64) -> i64 {
    (year - 1).div_euclid(CYCLE_YEARS)
}

#[inline]
pub fn is_leap(year: i64) -> bool {
    LEAP_POSITIONS.contains(&cycle_position(year))
}

#[inline]
pub fn months_in_year(year: i64) -> i64 {
    months_at_position(cycle_position(year))
}

/// Rejects years outside `MIN_YEAR..=MAX_YEAR`.
pub fn check_year(year: i64) -> CalendarResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::out_of_range(format!(
            "year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    Ok(())
}

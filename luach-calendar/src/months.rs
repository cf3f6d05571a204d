//! Months elapsed since the epoch.
//!
//! Two independent counts of the same quantity are kept side by side: a
//! year-by-year sum and a cycle decomposition that runs in constant time. The
//! molad and the day-number engine use the closed form; the cross-check suite
//! asserts both agree.
//!
//! ```
//! use luach_calendar::months::{months_elapsed, months_in_years, months_in_years_linear};
//!
//! assert_eq!(months_elapsed(1, 1).unwrap(), 0);
//! assert_eq!(months_elapsed(2, 1).unwrap(), 12);
//! assert_eq!(months_in_years(1, 5782), 71_501);
//! assert_eq!(months_in_years_linear(1, 5782), 71_501);
//! ```

use crate::errors::{CalendarError, CalendarResult};
use crate::leap::{
    check_year, cycle_position, months_in_year, CYCLE_YEARS, MONTHS_BEFORE_POSITION,
    MONTHS_PER_CYCLE,
};

/// Months in the years `begin..end`, summed year by year.
///
/// An empty or reversed range counts zero.
pub fn months_in_years_linear(begin: i64, end: i64) -> i64 {
    (begin..end).map(months_in_year).sum()
}

/// Months in the years `begin..end` by cycle decomposition.
///
/// The range is split into the rest of `begin`'s cycle, a whole number of
/// cycles, and the head of `end`'s cycle. When both years share a cycle the
/// whole-cycle count is -1, which cancels the overlap of the two partial
/// pieces; a reversed range goes negative and is clamped to zero.
pub fn months_in_years(begin: i64, end: i64) -> i64 {
    let begin_position = cycle_position(begin);
    let end_position = cycle_position(end);
    let first_cycle_end = begin - begin_position + CYCLE_YEARS + 1;
    let last_cycle_begin = end - end_position + 1;

    let head = MONTHS_PER_CYCLE - MONTHS_BEFORE_POSITION[begin_position as usize];
    let cycles = (last_cycle_begin - first_cycle_end).div_euclid(CYCLE_YEARS);
    let tail = MONTHS_BEFORE_POSITION[end_position as usize];

    (head + cycles * MONTHS_PER_CYCLE + tail).max(0)
}

/// Checks that `month` exists in `year`.
pub fn check_month(year: i64, month: i64) -> CalendarResult<()> {
    check_year(year)?;
    let months = months_in_year(year);
    if !(1..=months).contains(&month) {
        return Err(CalendarError::invalid_date(
            year,
            month,
            1,
            format!("year {year} has {months} months"),
        ));
    }
    Ok(())
}

/// Months from the first month of year 1 to the start of `(year, month)`.
pub fn months_elapsed(year: i64, month: i64) -> CalendarResult<i64> {
    check_month(year, month)?;
    Ok(months_in_years(1, year) + month - 1)
}

/// Same as [`months_elapsed`] through the year-by-year sum.
pub fn months_elapsed_linear(year: i64, month: i64) -> CalendarResult<i64> {
    check_month(year, month)?;
    Ok(months_in_years_linear(1, year) + month - 1)
}

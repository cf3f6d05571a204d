//! Mean conjunctions (molad).
//!
//! The molad of a month is the first molad of the era plus one synodic month
//! per elapsed month. Absolute molads are counted on the day-number scale
//! (day 2 is the Monday of the first molad, hours run from 18:00 of the
//! previous evening); the week-relative form drops whole weeks.
//!
//! ```
//! use luach_calendar::molad::{molad, FIRST_MOLAD};
//! use luach_core::Duration;
//!
//! assert_eq!(molad(1, 1).unwrap(), FIRST_MOLAD);
//! assert_eq!(molad(5782, 1).unwrap(), Duration::new(3, 5, 497));
//! ```

use crate::errors::CalendarResult;
use crate::months::months_elapsed;
use luach_core::Duration;

/// Mean length of a lunar month, 29 days 12 hours 793 parts.
pub const SYNODIC_MONTH: Duration = Duration::new(29, 12, 793);

/// Molad of Tishrei of year 1: Monday, 5 hours 204 parts.
pub const FIRST_MOLAD: Duration = Duration::new(2, 5, 204);

/// Molad of `(year, month)` on the day-number scale.
pub fn molad_absolute(year: i64, month: i64) -> CalendarResult<Duration> {
    let months = months_elapsed(year, month)?;
    Ok(FIRST_MOLAD + SYNODIC_MONTH.checked_mul(months)?)
}

/// Molad of `(year, month)` with whole weeks dropped: day `0..7` of the week.
pub fn molad(year: i64, month: i64) -> CalendarResult<Duration> {
    Ok(molad_absolute(year, month)?.trim_weeks())
}

//! Year types, month lengths and year patterns.
//!
//! The gap between two consecutive year heads decides whether Cheshvan and
//! Kislev are long or short:
//!
//! | Gap (common) | Gap (leap) | Type | Cheshvan | Kislev |
//! |--------------|------------|------|----------|--------|
//! | 2 | 4 | Deficient | 29 | 29 |
//! | 3 | 5 | Regular | 29 | 30 |
//! | 4 | 6 | Complete | 30 | 30 |
//!
//! ```
//! use luach_calendar::year::{year_length, year_type, YearType};
//!
//! assert_eq!(year_type(5782).unwrap(), YearType::Regular);
//! assert_eq!(year_type(5783).unwrap(), YearType::Complete);
//! assert_eq!(year_length(5784).unwrap(), 383);
//! ```

use crate::errors::{CalendarError, CalendarResult};
use crate::leap::{check_year, is_leap, months_in_year};
use crate::months::check_month;
use crate::postponement::{following_year_head, year_head_weekday};
use core::fmt;
use luach_core::constants::DAYS_PER_WEEK;
use luach_core::numerals::number_to_word;
use luach_core::LuachError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The only year lengths the rules can produce.
pub const LEGAL_YEAR_LENGTHS: [i64; 6] = [353, 354, 355, 383, 384, 385];

const COMMON_MONTH_LENGTHS: [u8; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Adar I, inserted at position 6, has 30 days; Adar II keeps Adar's 29.
const LEAP_MONTH_LENGTHS: [u8; 13] = [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YearType {
    /// Chaserah: Cheshvan and Kislev both 29.
    Deficient,
    /// Kesidrah: the plain alternating pattern.
    Regular,
    /// Shlemah: Cheshvan and Kislev both 30.
    Complete,
}

impl YearType {
    /// Classifies a year from the weekday gap to the next year head.
    pub fn from_gap(leap: bool, gap: i64) -> Option<YearType> {
        match (leap, gap) {
            (false, 2) | (true, 4) => Some(YearType::Deficient),
            (false, 3) | (true, 5) => Some(YearType::Regular),
            (false, 4) | (true, 6) => Some(YearType::Complete),
            _ => None,
        }
    }

    /// The letter used in year patterns: ח, כ or ש.
    pub fn letter(self) -> char {
        match self {
            YearType::Deficient => 'ח',
            YearType::Regular => 'כ',
            YearType::Complete => 'ש',
        }
    }
}

/// Deficient, regular or complete, from the weekday gap between this year's
/// head and the next.
pub fn year_type(year: i64) -> CalendarResult<YearType> {
    check_year(year)?;
    let head = year_head_weekday(year)? as i64;
    let next = following_year_head(year)?.weekday as i64;
    let gap = (next - head - 1).rem_euclid(DAYS_PER_WEEK);
    YearType::from_gap(is_leap(year), gap).ok_or_else(|| {
        LuachError::calculation_error(
            "year type",
            &format!("impossible weekday gap {gap} for year {year}"),
        )
        .into()
    })
}

/// Lengths of the months of `year`, Tishrei first.
pub fn month_lengths(year: i64) -> CalendarResult<Vec<u8>> {
    let mut lengths = if is_leap(year) {
        LEAP_MONTH_LENGTHS.to_vec()
    } else {
        COMMON_MONTH_LENGTHS.to_vec()
    };
    match year_type(year)? {
        YearType::Complete => lengths[1] = 30,
        YearType::Deficient => lengths[2] = 29,
        YearType::Regular => {}
    }
    Ok(lengths)
}

pub fn month_length(year: i64, month: i64) -> CalendarResult<u8> {
    check_month(year, month)?;
    Ok(month_lengths(year)?[(month - 1) as usize])
}

/// Days in `year`, the sum of its month lengths.
pub fn year_length(year: i64) -> CalendarResult<i64> {
    Ok(month_lengths(year)?.iter().map(|&l| l as i64).sum())
}

/// Days from 1 Tishrei to the first of `month`.
pub fn days_before_month(year: i64, month: i64) -> CalendarResult<i64> {
    check_month(year, month)?;
    Ok(month_lengths(year)?[..(month - 1) as usize]
        .iter()
        .map(|&l| l as i64)
        .sum())
}

/// Ordinal of Nisan: 7 in a common year, 8 in a leap year.
pub fn nisan(year: i64) -> i64 {
    months_in_year(year) - 5
}

/// Weekday of `(year, month, day)`, 1 = Sunday, counted from the year head.
pub fn weekday(year: i64, month: i64, day: i64) -> CalendarResult<u8> {
    let head = year_head_weekday(year)? as i64;
    let offset = days_before_month(year, month)? + day - 1;
    Ok(((head + offset - 1).rem_euclid(DAYS_PER_WEEK) + 1) as u8)
}

/// The keviah of a year: head weekday, type, and weekday of 15 Nisan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearPattern {
    pub head_weekday: u8,
    pub year_type: YearType,
    pub passover_weekday: u8,
}

impl YearPattern {
    pub const fn new(head_weekday: u8, year_type: YearType, passover_weekday: u8) -> Self {
        Self {
            head_weekday,
            year_type,
            passover_weekday,
        }
    }

    pub fn is_legal(&self) -> bool {
        LEGAL_PATTERNS.contains(self)
    }
}

/// Formats as three letters, e.g. `זשה`.
impl fmt::Display for YearPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            number_to_word(self.head_weekday as u32),
            self.year_type.letter(),
            number_to_word(self.passover_weekday as u32)
        )
    }
}

/// The fourteen patterns the calendar produces.
pub const LEGAL_PATTERNS: [YearPattern; 14] = {
    use YearType::*;
    [
        YearPattern::new(2, Complete, 5),
        YearPattern::new(2, Complete, 7),
        YearPattern::new(2, Deficient, 3),
        YearPattern::new(2, Deficient, 5),
        YearPattern::new(3, Regular, 5),
        YearPattern::new(3, Regular, 7),
        YearPattern::new(5, Complete, 1),
        YearPattern::new(5, Complete, 3),
        YearPattern::new(5, Deficient, 1),
        YearPattern::new(5, Regular, 7),
        YearPattern::new(7, Complete, 3),
        YearPattern::new(7, Complete, 5),
        YearPattern::new(7, Deficient, 1),
        YearPattern::new(7, Deficient, 3),
    ]
};

pub fn year_pattern(year: i64) -> CalendarResult<YearPattern> {
    let head_weekday = year_head_weekday(year)?;
    let year_type = year_type(year)?;
    let passover_weekday = weekday(year, nisan(year), 15)?;
    Ok(YearPattern::new(head_weekday, year_type, passover_weekday))
}

/// Reports an impossible month length as an invalid date.
pub(crate) fn check_day(year: i64, month: i64, day: i64) -> CalendarResult<()> {
    let length = month_length(year, month)? as i64;
    if !(1..=length).contains(&day) {
        return Err(CalendarError::invalid_date(
            year,
            month,
            day,
            format!("month has {length} days"),
        ));
    }
    Ok(())
}

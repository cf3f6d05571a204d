//! Validated Hebrew calendar dates.

use crate::errors::CalendarResult;
use crate::leap::is_leap;
use crate::names::{month_name, month_ordinal};
use crate::year::{check_day, nisan};
use core::fmt;
use luach_core::numerals::{number_to_word, word_to_number};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A day of the Hebrew calendar: year ≥ 1, month `1..=12` or `1..=13`
/// counted from Tishrei, day `1..=30`.
///
/// Construction checks the month against the year's month count and the day
/// against the month's length. The derived ordering is chronological because
/// months are numbered from the start of the year.
///
/// ```
/// use luach_calendar::HebrewDate;
///
/// let date = HebrewDate::new(5783, 6, 26).unwrap();
/// assert_eq!(date.to_string(), "כו אדר ה'תשפג");
///
/// assert!(HebrewDate::new(5783, 13, 1).is_err());
/// assert!(HebrewDate::new(5784, 3, 30).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HebrewDate {
    year: i64,
    month: u8,
    day: u8,
}

impl HebrewDate {
    pub fn new(year: i64, month: i64, day: i64) -> CalendarResult<Self> {
        check_day(year, month, day)?;
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// The first day of `year`.
    pub fn new_year(year: i64) -> CalendarResult<Self> {
        Self::new(year, 1, 1)
    }

    /// Builds a date from a letter-numeral day, a month name and a letter-numeral year.
    ///
    /// ```
    /// use luach_calendar::HebrewDate;
    ///
    /// let epoch = HebrewDate::from_names("א", "תשרי", "ה-תשנג").unwrap();
    /// assert_eq!(epoch, HebrewDate::new(5753, 1, 1).unwrap());
    /// ```
    pub fn from_names(day: &str, month: &str, year: &str) -> CalendarResult<Self> {
        let year = word_to_number(year)? as i64;
        let month = month_ordinal(is_leap(year), month)? as i64;
        let day = word_to_number(day)? as i64;
        Self::new(year, month, day)
    }

    #[inline]
    pub fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> i64 {
        self.month as i64
    }

    #[inline]
    pub fn day(&self) -> i64 {
        self.day as i64
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap(self.year)
    }

    pub fn month_name(&self) -> &'static str {
        // Month validity was checked at construction.
        month_name(self.is_leap_year(), self.month()).unwrap_or("")
    }

    /// Whether the month is Nisan.
    pub fn is_nisan(&self) -> bool {
        self.month() == nisan(self.year)
    }
}

/// Formats as letter-numeral day, month name and letter-numeral year.
impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            number_to_word(self.day as u32),
            self.month_name(),
            number_to_word(self.year as u32)
        )
    }
}

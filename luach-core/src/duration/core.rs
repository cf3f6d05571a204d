//! Calendrical time spans in days, hours, parts and moments.
//!
//! A [`Duration`] is the treatise's clock: 24 hours to the day, 1080 parts
//! (chalakim) to the hour and 76 moments (rega'im) to the part. It serves both
//! as a time of week (the molad "2 days 5 hours 204 parts" means Monday,
//! 5 hours after 18:00 Sunday evening) and as an accumulator for products
//! such as `months × synodic month`.
//!
//! The value is held as an exact `i64` count of moments. Components are
//! extracted with Euclidean division, so a negative total still reads back
//! with hours in `0..24` and parts in `0..1080`; only the day count goes
//! negative.
//!
//! ```
//! use luach_core::Duration;
//!
//! const SYNODIC_MONTH: Duration = Duration::new(29, 12, 793);
//! let year = SYNODIC_MONTH * 12;
//! assert_eq!(year, Duration::new(354, 8, 876));
//! assert_eq!(year.trim_weeks(), Duration::new(4, 8, 876));
//! assert_eq!(year.weekday(), 4);
//! ```

use crate::constants::{DAYS_PER_WEEK, MOMENTS_PER_DAY, MOMENTS_PER_HOUR, MOMENTS_PER_PART};
use crate::errors::{LuachError, LuachResult, MathErrorKind};
use crate::numerals::word_to_number;

/// One place of a [`Duration`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationUnit {
    Moment,
    Part,
    Hour,
    Day,
}

impl DurationUnit {
    /// Size of one unit in moments.
    #[inline]
    pub const fn moments(self) -> i64 {
        match self {
            DurationUnit::Moment => 1,
            DurationUnit::Part => MOMENTS_PER_PART,
            DurationUnit::Hour => MOMENTS_PER_HOUR,
            DurationUnit::Day => MOMENTS_PER_DAY,
        }
    }
}

/// A span of days, hours, parts and moments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    moments: i64,
}

impl Duration {
    pub const ZERO: Self = Self { moments: 0 };

    /// Builds a duration from days, hours and parts.
    ///
    /// Components may overflow or be negative; the total carries across.
    pub const fn new(days: i64, hours: i64, parts: i64) -> Self {
        Self::with_moments(days, hours, parts, 0)
    }

    /// Builds a duration down to moments.
    pub const fn with_moments(days: i64, hours: i64, parts: i64, moments: i64) -> Self {
        Self {
            moments: days * MOMENTS_PER_DAY
                + hours * MOMENTS_PER_HOUR
                + parts * MOMENTS_PER_PART
                + moments,
        }
    }

    #[inline]
    pub const fn from_moments(moments: i64) -> Self {
        Self { moments }
    }

    #[inline]
    pub const fn from_days(days: i64) -> Self {
        Self {
            moments: days * MOMENTS_PER_DAY,
        }
    }

    /// Builds a duration from fractional days, rounded to the nearest moment.
    pub fn from_days_fraction(days: f64) -> LuachResult<Self> {
        let moments = libm::round(days * MOMENTS_PER_DAY as f64);
        if !moments.is_finite() || moments.abs() >= i64::MAX as f64 {
            return Err(LuachError::math_error(
                "Duration::from_days_fraction",
                MathErrorKind::NotFinite,
                "value is not a finite number of moments",
            ));
        }
        Ok(Self {
            moments: moments as i64,
        })
    }

    /// Builds a duration from letter numerals, one per place.
    ///
    /// ```
    /// use luach_core::Duration;
    ///
    /// let molad = Duration::from_numerals("ב", "ה", "רד", "").unwrap();
    /// assert_eq!(molad, Duration::new(2, 5, 204));
    /// ```
    pub fn from_numerals(days: &str, hours: &str, parts: &str, moments: &str) -> LuachResult<Self> {
        let place = |s: &str| -> LuachResult<i64> {
            if s.trim().is_empty() {
                Ok(0)
            } else {
                Ok(word_to_number(s)? as i64)
            }
        };
        Ok(Self::with_moments(
            place(days)?,
            place(hours)?,
            place(parts)?,
            place(moments)?,
        ))
    }

    #[inline]
    pub const fn total_moments(&self) -> i64 {
        self.moments
    }

    /// Whole parts, rounding toward negative infinity.
    #[inline]
    pub const fn total_parts(&self) -> i64 {
        self.moments.div_euclid(MOMENTS_PER_PART)
    }

    /// Whole days, rounding toward negative infinity.
    #[inline]
    pub const fn days(&self) -> i64 {
        self.moments.div_euclid(MOMENTS_PER_DAY)
    }

    /// Hours within the day, `0..24`.
    #[inline]
    pub const fn hours(&self) -> i64 {
        self.moments.rem_euclid(MOMENTS_PER_DAY) / MOMENTS_PER_HOUR
    }

    /// Parts within the hour, `0..1080`.
    #[inline]
    pub const fn parts(&self) -> i64 {
        self.moments.rem_euclid(MOMENTS_PER_HOUR) / MOMENTS_PER_PART
    }

    /// Moments within the part, `0..76`.
    #[inline]
    pub const fn moments(&self) -> i64 {
        self.moments.rem_euclid(MOMENTS_PER_PART)
    }

    /// The time within the day, with whole days dropped.
    #[inline]
    pub const fn time_of_day(&self) -> Self {
        Self {
            moments: self.moments.rem_euclid(MOMENTS_PER_DAY),
        }
    }

    /// Drops whole weeks, leaving days in `0..7`.
    #[inline]
    pub const fn trim_weeks(self) -> Self {
        Self {
            moments: self.moments.rem_euclid(DAYS_PER_WEEK * MOMENTS_PER_DAY),
        }
    }

    /// Weekday of the day component, `1..=7` with 1 = Sunday.
    ///
    /// Day 0 of the week-relative clock is Saturday, so a remainder of zero
    /// maps to 7.
    pub const fn weekday(&self) -> u8 {
        let w = self.days().rem_euclid(DAYS_PER_WEEK);
        if w == 0 {
            7
        } else {
            w as u8
        }
    }

    /// Value as fractional days.
    #[inline]
    pub fn as_days_fraction(&self) -> f64 {
        self.moments as f64 / MOMENTS_PER_DAY as f64
    }

    /// Value as a fraction of any unit.
    #[inline]
    pub fn as_fraction_of(&self, unit: DurationUnit) -> f64 {
        self.moments as f64 / unit.moments() as f64
    }

    /// Minutes within the hour, fractional (18 parts to the minute).
    pub fn minutes(&self) -> f64 {
        let within_hour = self.moments.rem_euclid(MOMENTS_PER_HOUR);
        within_hour as f64 * 60.0 / MOMENTS_PER_HOUR as f64
    }

    /// Drops everything below `unit`, rounding toward negative infinity.
    pub const fn truncate_to(self, unit: DurationUnit) -> Self {
        let size = unit.moments();
        Self {
            moments: self.moments.div_euclid(size) * size,
        }
    }

    /// Rounds half-up to `unit`, carrying place by place from moments upward.
    pub const fn round_to(self, unit: DurationUnit) -> Self {
        let steps = [DurationUnit::Part, DurationUnit::Hour, DurationUnit::Day];
        let mut total = self.moments;
        let mut i = 0;
        while i < steps.len() {
            let step = steps[i];
            if (step as u8) > (unit as u8) {
                break;
            }
            let size = step.moments();
            total = (total + size / 2).div_euclid(size) * size;
            i += 1;
        }
        Self { moments: total }
    }

    /// Multiplies by an integer, reporting overflow.
    pub fn checked_mul(self, k: i64) -> LuachResult<Self> {
        self.moments
            .checked_mul(k)
            .map(Self::from_moments)
            .ok_or_else(|| {
                LuachError::math_error(
                    "duration multiplication",
                    MathErrorKind::Overflow,
                    "product exceeds the representable range",
                )
            })
    }

    /// Divides by an integer, rounding toward negative infinity.
    pub fn checked_div(self, k: i64) -> LuachResult<Self> {
        if k == 0 {
            return Err(LuachError::math_error(
                "duration division",
                MathErrorKind::DivisionByZero,
                "divisor is zero",
            ));
        }
        Ok(Self::from_moments(self.moments.div_euclid(k)))
    }

    pub const fn is_negative(&self) -> bool {
        self.moments < 0
    }
}

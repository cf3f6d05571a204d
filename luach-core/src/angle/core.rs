//! Sexagesimal angle type for the treatise's astronomy.
//!
//! [`Angle`] is a position on the circle written in degrees, parts (minutes),
//! seconds and thirds. It is stored as a single total of thirds in
//! `[0, 77_760_000)`, so every constructor and every arithmetic result is
//! already normalized into one circle.
//!
//! # Quick Start
//!
//! ```
//! use luach_core::{Angle, AngleUnit};
//!
//! let mean_sun = Angle::from_dms(105, 37, 25);
//! assert_eq!(mean_sun.degrees(), 105);
//! assert_eq!(mean_sun.parts(), 37);
//! assert_eq!(mean_sun.seconds(), 25);
//!
//! // Arithmetic wraps around the circle.
//! let a = Angle::from_dms(350, 0, 0) + Angle::from_dms(20, 0, 0);
//! assert_eq!(a, Angle::from_dms(10, 0, 0));
//!
//! // Rounding cascades upward from the smallest unit.
//! let b = Angle::new(0.0, 59.0, 59.0, 30.0).round_to(AngleUnit::Second);
//! assert_eq!(b, Angle::from_dms(1, 0, 0));
//! ```
//!
//! # Equality
//!
//! Two angles compare equal when their circular distance is below
//! [`ANGLE_EPSILON_THIRDS`], so `359°59'59"59.99999'''` equals `0°`.
//! Ordering compares the stored totals and is therefore not circular.
//!
//! # Units
//!
//! | Unit | Thirds |
//! |------|--------|
//! | degree | 216 000 |
//! | part | 3 600 |
//! | second | 60 |
//! | third | 1 |

use crate::constants::{
    ANGLE_EPSILON_THIRDS, DEG_TO_RAD, THIRDS_PER_CIRCLE, THIRDS_PER_DEGREE, THIRDS_PER_PART,
    THIRDS_PER_SECOND,
};
use crate::errors::{LuachError, LuachResult, MathErrorKind};
use crate::math::{round_half_up, snapped_floor, wrap_positive};
use crate::numerals::word_to_number;
use core::cmp::Ordering;

/// One sexagesimal place of an [`Angle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AngleUnit {
    Third,
    Second,
    Part,
    Degree,
}

impl AngleUnit {
    /// Size of one unit in thirds.
    #[inline]
    pub const fn thirds(self) -> f64 {
        match self {
            AngleUnit::Third => 1.0,
            AngleUnit::Second => THIRDS_PER_SECOND,
            AngleUnit::Part => THIRDS_PER_PART,
            AngleUnit::Degree => THIRDS_PER_DEGREE,
        }
    }
}

/// A sexagesimal angle normalized into `[0°, 360°)`.
///
/// The representation is the total number of thirds as `f64`; thirds may be
/// fractional after division or interpolation. `Eq` and `Ord` are not
/// implemented because equality is tolerance based.
#[derive(Copy, Clone, Debug, Default)]
pub struct Angle {
    thirds: f64,
}

impl Angle {
    pub const ZERO: Self = Self { thirds: 0.0 };

    /// 90°.
    pub const QUARTER_CIRCLE: Self = Self {
        thirds: 90.0 * THIRDS_PER_DEGREE,
    };

    /// 180°.
    pub const HALF_CIRCLE: Self = Self {
        thirds: 180.0 * THIRDS_PER_DEGREE,
    };

    /// Builds an angle from in-range degrees, parts and seconds.
    ///
    /// `const` so that correction tables can be declared as statics. Degrees
    /// beyond one circle are wrapped; parts and seconds must already be below 60
    /// for the result to read back the same way.
    ///
    /// ```
    /// use luach_core::Angle;
    ///
    /// const APOGEE: Angle = Angle::from_dms(86, 45, 8);
    /// assert_eq!(APOGEE.to_string(), "86°45'8\"");
    /// ```
    pub const fn from_dms(degrees: u16, parts: u8, seconds: u8) -> Self {
        let total = (degrees % 360) as f64 * THIRDS_PER_DEGREE
            + parts as f64 * THIRDS_PER_PART
            + seconds as f64 * THIRDS_PER_SECOND;
        Self { thirds: total }
    }

    /// Builds an angle from in-range degrees and parts.
    pub const fn from_dm(degrees: u16, parts: u8) -> Self {
        Self::from_dms(degrees, parts, 0)
    }

    /// Builds an angle from arbitrary real components.
    ///
    /// Negative or oversized components are allowed; the total is taken and
    /// wrapped into one circle, e.g. `new(0, -1, 0, 0)` is `359°59'`.
    pub fn new(degrees: f64, parts: f64, seconds: f64, thirds: f64) -> Self {
        Self::from_thirds(
            degrees * THIRDS_PER_DEGREE
                + parts * THIRDS_PER_PART
                + seconds * THIRDS_PER_SECOND
                + thirds,
        )
    }

    /// Builds an angle from a total count of thirds, wrapping into one circle.
    #[inline]
    pub fn from_thirds(thirds: f64) -> Self {
        Self {
            thirds: wrap_positive(thirds, THIRDS_PER_CIRCLE),
        }
    }

    /// Builds an angle from fractional degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_thirds(degrees * THIRDS_PER_DEGREE)
    }

    /// Builds an angle from letter numerals, one per place.
    ///
    /// Empty strings count as zero.
    ///
    /// ```
    /// use luach_core::Angle;
    ///
    /// let a = Angle::from_numerals("קה", "לז", "כה").unwrap();
    /// assert_eq!(a, Angle::from_dms(105, 37, 25));
    /// ```
    pub fn from_numerals(degrees: &str, parts: &str, seconds: &str) -> LuachResult<Self> {
        let place = |s: &str| -> LuachResult<f64> {
            if s.trim().is_empty() {
                Ok(0.0)
            } else {
                Ok(word_to_number(s)? as f64)
            }
        };
        Ok(Self::new(place(degrees)?, place(parts)?, place(seconds)?, 0.0))
    }

    /// Total value in thirds, in `[0, 77_760_000)`.
    #[inline]
    pub fn total_thirds(&self) -> f64 {
        self.thirds
    }

    /// Whole degrees, `0..360`.
    pub fn degrees(&self) -> u16 {
        (self.snapped(AngleUnit::Degree) as u16) % 360
    }

    /// Whole parts within the degree, `0..60`.
    pub fn parts(&self) -> u8 {
        (self.snapped(AngleUnit::Part) as i64).rem_euclid(60) as u8
    }

    /// Whole seconds within the part, `0..60`.
    pub fn seconds(&self) -> u8 {
        (self.snapped(AngleUnit::Second) as i64).rem_euclid(60) as u8
    }

    /// Thirds within the second, possibly fractional, in `[0, 60)`.
    pub fn thirds(&self) -> f64 {
        let whole_seconds = self.snapped(AngleUnit::Second);
        (self.thirds - whole_seconds * THIRDS_PER_SECOND).max(0.0)
    }

    /// Whole units of `unit` contained in the angle, snapping values that sit
    /// within the equality tolerance below a boundary.
    fn snapped(&self, unit: AngleUnit) -> f64 {
        snapped_floor(self.thirds / unit.thirds(), ANGLE_EPSILON_THIRDS / unit.thirds())
    }

    /// Value as fractional degrees, in `[0, 360)`.
    #[inline]
    pub fn as_degrees_fraction(&self) -> f64 {
        self.thirds / THIRDS_PER_DEGREE
    }

    /// Value as a fraction of any unit.
    #[inline]
    pub fn as_fraction_of(&self, unit: AngleUnit) -> f64 {
        self.thirds / unit.thirds()
    }

    /// Drops whole circles. Angles are kept inside one circle, so this only
    /// re-normalizes the stored total.
    #[inline]
    pub fn remove_circles(self) -> Self {
        Self::from_thirds(self.thirds)
    }

    /// Drops everything below `unit`.
    ///
    /// A value within the equality tolerance of the next boundary is snapped
    /// up to it rather than truncated down.
    pub fn truncate_to(self, unit: AngleUnit) -> Self {
        Self::from_thirds(self.snapped(unit) * unit.thirds())
    }

    /// Rounds half-up to `unit`, carrying place by place from thirds upward.
    ///
    /// Rounding to parts first rounds thirds into seconds, then seconds into
    /// parts, so `0°0'29"30'''` rounds to `0°1'`.
    pub fn round_to(self, unit: AngleUnit) -> Self {
        let mut total = self.thirds;
        for step in [AngleUnit::Second, AngleUnit::Part, AngleUnit::Degree] {
            if step > unit {
                break;
            }
            let size = step.thirds();
            total = round_half_up(total / size) * size;
        }
        Self::from_thirds(total)
    }

    #[inline]
    pub fn remove_thirds(self) -> Self {
        self.truncate_to(AngleUnit::Second)
    }

    #[inline]
    pub fn remove_seconds(self) -> Self {
        self.truncate_to(AngleUnit::Part)
    }

    #[inline]
    pub fn round_seconds(self) -> Self {
        self.round_to(AngleUnit::Second)
    }

    #[inline]
    pub fn round_to_parts(self) -> Self {
        self.round_to(AngleUnit::Part)
    }

    #[inline]
    pub fn round_to_degrees(self) -> Self {
        self.round_to(AngleUnit::Degree)
    }

    /// Degrees mapped into `(-180, 180]`.
    #[inline]
    pub fn signed_degrees(&self) -> f64 {
        super::normalize::signed_degrees(self.as_degrees_fraction())
    }

    /// Shortest distance around the circle to `other`, in thirds.
    pub fn circular_distance(&self, other: &Angle) -> f64 {
        let d = (self.thirds - other.thirds).abs();
        d.min(THIRDS_PER_CIRCLE - d)
    }

    /// Divides by a scalar, rejecting a zero or non-finite divisor.
    pub fn checked_div(self, k: f64) -> LuachResult<Self> {
        if k == 0.0 {
            return Err(LuachError::math_error(
                "angle division",
                MathErrorKind::DivisionByZero,
                "divisor is zero",
            ));
        }
        if !k.is_finite() {
            return Err(LuachError::math_error(
                "angle division",
                MathErrorKind::NotFinite,
                "divisor is not finite",
            ));
        }
        Ok(Self::from_thirds(self.thirds / k))
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        libm::sin(self.as_degrees_fraction() * DEG_TO_RAD)
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        libm::cos(self.as_degrees_fraction() * DEG_TO_RAD)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.circular_distance(other) < ANGLE_EPSILON_THIRDS
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.thirds.partial_cmp(&other.thirds)
    }
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(x: f64) -> Angle {
    Angle::from_degrees(x)
}

/// Shorthand for [`Angle::from_dm`].
#[inline]
pub const fn dm(degrees: u16, parts: u8) -> Angle {
    Angle::from_dm(degrees, parts)
}

/// Shorthand for [`Angle::from_dms`].
#[inline]
pub const fn dms(degrees: u16, parts: u8, seconds: u8) -> Angle {
    Angle::from_dms(degrees, parts, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let a = Angle::new(104.0, 59.0, 25.0, 30.0);
        assert_eq!(a.degrees(), 104);
        assert_eq!(a.parts(), 59);
        assert_eq!(a.seconds(), 25);
        assert!((a.thirds() - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_new_normalizes_negative_and_oversized() {
        assert_eq!(Angle::new(0.0, -1.0, 0.0, 0.0), dm(359, 59));
        assert_eq!(Angle::new(370.0, 0.0, 0.0, 0.0), dm(10, 0));
        assert_eq!(Angle::new(0.0, 90.0, 0.0, 0.0), dm(1, 30));
        assert_eq!(Angle::from_degrees(-360.0), Angle::ZERO);
    }

    #[test]
    fn test_equality_is_circular() {
        let just_below = Angle::from_thirds(THIRDS_PER_CIRCLE - 1e-5);
        assert_eq!(just_below, Angle::ZERO);
        assert_ne!(dms(0, 0, 1), Angle::ZERO);
    }

    #[test]
    fn test_ordering() {
        assert!(dm(10, 0) < dm(20, 0));
        assert!(dm(359, 0) > dm(1, 0));
        assert_eq!(
            dm(5, 0).partial_cmp(&Angle::new(5.0, 0.0, 0.0, 1e-6)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_truncation_snaps_within_epsilon() {
        let a = Angle::from_thirds(25.0 * THIRDS_PER_SECOND - 1e-6);
        assert_eq!(a.seconds(), 25);
        assert_eq!(a.remove_thirds(), dms(0, 0, 25));
    }

    #[test]
    fn test_remove_thirds_and_seconds() {
        let a = Angle::new(35.0, 38.0, 33.0, 50.0);
        assert_eq!(a.remove_thirds(), dms(35, 38, 33));
        assert_eq!(a.remove_seconds(), dm(35, 38));
    }

    #[test]
    fn test_round_cascades() {
        assert_eq!(Angle::new(0.0, 0.0, 29.0, 30.0).round_to_parts(), dm(0, 1));
        assert_eq!(Angle::new(0.0, 0.0, 29.0, 29.0).round_to_parts(), Angle::ZERO);
        assert_eq!(Angle::new(53.0, 36.0, 38.0, 30.0).round_seconds(), dms(53, 36, 39));
        assert_eq!(Angle::new(359.0, 59.0, 59.0, 30.0).round_seconds(), Angle::ZERO);
        assert_eq!(dm(10, 30).round_to_degrees(), dm(11, 0));
    }

    #[test]
    fn test_signed_degrees() {
        assert_eq!(dm(90, 0).signed_degrees(), 90.0);
        assert_eq!(dm(180, 0).signed_degrees(), 180.0);
        assert_eq!(dm(270, 0).signed_degrees(), -90.0);
        assert_eq!(Angle::ZERO.signed_degrees(), 0.0);
    }

    #[test]
    fn test_from_numerals() {
        assert_eq!(Angle::from_numerals("ז", "ג", "לב").unwrap(), dms(7, 3, 32));
        assert_eq!(Angle::from_numerals("קפ", "", "").unwrap(), dm(180, 0));
        assert!(Angle::from_numerals("x", "", "").is_err());
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(dm(91, 0).checked_div(2.0).unwrap(), dm(45, 30));
        assert!(dm(1, 0).checked_div(0.0).is_err());
    }

    #[test]
    fn test_trig() {
        assert!((dm(90, 0).sin() - 1.0).abs() < 1e-12);
        assert!((dm(180, 0).cos() + 1.0).abs() < 1e-12);
    }
}

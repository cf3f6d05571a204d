//! Static correction tables and their lookup rules.
//!
//! The treatise gives its corrections as small tables. Three shapes occur:
//!
//! | Shape | Type | Lookup |
//! |-------|------|--------|
//! | Values every `step` degrees over a reduced domain | [`CorrectionTable`] | reduce, round, interpolate linearly |
//! | Half-open degree ranges mapped to a value | [`BandTable`] | the band containing the argument |
//! | Ascending breakpoints mapped to a value | [`Breakpoints`] | the first breakpoint strictly above the argument |
//!
//! Lookups return `None` outside the table's domain; the caller turns that into
//! its own error, since a miss means the table itself is wrong.
//!
//! # Reduction
//!
//! A [`CorrectionTable`] covers only part of the circle and is extended by
//! symmetry:
//!
//! - [`Reduction::HalfCircle`]: arguments above 180° become `360 - x`; the
//!   correction changes sign.
//! - [`Reduction::Quadrant`]: arguments fold into `[0, 90]`; arguments above
//!   180° are flagged (the southern half for latitudes).
//!
//! ```
//! use luach_core::table::{ArgumentRounding, CorrectionTable, Reduction};
//! use luach_core::angle::dm;
//! use luach_core::Angle;
//!
//! static LATITUDE: CorrectionTable = CorrectionTable::new(
//!     "latitude",
//!     10.0,
//!     &[dm(0, 0), dm(0, 52), dm(1, 43), dm(2, 30), dm(3, 13),
//!       dm(3, 50), dm(4, 20), dm(4, 42), dm(4, 55), dm(5, 0)],
//!     Reduction::Quadrant,
//!     ArgumentRounding::Floor,
//! );
//!
//! let c = LATITUDE.lookup(Angle::from_degrees(185.0)).unwrap();
//! assert_eq!(c.value, dm(0, 26));
//! assert!(c.reflected);
//! ```

use crate::angle::{fold_quadrant, reflect_half_circle, Angle};
use crate::math::round_half_up;

/// How a table's argument is brought into its covered domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reduction {
    /// The table covers `[0, 180]`.
    HalfCircle,
    /// The table covers `[0, 90]`.
    Quadrant,
}

/// How the reduced argument is snapped before interpolation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentRounding {
    /// Nearest whole degree, halves upward.
    Nearest,
    /// Whole degrees, dropping the fraction.
    Floor,
    /// No snapping.
    Exact,
}

impl ArgumentRounding {
    fn apply(self, degrees: f64) -> f64 {
        match self {
            ArgumentRounding::Nearest => round_half_up(degrees),
            ArgumentRounding::Floor => libm::floor(degrees),
            ArgumentRounding::Exact => degrees,
        }
    }
}

/// Result of a [`CorrectionTable`] lookup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Correction {
    /// Magnitude of the correction.
    pub value: Angle,
    /// Whether the argument lay in the reflected half of the circle.
    pub reflected: bool,
}

/// Values tabulated every `step` degrees from zero, extended by a [`Reduction`].
#[derive(Debug)]
pub struct CorrectionTable {
    name: &'static str,
    step: f64,
    values: &'static [Angle],
    reduction: Reduction,
    rounding: ArgumentRounding,
}

impl CorrectionTable {
    pub const fn new(
        name: &'static str,
        step: f64,
        values: &'static [Angle],
        reduction: Reduction,
        rounding: ArgumentRounding,
    ) -> Self {
        Self {
            name,
            step,
            values,
            reduction,
            rounding,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn values(&self) -> &'static [Angle] {
        self.values
    }

    /// Largest argument the table covers before reduction, in degrees.
    pub fn domain_end(&self) -> f64 {
        self.step * (self.values.len().saturating_sub(1)) as f64
    }

    /// Reduces, rounds and interpolates the correction for `argument`.
    pub fn lookup(&self, argument: Angle) -> Option<Correction> {
        let degrees = argument.as_degrees_fraction();
        let (reduced, reflected) = match self.reduction {
            Reduction::HalfCircle => reflect_half_circle(degrees),
            Reduction::Quadrant => fold_quadrant(degrees),
        };
        let value = self.interpolate(self.rounding.apply(reduced))?;
        Some(Correction { value, reflected })
    }

    /// Linear interpolation between the two entries around `degrees`.
    ///
    /// Follows the table's own direction, so decreasing stretches interpolate
    /// downward.
    pub fn interpolate(&self, degrees: f64) -> Option<Angle> {
        if !(0.0..=self.domain_end()).contains(&degrees) {
            return None;
        }
        let index = libm::floor(degrees / self.step) as usize;
        let low = self.values.get(index)?;
        let Some(high) = self.values.get(index + 1) else {
            return Some(*low);
        };
        let fraction = (degrees - index as f64 * self.step) / self.step;
        let (lo, hi) = (low.total_thirds(), high.total_thirds());
        Some(Angle::from_thirds(lo + (hi - lo) * fraction))
    }
}

/// A half-open degree range `[start, end)` carrying a value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band<T> {
    pub start: f64,
    pub end: f64,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(start: f64, end: f64, value: T) -> Self {
        Self { start, end, value }
    }
}

/// A list of non-overlapping bands covering a degree domain.
#[derive(Debug)]
pub struct BandTable<T: 'static> {
    name: &'static str,
    bands: &'static [Band<T>],
}

impl<T: 'static> BandTable<T> {
    pub const fn new(name: &'static str, bands: &'static [Band<T>]) -> Self {
        Self { name, bands }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bands(&self) -> &'static [Band<T>] {
        self.bands
    }

    /// The value of the band containing `degrees`.
    pub fn lookup(&self, degrees: f64) -> Option<&'static T> {
        self.bands
            .iter()
            .find(|b| b.start <= degrees && degrees < b.end)
            .map(|b| &b.value)
    }

    /// Whether the bands tile `[start, end)` contiguously in order.
    pub fn covers(&self, start: f64, end: f64) -> bool {
        let mut cursor = start;
        for band in self.bands {
            if band.start != cursor || band.end <= band.start {
                return false;
            }
            cursor = band.end;
        }
        cursor == end
    }
}

/// Ascending breakpoints; a lookup takes the first breakpoint above the argument.
#[derive(Debug)]
pub struct Breakpoints<T: 'static> {
    name: &'static str,
    points: &'static [(f64, T)],
}

impl<T: 'static> Breakpoints<T> {
    pub const fn new(name: &'static str, points: &'static [(f64, T)]) -> Self {
        Self { name, points }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn points(&self) -> &'static [(f64, T)] {
        self.points
    }

    pub fn lookup(&self, degrees: f64) -> Option<&'static T> {
        self.points
            .iter()
            .find(|(bp, _)| degrees < *bp)
            .map(|(_, v)| v)
    }

    /// Whether the breakpoints strictly increase.
    pub fn is_ascending(&self) -> bool {
        self.points.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::dm;

    static SUN: CorrectionTable = CorrectionTable::new(
        "sun",
        10.0,
        &[
            dm(0, 0),
            dm(0, 20),
            dm(0, 40),
            dm(0, 58),
            dm(1, 15),
            dm(1, 29),
            dm(1, 41),
            dm(1, 51),
            dm(1, 57),
            dm(1, 59),
            dm(1, 58),
            dm(1, 53),
            dm(1, 45),
            dm(1, 33),
            dm(1, 19),
            dm(1, 1),
            dm(0, 42),
            dm(0, 21),
            dm(0, 0),
        ],
        Reduction::HalfCircle,
        ArgumentRounding::Nearest,
    );

    static BANDS: BandTable<i8> = BandTable::new(
        "bands",
        &[Band::new(0.0, 15.0, 0), Band::new(15.0, 60.0, 1), Band::new(60.0, 360.0, 2)],
    );

    static POINTS: Breakpoints<u8> = Breakpoints::new("points", &[(20.0, 1), (40.0, 2), (360.0, 3)]);

    #[test]
    fn test_exact_and_interpolated() {
        assert_eq!(SUN.lookup(dm(90, 0)).unwrap().value, dm(1, 59));
        assert_eq!(SUN.lookup(dm(65, 0)).unwrap().value, dm(1, 46));
        assert_eq!(SUN.lookup(dm(67, 0)).unwrap().value, dm(1, 48));
        assert_eq!(SUN.lookup(dm(19, 0)).unwrap().value, dm(0, 38));
    }

    #[test]
    fn test_decreasing_stretch() {
        assert_eq!(SUN.lookup(dm(100, 0)).unwrap().value, dm(1, 58));
        assert_eq!(SUN.lookup(dm(105, 0)).unwrap().value, Angle::new(1.0, 55.5, 0.0, 0.0));
    }

    #[test]
    fn test_reflection() {
        let c = SUN.lookup(dm(200, 0)).unwrap();
        assert_eq!(c.value, dm(0, 42));
        assert!(c.reflected);
        assert!(!SUN.lookup(dm(180, 0)).unwrap().reflected);
    }

    #[test]
    fn test_argument_rounding() {
        // 64°30' rounds up to 65°.
        assert_eq!(SUN.lookup(dm(64, 30)).unwrap().value, dm(1, 46));
        assert_eq!(SUN.lookup(dm(179, 50)).unwrap().value, Angle::ZERO);
    }

    #[test]
    fn test_interpolate_domain() {
        assert_eq!(SUN.domain_end(), 180.0);
        assert!(SUN.interpolate(181.0).is_none());
        assert!(SUN.interpolate(-1.0).is_none());
        assert_eq!(SUN.interpolate(180.0), Some(Angle::ZERO));
    }

    #[test]
    fn test_bands() {
        assert_eq!(BANDS.lookup(14.99), Some(&0));
        assert_eq!(BANDS.lookup(15.0), Some(&1));
        assert_eq!(BANDS.lookup(360.0), None);
        assert!(BANDS.covers(0.0, 360.0));
        assert!(!BANDS.covers(0.0, 400.0));
    }

    #[test]
    fn test_breakpoints_strictly_greater() {
        assert_eq!(POINTS.lookup(19.9), Some(&1));
        assert_eq!(POINTS.lookup(20.0), Some(&2));
        assert_eq!(POINTS.lookup(360.0), None);
        assert!(POINTS.is_ascending());
    }
}

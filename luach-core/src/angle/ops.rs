//! Arithmetic operators for [`Angle`].
//!
//! Two angles combine place by place through their totals. Mixing with a plain
//! `f64` treats the scalar as fractional degrees for `+` and `-`, and as a
//! factor for `*` and `/`. Every result is wrapped back into one circle.

use super::core::Angle;
use crate::constants::THIRDS_PER_DEGREE;
use core::iter::Sum;
use core::ops::*;

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_thirds(self.total_thirds() + rhs.total_thirds())
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_thirds(self.total_thirds() - rhs.total_thirds())
    }
}

/// Angle + degrees → Angle
impl Add<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, degrees: f64) -> Self {
        Angle::from_thirds(self.total_thirds() + degrees * THIRDS_PER_DEGREE)
    }
}

/// Angle - degrees → Angle
impl Sub<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, degrees: f64) -> Self {
        Angle::from_thirds(self.total_thirds() - degrees * THIRDS_PER_DEGREE)
    }
}

/// Angle * scalar → Angle
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_thirds(self.total_thirds() * k)
    }
}

/// scalar * Angle → Angle
impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, a: Angle) -> Angle {
        a * self
    }
}

/// Angle / scalar → Angle
///
/// A zero divisor yields a meaningless angle; use [`Angle::checked_div`] when
/// the divisor is not known to be non-zero.
impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_thirds(self.total_thirds() / k)
    }
}

/// -Angle → Angle, the reflection `360° - a`.
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_thirds(-self.total_thirds())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Angle {
    fn sum<I: Iterator<Item = Angle>>(iter: I) -> Self {
        iter.fold(Angle::ZERO, |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{dm, dms};

    #[test]
    fn test_add_sub_wrap() {
        assert_eq!(dm(350, 0) + dm(20, 0), dm(10, 0));
        assert_eq!(dm(10, 0) - dm(20, 0), dm(350, 0));
        assert_eq!(dms(105, 37, 25) - dms(0, 38, 0), dms(104, 59, 25));
    }

    #[test]
    fn test_mixed_scalar() {
        assert_eq!(dm(10, 0) + 0.5, dm(10, 30));
        assert_eq!(dm(0, 0) - 1.0, dm(359, 0));
    }

    #[test]
    fn test_mul_div() {
        assert_eq!(dm(100, 0) * 4.0, dm(40, 0));
        assert_eq!(2.0 * dm(45, 0), dm(90, 0));
        assert_eq!(dm(91, 0) / 2.0, dm(45, 30));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-dm(10, 0), dm(350, 0));
        assert_eq!(-Angle::ZERO, Angle::ZERO);
    }

    #[test]
    fn test_sum_and_assign() {
        let total: Angle = [dm(120, 0), dm(120, 0), dm(120, 0)].into_iter().sum();
        assert_eq!(total, Angle::ZERO);
        let mut a = dm(1, 0);
        a += dm(2, 0);
        a -= dm(0, 30);
        assert_eq!(a, dm(2, 30));
    }
}

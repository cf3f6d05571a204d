//! Arithmetic operators and formatting for [`Duration`].
//!
//! Durations add and subtract exactly. Integer scaling is exact; division by
//! an integer rounds toward negative infinity, and panics on a zero divisor
//! like integer division does (see [`Duration::checked_div`]).

use super::core::Duration;
use core::fmt;
use core::iter::Sum;
use core::ops::*;

impl Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Duration::from_moments(self.total_moments() + rhs.total_moments())
    }
}

impl Sub for Duration {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Duration::from_moments(self.total_moments() - rhs.total_moments())
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;
    #[inline]
    fn mul(self, k: i64) -> Self {
        Duration::from_moments(self.total_moments() * k)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;
    #[inline]
    fn mul(self, d: Duration) -> Duration {
        d * self
    }
}

impl Div<i64> for Duration {
    type Output = Duration;
    #[inline]
    fn div(self, k: i64) -> Self {
        Duration::from_moments(self.total_moments().div_euclid(k))
    }
}

impl Neg for Duration {
    type Output = Duration;
    #[inline]
    fn neg(self) -> Self {
        Duration::from_moments(-self.total_moments())
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

/// Formats as `2d 5h 204p`, with moments appended when present.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}p", self.days(), self.hours(), self.parts())?;
        if self.moments() != 0 {
            write!(f, " {}m", self.moments())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let molad = Duration::new(2, 5, 204);
        let month = Duration::new(29, 12, 793);
        assert_eq!(molad + month, Duration::new(31, 17, 997));
        assert_eq!((molad + month) - month, molad);
    }

    #[test]
    fn test_mul_div() {
        let month = Duration::new(29, 12, 793);
        assert_eq!(month * 235, 235 * month);
        let shmuel = Duration::new(365, 6, 0);
        assert_eq!(shmuel * 19 - month * 235, Duration::new(0, 1, 485));
        assert_eq!(Duration::new(1, 0, 0) / 2, Duration::new(0, 12, 0));
    }

    #[test]
    fn test_neg_and_sum() {
        assert_eq!(-Duration::new(0, 0, 1) + Duration::new(0, 0, 1), Duration::ZERO);
        let total: Duration = (0..7).map(|_| Duration::new(1, 0, 0)).sum();
        assert_eq!(total.trim_weeks(), Duration::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::new(2, 5, 204).to_string(), "2d 5h 204p");
        assert_eq!(
            Duration::with_moments(365, 5, 997, 48).to_string(),
            "365d 5h 997p 48m"
        );
    }
}

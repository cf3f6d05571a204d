//! Whether the new crescent can be seen on the evening that begins a date.
//!
//! The first longitude, the distance of the true moon from the true sun,
//! settles most evenings on its own. When it falls between the limits, the
//! arc of vision is worked out through four successive longitudes and
//! compared with the treatise's limits of vision.
//!
//! ```
//! use luach_astro::{Sky, Visibility};
//! use luach_calendar::HebrewDate;
//!
//! let sky = Sky::default();
//! let date = HebrewDate::new(4938, 9, 2).unwrap();
//! assert_eq!(sky.visibility(&date).unwrap(), Visibility::Indeterminate);
//! assert!(sky.is_crescent_visible(&date).unwrap());
//! ```

use crate::errors::{SkyError, SkyResult};
use crate::latitude::Latitude;
use crate::sky::Sky;
use crate::tables::{MOON_CIRCLE, SIGN_FACTORS};
use core::fmt;
use luach_calendar::HebrewDate;
use luach_core::{Angle, Zodiac};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Visibility {
    Visible,
    NotVisible,
    /// The first longitude alone does not decide; see
    /// [`Sky::is_crescent_visible`].
    Indeterminate,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => f.write_str("visible"),
            Visibility::NotVisible => f.write_str("not visible"),
            Visibility::Indeterminate => f.write_str("indeterminate"),
        }
    }
}

/// First-longitude limits `(not visible at or below, visible above)`.
const LIMITS_OUTSIDE: (f64, f64) = (9.0, 15.0);
const LIMITS_CANCER_TO_SAGITTARIUS: (f64, f64) = (10.0, 24.0);

/// Arc of vision bounds: at or below never seen, above always seen.
const ARC_NEVER: f64 = 9.0;
const ARC_ALWAYS: f64 = 14.0;

/// Every step of the arc of vision for one evening. Longitudes are signed
/// degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcOfVision {
    pub true_sun: Angle,
    pub true_moon: Angle,
    /// Sign of the true moon, which keys every table below.
    pub sign: Zodiac,
    pub first_longitude: f64,
    pub first_latitude: Latitude,
    pub second_longitude: f64,
    pub second_latitude: Latitude,
    /// Signed moon-circle correction taking the second longitude to the third.
    pub circle_correction: f64,
    pub third_longitude: f64,
    pub fourth_longitude: f64,
    pub arc: f64,
}

impl ArcOfVision {
    /// Resolves visibility with the limits of vision.
    pub fn is_visible(&self) -> bool {
        if self.arc <= ARC_NEVER {
            return false;
        }
        if self.arc > ARC_ALWAYS {
            return true;
        }
        // Each whole degree of arc above nine lowers the first longitude
        // needed by one, from thirteen down to nine.
        let needed = 13.0 - (libm::ceil(self.arc) - 10.0);
        self.first_longitude >= needed
    }
}

fn first_longitude_limits(moon: Angle) -> (f64, f64) {
    if Zodiac::of(moon).is_capricorn_to_gemini() {
        LIMITS_OUTSIDE
    } else {
        LIMITS_CANCER_TO_SAGITTARIUS
    }
}

impl Sky {
    /// True moon minus true sun, in `(-180, 180]`.
    pub fn first_longitude(&self, date: &HebrewDate) -> SkyResult<f64> {
        Ok((self.true_moon(date)? - self.true_sun(date)?).signed_degrees())
    }

    /// Three-valued verdict from the first longitude alone.
    pub fn visibility(&self, date: &HebrewDate) -> SkyResult<Visibility> {
        let moon = self.true_moon(date)?;
        let first = (moon - self.true_sun(date)?).signed_degrees();
        let (never, always) = first_longitude_limits(moon);
        Ok(if first <= never {
            Visibility::NotVisible
        } else if first > always {
            Visibility::Visible
        } else {
            Visibility::Indeterminate
        })
    }

    #[tracing::instrument(level = "debug", skip_all, fields(date = %date, model = %self.model()))]
    pub fn arc_of_vision(&self, date: &HebrewDate) -> SkyResult<ArcOfVision> {
        let true_sun = self.true_sun(date)?;
        let true_moon = self.true_moon(date)?;
        let first_latitude = self.latitude(date)?;
        let sign = Zodiac::of(true_moon);
        let parallax = &self.params().parallax;

        let first_longitude = (true_moon - true_sun).signed_degrees();
        let second_longitude =
            first_longitude - parallax.longitude[sign.index()].as_degrees_fraction();
        let second_latitude = first_latitude.lowered_by(parallax.latitude[sign.index()]);

        let moon_degrees = true_moon.as_degrees_fraction();
        let fraction = MOON_CIRCLE
            .lookup(moon_degrees)
            .ok_or_else(|| SkyError::table_miss(MOON_CIRCLE.name(), moon_degrees))?;
        let circle = second_latitude.value.as_degrees_fraction() * fraction;
        let subtract = sign.is_capricorn_to_gemini() != second_latitude.south;
        let circle_correction = if subtract { -circle } else { circle };
        let third_longitude = second_longitude + circle_correction;
        let fourth_longitude = third_longitude * SIGN_FACTORS[sign.index()];

        let latitude_share = first_latitude.value.as_degrees_fraction() * 2.0 / 3.0;
        let arc = if first_latitude.south {
            fourth_longitude - latitude_share
        } else {
            fourth_longitude + latitude_share
        };
        if !arc.is_finite() {
            return Err(SkyError::not_finite("arc of vision"));
        }

        debug!(first_longitude, arc, sign = %sign, "arc of vision");
        Ok(ArcOfVision {
            true_sun,
            true_moon,
            sign,
            first_longitude,
            first_latitude,
            second_longitude,
            second_latitude,
            circle_correction,
            third_longitude,
            fourth_longitude,
            arc,
        })
    }

    /// Settles the crescent's visibility, working out the arc of vision only
    /// when the first longitude leaves it open.
    pub fn is_crescent_visible(&self, date: &HebrewDate) -> SkyResult<bool> {
        match self.visibility(date)? {
            Visibility::Visible => Ok(true),
            Visibility::NotVisible => Ok(false),
            Visibility::Indeterminate => Ok(self.arc_of_vision(date)?.is_visible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_core::angle::dm;

    fn arc(first_longitude: f64, arc: f64) -> ArcOfVision {
        ArcOfVision {
            true_sun: Angle::ZERO,
            true_moon: Angle::ZERO,
            sign: Zodiac::Aries,
            first_longitude,
            first_latitude: Latitude::north(Angle::ZERO),
            second_longitude: 0.0,
            second_latitude: Latitude::north(Angle::ZERO),
            circle_correction: 0.0,
            third_longitude: 0.0,
            fourth_longitude: 0.0,
            arc,
        }
    }

    #[test]
    fn test_limits_of_vision() {
        assert!(!arc(20.0, 9.0).is_visible());
        assert!(arc(0.0, 14.5).is_visible());
        assert!(arc(13.0, 9.5).is_visible());
        assert!(!arc(12.9, 9.5).is_visible());
        assert!(arc(12.0, 10.5).is_visible());
        assert!(!arc(11.9, 11.0).is_visible());
        assert!(arc(11.0, 11.2).is_visible());
        assert!(arc(10.0, 13.0).is_visible());
        assert!(arc(9.0, 13.5).is_visible());
        assert!(!arc(8.9, 14.0).is_visible());
    }

    #[test]
    fn test_first_longitude_limits_by_sign() {
        assert_eq!(first_longitude_limits(dm(48, 36)), LIMITS_OUTSIDE);
        assert_eq!(first_longitude_limits(dm(100, 0)), LIMITS_CANCER_TO_SAGITTARIUS);
        assert_eq!(first_longitude_limits(dm(269, 59)), LIMITS_CANCER_TO_SAGITTARIUS);
        assert_eq!(first_longitude_limits(dm(270, 0)), LIMITS_OUTSIDE);
    }

    #[test]
    fn test_worked_evening() {
        let sky = Sky::default();
        let date = HebrewDate::new(4938, 9, 2).unwrap();
        let a = sky.arc_of_vision(&date).unwrap();
        assert_eq!(a.sign, Zodiac::Taurus);
        assert!(a.first_latitude.south);
        assert!(a.second_latitude.south);
        assert!(a.circle_correction > 0.0);
        assert!((a.first_longitude - sky.first_longitude(&date).unwrap()).abs() < 1e-9);
        assert!((a.arc - (11.0 + 10.0 / 60.0)).abs() < 1.0 / 60.0);
        assert!(a.is_visible());
    }

    #[test]
    fn test_evenings_around_conjunction() {
        // The evening that began 29 Elul 5783 came before the conjunction.
        let sky = Sky::default();
        let before = HebrewDate::new(5783, 12, 29).unwrap();
        assert!(sky.first_longitude(&before).unwrap() < 0.0);
        assert_eq!(sky.visibility(&before).unwrap(), Visibility::NotVisible);
        assert!(!sky.is_crescent_visible(&before).unwrap());

        let first_night = HebrewDate::new(5784, 1, 1).unwrap();
        assert_eq!(sky.visibility(&first_night).unwrap(), Visibility::NotVisible);
        let second_night = HebrewDate::new(5784, 1, 2).unwrap();
        assert_eq!(sky.visibility(&second_night).unwrap(), Visibility::Indeterminate);
    }

    #[test]
    fn test_display() {
        assert_eq!(Visibility::Indeterminate.to_string(), "indeterminate");
    }
}

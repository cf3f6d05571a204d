//! The moon's longitude, from the mean motion through the true path to the
//! true location.
//!
//! The mean moon is first moved to the hour of sunset by a band table keyed
//! on the sun's mean longitude. The double distance then shifts the mean
//! path, and the path's correction gives the true moon.

use crate::errors::{SkyError, SkyResult};
use crate::sky::Sky;
use crate::tables::{DOUBLE_DISTANCE_BANDS, MOON_PATH, SUNSET_BANDS};
use luach_calendar::HebrewDate;
use luach_core::constants::THIRDS_PER_PART;
use luach_core::Angle;

impl Sky {
    pub fn mean_moon(&self, date: &HebrewDate) -> SkyResult<Angle> {
        self.params().mean_moon.at(date)
    }

    pub fn mean_path(&self, date: &HebrewDate) -> SkyResult<Angle> {
        self.params().mean_path.at(date)
    }

    /// Mean moon at sunset, adjusted by the band the mean sun stands in.
    pub fn mean_moon_at_sunset(&self, date: &HebrewDate) -> SkyResult<Angle> {
        let sun = self.mean_sun(date)?.as_degrees_fraction();
        let parts = SUNSET_BANDS
            .lookup(sun)
            .ok_or_else(|| SkyError::table_miss(SUNSET_BANDS.name(), sun))?;
        Ok(self.mean_moon(date)? + Angle::from_thirds(f64::from(*parts) * THIRDS_PER_PART))
    }

    /// Twice the distance of the moon at sunset from the mean sun.
    pub fn double_distance(&self, date: &HebrewDate) -> SkyResult<Angle> {
        Ok((self.mean_moon_at_sunset(date)? - self.mean_sun(date)?) * 2.0)
    }

    pub fn true_path(&self, date: &HebrewDate) -> SkyResult<Angle> {
        let distance = self.double_distance(date)?.as_degrees_fraction();
        let degrees = DOUBLE_DISTANCE_BANDS
            .lookup(distance)
            .ok_or_else(|| SkyError::table_miss(DOUBLE_DISTANCE_BANDS.name(), distance))?;
        Ok(self.mean_path(date)? + f64::from(*degrees))
    }

    /// Signed correction in degrees that turns the moon at sunset into the
    /// true moon: negative while the true path is below 180°.
    pub fn path_correction(&self, date: &HebrewDate) -> SkyResult<f64> {
        let path = self.true_path(date)?;
        let correction = MOON_PATH
            .lookup(path)
            .ok_or_else(|| SkyError::table_miss(MOON_PATH.name(), path.as_degrees_fraction()))?;
        let magnitude = correction.value.as_degrees_fraction();
        Ok(if correction.reflected {
            magnitude
        } else {
            -magnitude
        })
    }

    pub fn true_moon(&self, date: &HebrewDate) -> SkyResult<Angle> {
        Ok(self.mean_moon_at_sunset(date)? + self.path_correction(date)?)
    }
}

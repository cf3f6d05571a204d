//! The sun: mean longitude, apogee and true longitude.
//!
//! ```
//! use luach_astro::Sky;
//! use luach_calendar::HebrewDate;
//! use luach_core::angle::dms;
//!
//! let sky = Sky::default();
//! let date = HebrewDate::new(4938, 11, 14).unwrap();
//! assert_eq!(sky.true_sun(&date).unwrap(), dms(104, 59, 25));
//! ```

use crate::errors::SkyResult;
use crate::sky::Sky;
use luach_calendar::HebrewDate;
use luach_core::Angle;

impl Sky {
    pub fn mean_sun(&self, date: &HebrewDate) -> SkyResult<Angle> {
        self.params().mean_sun.at(date)
    }

    pub fn sun_apogee(&self, date: &HebrewDate) -> SkyResult<Angle> {
        self.params().sun_apogee.at(date)
    }

    /// The sun's course, apogee minus mean longitude.
    pub fn sun_course(&self, date: &HebrewDate) -> SkyResult<Angle> {
        Ok(self.sun_apogee(date)? - self.mean_sun(date)?)
    }

    /// Mean longitude corrected by the equation of centre.
    pub fn true_sun(&self, date: &HebrewDate) -> SkyResult<Angle> {
        let mean = self.mean_sun(date)?;
        let course = self.sun_apogee(date)? - mean;
        let correction = self.params().equation_of_centre.correction(course)?;
        Ok(mean + correction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use luach_core::angle::dms;

    fn tammuz_14() -> HebrewDate {
        HebrewDate::new(4938, 11, 14).unwrap()
    }

    #[test]
    fn test_mean_sun_at_epoch() {
        let sky = Sky::default();
        let epoch = HebrewDate::new(4938, 8, 3).unwrap();
        assert_eq!(sky.mean_sun(&epoch).unwrap(), dms(7, 3, 32));
        assert_eq!(sky.sun_apogee(&epoch).unwrap(), dms(86, 45, 8));
    }

    #[test]
    fn test_hundred_days_after_epoch() {
        let sky = Sky::default();
        let date = tammuz_14();
        assert_eq!(sky.mean_sun(&date).unwrap(), dms(105, 37, 25));
        assert_eq!(sky.sun_apogee(&date).unwrap(), dms(86, 45, 23));
        assert_eq!(sky.true_sun(&date).unwrap(), dms(104, 59, 25));
    }

    #[test]
    fn test_course_above_half_circle_subtracts() {
        let sky = Sky::default();
        let date = tammuz_14();
        let course = sky.sun_course(&date).unwrap();
        assert!(course.as_degrees_fraction() > 180.0);
        assert!(sky.true_sun(&date).unwrap() < sky.mean_sun(&date).unwrap());
    }

    #[test]
    fn test_models_agree_roughly_in_5783() {
        let date = HebrewDate::new(5783, 1, 1).unwrap();
        let treatise = Sky::for_model(Model::Treatise).true_sun(&date).unwrap();
        let refined = Sky::for_model(Model::Refined).true_sun(&date).unwrap();
        // A thousand years of drift in the treatise's year length stays
        // under two degrees.
        assert!(treatise.circular_distance(&refined) / 216_000.0 < 2.0);
    }
}

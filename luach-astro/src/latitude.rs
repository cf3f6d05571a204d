//! The moon's node and ecliptic latitude.

use crate::errors::{SkyError, SkyResult};
use crate::sky::Sky;
use crate::tables::LATITUDE;
use luach_calendar::HebrewDate;
use luach_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A latitude magnitude and the side of the ecliptic it lies on.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Latitude {
    pub value: Angle,
    pub south: bool,
}

impl Latitude {
    pub fn north(value: Angle) -> Self {
        Self {
            value,
            south: false,
        }
    }

    pub fn south(value: Angle) -> Self {
        Self { value, south: true }
    }

    /// Degrees, negative to the south.
    pub fn signed_degrees(&self) -> f64 {
        let degrees = self.value.as_degrees_fraction();
        if self.south {
            -degrees
        } else {
            degrees
        }
    }

    /// Lowers the latitude by a parallax. A northern latitude smaller than the
    /// parallax crosses to the south.
    pub fn lowered_by(&self, parallax: Angle) -> Self {
        if self.south {
            Self::south(self.value + parallax)
        } else if self.value >= parallax {
            Self::north(self.value - parallax)
        } else {
            Self::south(parallax - self.value)
        }
    }
}

impl Sky {
    /// Longitude of the head of the moon's node.
    pub fn node_head(&self, date: &HebrewDate) -> SkyResult<Angle> {
        self.params().node.at(date)
    }

    /// Ecliptic latitude of the true moon, by its distance from the head.
    pub fn latitude(&self, date: &HebrewDate) -> SkyResult<Latitude> {
        let distance = self.true_moon(date)? - self.node_head(date)?;
        let correction = LATITUDE.lookup(distance).ok_or_else(|| {
            SkyError::table_miss(LATITUDE.name(), distance.as_degrees_fraction())
        })?;
        Ok(Latitude {
            value: correction.value,
            south: correction.reflected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_core::angle::{dm, dms};

    #[test]
    fn test_head_and_latitude() {
        let sky = Sky::default();
        let date = HebrewDate::new(4938, 9, 2).unwrap();
        let head = sky.node_head(&date).unwrap();
        assert!(head.circular_distance(&dms(177, 30, 24)) < 60.0);
        let latitude = sky.latitude(&date).unwrap();
        assert_eq!(latitude, Latitude::south(dm(3, 53)));
        assert!((latitude.signed_degrees() + 3.0 + 53.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_lowered_by_parallax() {
        let north = Latitude::north(dm(2, 0));
        assert_eq!(north.lowered_by(dm(0, 30)), Latitude::north(dm(1, 30)));
        assert_eq!(north.lowered_by(dm(2, 10)), Latitude::south(dm(0, 10)));
        let south = Latitude::south(dm(3, 53));
        assert_eq!(south.lowered_by(dm(0, 10)), Latitude::south(dms(4, 3, 0)));
    }

    #[test]
    fn test_latitude_never_exceeds_five_degrees() {
        let sky = Sky::default();
        let mut date = HebrewDate::new(5780, 1, 1).unwrap();
        for _ in 0..60 {
            let latitude = sky.latitude(&date).unwrap();
            assert!(latitude.value <= dm(5, 0), "{date}");
            date = date.add_days(7).unwrap();
        }
    }
}

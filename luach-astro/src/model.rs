//! Swappable parameter sets.
//!
//! Every constant the sky engine reads lives in one [`ModelParameters`] value:
//! the five linear motions, the sun's equation-of-centre formula and the
//! parallax tables. [`Model`] names the two historical sets.
//!
//! ```
//! use luach_astro::{Model, ModelParameters};
//!
//! let model: Model = "hazon-shamaim".parse().unwrap();
//! assert_eq!(model, Model::Refined);
//! let params = ModelParameters::for_model(model);
//! assert_eq!(params.mean_moon.origin.as_degrees_fraction(), 196.71);
//! ```

use crate::errors::{SkyError, SkyResult};
use crate::tables::{ParallaxTables, REFINED_PARALLAX, SUN_EQUATION, TREATISE_PARALLAX};
use core::fmt;
use core::str::FromStr;
use luach_calendar::{signed_days_between, HebrewDate};
use luach_core::angle::dms;
use luach_core::constants::{RAD_TO_DEG, THIRDS_PER_CIRCLE};
use luach_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Model {
    /// The treatise's own constants, epoch 3 Nisan 4938.
    #[default]
    Treatise,
    /// Later constants fitted to modern mean elements, epoch 1 Tishrei 5753.
    Refined,
}

impl FromStr for Model {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "treatise" | "rambam" => Ok(Model::Treatise),
            "refined" | "hazon-shamaim" | "hazon_shamaim" => Ok(Model::Refined),
            _ => Err(SkyError::unknown_model(s)),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Treatise => f.write_str("treatise"),
            Model::Refined => f.write_str("refined"),
        }
    }
}

/// `origin + daily_motion × days since epoch`, modulo the circle.
///
/// A retrograde motion reports `360° - (origin + daily_motion × days)`, the
/// way the node's head is counted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearMotion {
    pub epoch: HebrewDate,
    pub origin: Angle,
    pub daily_motion: Angle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub retrograde: bool,
}

impl LinearMotion {
    pub fn new(epoch: HebrewDate, origin: Angle, daily_motion: Angle) -> Self {
        Self {
            epoch,
            origin,
            daily_motion,
            retrograde: false,
        }
    }

    pub fn retrograde(mut self) -> Self {
        self.retrograde = true;
        self
    }

    /// Position after `days` days, which may be negative.
    pub fn after_days(&self, days: i64) -> Angle {
        let position = (self.origin + self.daily_motion * days as f64).remove_circles();
        if self.retrograde {
            -position
        } else {
            position
        }
    }

    /// Position on the evening that begins `date`.
    pub fn at(&self, date: &HebrewDate) -> SkyResult<Angle> {
        Ok(self.after_days(signed_days_between(&self.epoch, date)?))
    }
}

/// How the sun's true longitude is derived from its course.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EquationOfCentre {
    /// The treatise's table, every 10°.
    Table,
    /// An eccentric circle whose centre sits `ratio` radii from the earth.
    Eccentric { ratio: f64 },
}

impl EquationOfCentre {
    /// Signed correction in degrees for the course `apogee - mean sun`, to be
    /// added to the mean longitude.
    pub fn correction(&self, course: Angle) -> SkyResult<f64> {
        match *self {
            EquationOfCentre::Table => {
                let c = SUN_EQUATION.lookup(course).ok_or_else(|| {
                    SkyError::table_miss(SUN_EQUATION.name(), course.as_degrees_fraction())
                })?;
                let magnitude = c.value.as_degrees_fraction();
                Ok(if c.reflected { -magnitude } else { magnitude })
            }
            EquationOfCentre::Eccentric { ratio } => {
                let y = ratio * course.sin();
                let x = 1.0 + ratio * course.cos();
                let degrees = libm::atan2(y, x) * RAD_TO_DEG;
                if degrees.is_finite() {
                    Ok(degrees)
                } else {
                    Err(SkyError::not_finite("eccentric equation of centre"))
                }
            }
        }
    }
}

/// The complete set of constants for one model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelParameters {
    pub model: Model,
    pub mean_sun: LinearMotion,
    pub sun_apogee: LinearMotion,
    pub mean_moon: LinearMotion,
    pub mean_path: LinearMotion,
    /// Head of the moon's node, counted backwards.
    pub node: LinearMotion,
    pub equation_of_centre: EquationOfCentre,
    pub parallax: ParallaxTables,
}

fn thirds(value: f64) -> Angle {
    Angle::from_thirds(value)
}

/// Daily motions shared by both models, in thirds.
const SUN_DAILY_THIRDS: f64 = (27.0 * THIRDS_PER_CIRCLE + 29_478_000.0) / 10_000.0;
const APOGEE_DAILY_THIRDS: f64 = 90_000.0 / 10_000.0;
const MOON_DAILY_THIRDS: f64 = 2_846_100.0 + 180.0 / 100.0;
const PATH_DAILY_THIRDS: f64 = 2_822_040.0 - 420.0 / 100.0;
const NODE_DAILY_THIRDS: f64 = (36_618_000.0 + THIRDS_PER_CIRCLE) / 10_000.0;

impl ModelParameters {
    pub fn for_model(model: Model) -> Self {
        match model {
            Model::Treatise => Self::treatise(),
            Model::Refined => Self::refined(),
        }
    }

    /// The reckoning of the Laws of the Sanctification of the New Moon,
    /// from the evening that began 3 Nisan 4938.
    pub fn treatise() -> Self {
        let epoch = treatise_epoch();
        Self {
            model: Model::Treatise,
            mean_sun: LinearMotion::new(epoch, dms(7, 3, 32), thirds(SUN_DAILY_THIRDS)),
            sun_apogee: LinearMotion::new(epoch, dms(86, 45, 8), thirds(APOGEE_DAILY_THIRDS)),
            mean_moon: LinearMotion::new(epoch, dms(31, 14, 43), thirds(MOON_DAILY_THIRDS)),
            mean_path: LinearMotion::new(epoch, dms(84, 28, 42), thirds(PATH_DAILY_THIRDS)),
            node: LinearMotion::new(epoch, dms(180, 57, 28), thirds(NODE_DAILY_THIRDS))
                .retrograde(),
            equation_of_centre: EquationOfCentre::Table,
            parallax: TREATISE_PARALLAX,
        }
    }

    /// Refined constants from the evening that began 1 Tishrei 5753.
    pub fn refined() -> Self {
        let epoch = refined_epoch();
        let deg = Angle::from_degrees;
        Self {
            model: Model::Refined,
            mean_sun: LinearMotion::new(epoch, deg(186.69), thirds(SUN_DAILY_THIRDS)),
            sun_apogee: LinearMotion::new(epoch, deg(102.81), thirds(APOGEE_DAILY_THIRDS)),
            mean_moon: LinearMotion::new(epoch, deg(196.71), thirds(MOON_DAILY_THIRDS)),
            mean_path: LinearMotion::new(epoch, deg(228.71), thirds(PATH_DAILY_THIRDS)),
            node: LinearMotion::new(epoch, deg(93.879638), thirds(NODE_DAILY_THIRDS)).retrograde(),
            equation_of_centre: EquationOfCentre::Eccentric { ratio: 0.0334 },
            parallax: REFINED_PARALLAX,
        }
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::treatise()
    }
}

fn treatise_epoch() -> HebrewDate {
    HebrewDate::new(4938, 8, 3).expect("3 Nisan 4938 is a valid date")
}

fn refined_epoch() -> HebrewDate {
    HebrewDate::new(5753, 1, 1).expect("1 Tishrei 5753 is a valid date")
}

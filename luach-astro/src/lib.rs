//! Sun and moon positions and the visibility of the new crescent.
//!
//! A [`Sky`] binds one [`ModelParameters`] set and computes, for the evening
//! that begins a Hebrew date, the mean and true positions of the sun and moon,
//! the moon's latitude and the arc of vision.
//!
//! ```
//! use luach_astro::{Model, Sky};
//! use luach_calendar::HebrewDate;
//!
//! let sky = Sky::for_model(Model::Treatise);
//! let date = HebrewDate::new(4938, 9, 2).unwrap();
//! let arc = sky.arc_of_vision(&date).unwrap();
//! assert!(arc.first_latitude.south);
//! assert!((arc.arc - 11.17).abs() < 0.02);
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | [`Model`], [`ModelParameters`], linear motions, equation of centre |
//! | [`tables`] | Correction, band and parallax tables |
//! | [`sky`] | [`Sky`] |
//! | [`sun`] | Mean sun, apogee, true sun |
//! | [`moon`] | Mean moon at sunset, true path, true moon |
//! | [`latitude`] | Node head and [`Latitude`] |
//! | [`visibility`] | [`ArcOfVision`], [`Visibility`] |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |

pub mod errors;
pub mod latitude;
pub mod model;
pub mod moon;
pub mod sky;
pub mod sun;
pub mod tables;
pub mod visibility;

pub use errors::{SkyError, SkyResult};
pub use latitude::Latitude;
pub use model::{EquationOfCentre, LinearMotion, Model, ModelParameters};
pub use sky::Sky;
pub use tables::ParallaxTables;
pub use visibility::{ArcOfVision, Visibility};

pub use luach_calendar::HebrewDate;
pub use luach_core::{Angle, Zodiac};

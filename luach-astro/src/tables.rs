//! The treatise's correction tables.
//!
//! Interpolated tables use [`CorrectionTable`]; banded and breakpoint tables
//! use [`BandTable`] and [`Breakpoints`]. Per-sign tables are indexed by
//! [`Zodiac::index`](luach_core::Zodiac::index), Aries first.

use luach_core::angle::dm;
use luach_core::table::{
    ArgumentRounding, Band, BandTable, Breakpoints, CorrectionTable, Reduction,
};
use luach_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equation of centre of the sun, by the sun's course.
pub static SUN_EQUATION: CorrectionTable = CorrectionTable::new(
    "sun equation of centre",
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

/// Correction of the moon's location, by the true path.
pub static MOON_PATH: CorrectionTable = CorrectionTable::new(
    "moon path correction",
    10.0,
    &[
        dm(0, 0),
        dm(0, 50),
        dm(1, 38),
        dm(2, 24),
        dm(3, 6),
        dm(3, 44),
        dm(4, 16),
        dm(4, 41),
        dm(5, 0),
        dm(5, 5),
        dm(5, 8),
        dm(4, 59),
        dm(4, 40),
        dm(4, 11),
        dm(3, 33),
        dm(2, 48),
        dm(1, 56),
        dm(0, 59),
        dm(0, 0),
    ],
    Reduction::HalfCircle,
    ArgumentRounding::Nearest,
);

/// Ecliptic latitude of the moon, by its distance from the head.
pub static LATITUDE: CorrectionTable = CorrectionTable::new(
    "moon latitude",
    10.0,
    &[
        dm(0, 0),
        dm(0, 52),
        dm(1, 43),
        dm(2, 30),
        dm(3, 13),
        dm(3, 50),
        dm(4, 20),
        dm(4, 42),
        dm(4, 55),
        dm(5, 0),
    ],
    Reduction::Quadrant,
    ArgumentRounding::Floor,
);

/// Moon's mean location at sunset, signed parts by the sun's mean longitude.
pub static SUNSET_BANDS: BandTable<i8> = BandTable::new(
    "sunset bands",
    &[
        Band::new(0.0, 15.0, 0),
        Band::new(15.0, 60.0, 15),
        Band::new(60.0, 120.0, 30),
        Band::new(120.0, 165.0, 15),
        Band::new(165.0, 195.0, 0),
        Band::new(195.0, 240.0, -15),
        Band::new(240.0, 300.0, -30),
        Band::new(300.0, 345.0, -15),
        Band::new(345.0, 360.0, 0),
    ],
);

/// Degrees added to the mean path, by the double distance. Past 63.5° the
/// crescent is out of question and nothing is added.
pub static DOUBLE_DISTANCE_BANDS: BandTable<u8> = BandTable::new(
    "double distance",
    &[
        Band::new(0.0, 6.0, 0),
        Band::new(6.0, 11.5, 1),
        Band::new(11.5, 18.5, 2),
        Band::new(18.5, 24.5, 3),
        Band::new(24.5, 31.5, 4),
        Band::new(31.5, 38.5, 5),
        Band::new(38.5, 45.5, 6),
        Band::new(45.5, 51.5, 7),
        Band::new(51.5, 59.5, 8),
        Band::new(59.5, 63.5, 9),
        Band::new(63.5, 360.0, 0),
    ],
);

/// Fraction of the second latitude taken as the moon-circle correction, by
/// the first breakpoint above the moon's longitude.
pub static MOON_CIRCLE: Breakpoints<f64> = Breakpoints::new(
    "moon circle",
    &[
        (20.0, 2.0 / 5.0),
        (40.0, 1.0 / 3.0),
        (50.0, 1.0 / 4.0),
        (60.0, 1.0 / 5.0),
        (70.0, 1.0 / 6.0),
        (80.0, 1.0 / 12.0),
        (85.0, 1.0 / 24.0),
        (95.0, 0.0),
        (100.0, 1.0 / 24.0),
        (110.0, 1.0 / 12.0),
        (120.0, 1.0 / 6.0),
        (130.0, 1.0 / 5.0),
        (140.0, 1.0 / 4.0),
        (160.0, 1.0 / 3.0),
        (180.0, 2.0 / 5.0),
        (200.0, 2.0 / 5.0),
        (220.0, 1.0 / 3.0),
        (230.0, 1.0 / 4.0),
        (240.0, 1.0 / 5.0),
        (250.0, 1.0 / 6.0),
        (260.0, 1.0 / 12.0),
        (265.0, 1.0 / 24.0),
        (275.0, 0.0),
        (280.0, 1.0 / 24.0),
        (290.0, 1.0 / 12.0),
        (300.0, 1.0 / 6.0),
        (310.0, 1.0 / 5.0),
        (320.0, 1.0 / 4.0),
        (340.0, 1.0 / 3.0),
        (360.0, 2.0 / 5.0),
    ],
);

/// Factor turning the third longitude into the fourth, by the moon's sign.
pub const SIGN_FACTORS: [f64; 12] = [
    7.0 / 6.0,
    6.0 / 5.0,
    7.0 / 6.0,
    1.0,
    4.0 / 5.0,
    2.0 / 3.0,
    2.0 / 3.0,
    4.0 / 5.0,
    1.0,
    7.0 / 6.0,
    6.0 / 5.0,
    7.0 / 6.0,
];

/// Longitude and latitude parallax at the horizon of the land of Israel, by
/// the moon's sign.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParallaxTables {
    pub longitude: [Angle; 12],
    pub latitude: [Angle; 12],
}

pub const TREATISE_PARALLAX: ParallaxTables = ParallaxTables {
    longitude: [
        dm(0, 59),
        dm(1, 0),
        dm(0, 58),
        dm(0, 52),
        dm(0, 43),
        dm(0, 37),
        dm(0, 34),
        dm(0, 34),
        dm(0, 36),
        dm(0, 44),
        dm(0, 53),
        dm(0, 58),
    ],
    latitude: [
        dm(0, 9),
        dm(0, 10),
        dm(0, 16),
        dm(0, 27),
        dm(0, 38),
        dm(0, 44),
        dm(0, 46),
        dm(0, 45),
        dm(0, 44),
        dm(0, 36),
        dm(0, 24),
        dm(0, 12),
    ],
};

/// Parallax recomputed for a modern horizon, symmetric about Libra.
pub const REFINED_PARALLAX: ParallaxTables = ParallaxTables {
    longitude: [
        dm(0, 56),
        dm(0, 56),
        dm(0, 53),
        dm(0, 46),
        dm(0, 39),
        dm(0, 34),
        dm(0, 32),
        dm(0, 34),
        dm(0, 39),
        dm(0, 46),
        dm(0, 53),
        dm(0, 56),
    ],
    latitude: [
        dm(0, 8),
        dm(0, 12),
        dm(0, 21),
        dm(0, 33),
        dm(0, 42),
        dm(0, 47),
        dm(0, 48),
        dm(0, 47),
        dm(0, 42),
        dm(0, 33),
        dm(0, 21),
        dm(0, 12),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_tile_the_circle() {
        assert!(SUNSET_BANDS.covers(0.0, 360.0));
        assert!(DOUBLE_DISTANCE_BANDS.covers(0.0, 360.0));
        for tenth in 0..3600 {
            let degrees = tenth as f64 / 10.0;
            assert!(SUNSET_BANDS.lookup(degrees).is_some(), "{degrees}");
            assert!(DOUBLE_DISTANCE_BANDS.lookup(degrees).is_some(), "{degrees}");
        }
    }

    #[test]
    fn test_moon_circle_breakpoints() {
        assert!(MOON_CIRCLE.is_ascending());
        assert_eq!(MOON_CIRCLE.points().last().map(|p| p.0), Some(360.0));
        assert_eq!(MOON_CIRCLE.lookup(48.6), Some(&0.25));
        assert_eq!(MOON_CIRCLE.lookup(90.0), Some(&0.0));
        assert_eq!(MOON_CIRCLE.lookup(350.0), Some(&0.4));
    }

    #[test]
    fn test_sign_factors_symmetric() {
        for i in 0..6 {
            assert_eq!(SIGN_FACTORS[i], SIGN_FACTORS[11 - i], "sign {i}");
        }
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(SUN_EQUATION.lookup(dm(90, 0)).unwrap().value, dm(1, 59));
        assert_eq!(MOON_PATH.lookup(dm(100, 0)).unwrap().value, dm(5, 8));
        assert_eq!(LATITUDE.lookup(dm(90, 0)).unwrap().value, dm(5, 0));
    }

    #[test]
    fn test_sun_equation_reflects_past_half_circle() {
        let direct = SUN_EQUATION.lookup(dm(160, 0)).unwrap();
        let reflected = SUN_EQUATION.lookup(dm(200, 0)).unwrap();
        assert_eq!(direct.value, reflected.value);
        assert_eq!(direct.value, dm(0, 42));
        assert!(!direct.reflected);
        assert!(reflected.reflected);
    }
}

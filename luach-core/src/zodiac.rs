//! The twelve zodiacal signs (mazalot) of the ecliptic.
//!
//! Each sign spans 30° of longitude starting from Aries at 0°. The arc-of-vision
//! tables are keyed by the sign the moon stands in.
//!
//! ```
//! use luach_core::{Angle, Zodiac};
//!
//! let (sign, within) = Angle::from_dms(104, 59, 25).zodiac();
//! assert_eq!(sign, Zodiac::Cancer);
//! assert_eq!(within, Angle::from_dms(14, 59, 25));
//! assert_eq!(sign.hebrew_name(), "סרטן");
//! ```

use crate::angle::Angle;
use crate::constants::{DEGREES_PER_SIGN, THIRDS_PER_DEGREE};
use crate::errors::{LuachError, LuachResult};
use core::fmt;
use core::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const HEBREW_NAMES: [&str; 12] = [
    "טלה", "שור", "תאומים", "סרטן", "אריה", "בתולה", "מאזניים", "עקרב", "קשת", "גדי", "דלי",
    "דגים",
];

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    /// Zero-based position, Aries = 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sign containing a longitude.
    pub fn of(longitude: Angle) -> Zodiac {
        // Snap first so 29°59'59.99999" reads as the next sign, like the angle's
        // own components do.
        let whole_degrees = longitude.degrees() as f64;
        Self::ALL[(whole_degrees / DEGREES_PER_SIGN) as usize % 12]
    }

    /// Longitude at which the sign begins.
    pub fn start(self) -> Angle {
        Angle::from_thirds(self.index() as f64 * DEGREES_PER_SIGN * THIRDS_PER_DEGREE)
    }

    pub fn hebrew_name(self) -> &'static str {
        HEBREW_NAMES[self.index()]
    }

    /// Capricorn through Gemini: the half of the ecliptic where the moon's
    /// circle correction is subtracted from a northern latitude.
    pub fn is_capricorn_to_gemini(self) -> bool {
        matches!(
            self,
            Zodiac::Capricorn
                | Zodiac::Aquarius
                | Zodiac::Pisces
                | Zodiac::Aries
                | Zodiac::Taurus
                | Zodiac::Gemini
        )
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hebrew_name())
    }
}

/// Parses a Hebrew sign name; `מאזנים` is accepted as a spelling of Libra.
impl FromStr for Zodiac {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "מאזנים" {
            return Ok(Zodiac::Libra);
        }
        HEBREW_NAMES
            .iter()
            .position(|n| *n == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| {
                LuachError::parse_error("zodiac sign", &format!("unknown sign name '{s}'"))
            })
    }
}

impl Angle {
    /// The sign this longitude falls in and the offset within that sign.
    pub fn zodiac(&self) -> (Zodiac, Angle) {
        let sign = Zodiac::of(*self);
        (sign, *self - sign.start())
    }
}

/// Parses a sign name and returns the longitude at which it begins.
pub fn sign_start_by_name(name: &str) -> LuachResult<Angle> {
    Ok(name.parse::<Zodiac>()?.start())
}

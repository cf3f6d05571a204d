//! Sexagesimal formatting for [`Angle`].
//!
//! The default `Display` writes degrees, parts and seconds, and appends whole
//! thirds only when there are any:
//!
//! ```
//! use luach_core::Angle;
//!
//! assert_eq!(Angle::from_dms(104, 59, 25).to_string(), "104°59'25\"");
//! assert_eq!(Angle::new(0.0, 0.0, 3.0, 11.0).to_string(), "0°0'3\"11'''");
//! ```
//!
//! [`SexagesimalFmt`] truncates to a chosen place instead:
//!
//! ```
//! use luach_core::{Angle, AngleUnit};
//! use luach_core::angle::SexagesimalFmt;
//!
//! let arc = Angle::new(11.0, 10.0, 24.0, 0.0);
//! assert_eq!(SexagesimalFmt { lowest: AngleUnit::Part }.fmt(arc), "11°10'");
//! assert_eq!(SexagesimalFmt { lowest: AngleUnit::Degree }.fmt(arc), "11°");
//! ```
use super::core::{Angle, AngleUnit};
use core::fmt;

/// Formatter that writes every place down to `lowest` and drops the rest.
pub struct SexagesimalFmt {
    pub lowest: AngleUnit,
}

impl SexagesimalFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let mut out = format!("{}°", a.degrees());
        if self.lowest <= AngleUnit::Part {
            out.push_str(&format!("{}'", a.parts()));
        }
        if self.lowest <= AngleUnit::Second {
            out.push_str(&format!("{}\"", a.seconds()));
        }
        if self.lowest == AngleUnit::Third {
            out.push_str(&format!("{}'''", libm::floor(a.thirds()) as u8));
        }
        out
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.degrees(), self.parts(), self.seconds())?;
        let thirds = libm::round(self.thirds());
        if thirds >= 1.0 && thirds < 60.0 {
            write!(f, "{}'''", thirds as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_omits_zero_thirds() {
        assert_eq!(Angle::from_dms(7, 3, 32).to_string(), "7°3'32\"");
        assert_eq!(Angle::ZERO.to_string(), "0°0'0\"");
    }

    #[test]
    fn test_display_with_thirds() {
        let a = Angle::new(10.0, 21.0, 121.0, 48.0);
        assert_eq!(a.to_string(), "10°23'1\"48'''");
    }

    #[test]
    fn test_fmt_to_thirds() {
        let a = Angle::new(91.0, 7.0, 31.0, 30.0);
        let f = SexagesimalFmt {
            lowest: AngleUnit::Third,
        };
        assert_eq!(f.fmt(a), "91°7'31\"30'''");
    }
}

//! Fixed-radix quantities for the Hebrew calendrical-astronomical system.
//!
//! `luach-core` provides the value types the calendar and sky engines are built
//! from: sexagesimal angles, day/hour/part durations, the zodiac, static
//! correction tables and letter numerals. It has no notion of dates; see
//! `luach-calendar` for those.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] in degrees/parts/seconds/thirds, rounding, parsing, formatting |
//! | [`duration`] | [`Duration`] in days/hours/parts/moments |
//! | [`zodiac`] | The twelve signs, [`Zodiac`] |
//! | [`table`] | Interpolated, banded and breakpoint correction tables |
//! | [`numerals`] | Letter numerals ↔ integers |
//! | [`constants`] | Radix sizes and unit conversions |
//! | [`errors`] | [`LuachError`] and [`LuachResult`] |
//!
//! # Re-exports
//!
//! ```
//! use luach_core::{Angle, AngleUnit, Duration, DurationUnit, Zodiac};
//! use luach_core::{LuachError, LuachResult, MathErrorKind};
//! ```
//!
//! # Design Notes
//!
//! - **Exact durations**: [`Duration`] counts moments in an `i64`, so products
//!   like `months × synodic month` over six thousand years are exact.
//!
//! - **Fractional thirds**: [`Angle`] keeps a fractional thirds place so that
//!   daily motions divided by 10 000 lose nothing until a rounding step asks
//!   for it.

pub mod angle;
pub mod constants;
pub mod duration;
pub mod errors;
pub mod math;
pub mod numerals;
pub mod table;
pub mod zodiac;

pub use angle::{Angle, AngleUnit};
pub use duration::{Duration, DurationUnit};
pub use errors::{LuachError, LuachResult, MathErrorKind};
pub use zodiac::Zodiac;

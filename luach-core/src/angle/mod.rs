mod core;
mod format;
mod normalize;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::{Angle, AngleUnit};
pub use format::SexagesimalFmt;
pub use normalize::{fold_quadrant, reflect_half_circle, signed_degrees, wrap_circle_thirds};
pub use parse::parse_sexagesimal;

pub use self::core::{deg, dm, dms};

/// Sixty parts to a degree, sixty seconds to a part, sixty thirds to a second.
pub const SEXAGESIMAL_RADIX: i64 = 60;

pub const DEGREES_PER_CIRCLE: i64 = 360;

pub const THIRDS_PER_SECOND: f64 = 60.0;

pub const THIRDS_PER_PART: f64 = 3_600.0;

pub const THIRDS_PER_DEGREE: f64 = 216_000.0;

pub const THIRDS_PER_CIRCLE: f64 = 77_760_000.0;

/// Circular distance below which two angles compare equal, in thirds.
pub const ANGLE_EPSILON_THIRDS: f64 = 1e-4;

pub const HOURS_PER_DAY: i64 = 24;

/// Halakhic parts (chalakim) per hour.
pub const PARTS_PER_HOUR: i64 = 1_080;

/// Moments (rega'im) per part.
pub const MOMENTS_PER_PART: i64 = 76;

pub const PARTS_PER_DAY: i64 = HOURS_PER_DAY * PARTS_PER_HOUR;

pub const MOMENTS_PER_HOUR: i64 = PARTS_PER_HOUR * MOMENTS_PER_PART;

pub const MOMENTS_PER_DAY: i64 = PARTS_PER_DAY * MOMENTS_PER_PART;

pub const DAYS_PER_WEEK: i64 = 7;

pub const DEGREES_PER_SIGN: f64 = 30.0;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

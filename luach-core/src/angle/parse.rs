//! Angle parsing from sexagesimal strings.
//!
//! Accepted notations:
//!
//! ```text
//! Symbols:          104°59'25"  or  104°59'25"11'''  or  104°59'25''
//! Colon-separated:  104:59:25   or  104:59:25:11
//! Decimal degrees:  196.71
//! ```
//!
//! A leading `-` negates the whole angle before it is wrapped into one circle.
//! Each place may carry a fraction; places below degrees must be under 60.
//!
//! ```
//! use luach_core::Angle;
//!
//! let a: Angle = "86°45'8\"".parse().unwrap();
//! assert_eq!(a, Angle::from_dms(86, 45, 8));
//!
//! let b: Angle = "-0:1".parse().unwrap();
//! assert_eq!(b, Angle::from_dm(359, 59));
//! ```

use super::core::{Angle, AngleUnit};
use crate::errors::{LuachError, LuachResult};
use core::str::FromStr;

fn invalid(reason: &str) -> LuachError {
    LuachError::parse_error("angle", reason)
}

fn number(s: &str) -> LuachResult<f64> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("invalid number"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(invalid("places must be finite and non-negative"));
    }
    Ok(v)
}

/// Parses a sexagesimal or decimal-degree string into an [`Angle`].
pub fn parse_sexagesimal(s: &str) -> LuachResult<Angle> {
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid("empty string"));
    }
    let negative = s.starts_with('-');
    let body = s.trim_start_matches(['+', '-']);

    let places = if body.contains(':') {
        colon_places(body)?
    } else if body.contains(['°', '\'', '"']) {
        symbol_places(body)?
    } else {
        vec![(AngleUnit::Degree, number(body)?)]
    };

    let mut total = 0.0;
    for (unit, value) in places {
        if unit != AngleUnit::Degree && value >= 60.0 {
            return Err(invalid("parts, seconds and thirds must be below 60"));
        }
        total += value * unit.thirds();
    }
    Ok(Angle::from_thirds(if negative { -total } else { total }))
}

fn colon_places(body: &str) -> LuachResult<Vec<(AngleUnit, f64)>> {
    let fields: Vec<&str> = body.split(':').collect();
    if fields.len() > 4 {
        return Err(invalid("too many components (max 4)"));
    }
    let units = [
        AngleUnit::Degree,
        AngleUnit::Part,
        AngleUnit::Second,
        AngleUnit::Third,
    ];
    fields
        .iter()
        .zip(units)
        .map(|(f, u)| Ok((u, number(f)?)))
        .collect()
}

fn symbol_places(body: &str) -> LuachResult<Vec<(AngleUnit, f64)>> {
    let mut places = Vec::new();
    let mut digits = String::new();
    let mut chars = body.chars().peekable();
    let mut last: Option<AngleUnit> = None;

    while let Some(c) = chars.next() {
        let unit = match c {
            '°' => AngleUnit::Degree,
            '"' => AngleUnit::Second,
            '\'' => {
                let mut ticks = 1;
                while chars.peek() == Some(&'\'') {
                    chars.next();
                    ticks += 1;
                }
                match ticks {
                    1 => AngleUnit::Part,
                    2 => AngleUnit::Second,
                    3 => AngleUnit::Third,
                    _ => return Err(invalid("too many apostrophes")),
                }
            }
            c if c.is_ascii_digit() || c == '.' => {
                digits.push(c);
                continue;
            }
            c if c.is_whitespace() => continue,
            _ => return Err(invalid("unexpected character")),
        };
        if digits.is_empty() {
            return Err(invalid("marker without a number"));
        }
        if last.is_some_and(|l| unit >= l) {
            return Err(invalid("places out of order"));
        }
        places.push((unit, number(&digits)?));
        digits.clear();
        last = Some(unit);
    }

    if !digits.is_empty() {
        return Err(invalid("trailing number without a marker"));
    }
    Ok(places)
}

impl FromStr for Angle {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sexagesimal(s)
    }
}

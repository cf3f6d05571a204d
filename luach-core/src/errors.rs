//! Error types for sexagesimal and calendrical arithmetic.
//!
//! This module provides a unified error type [`LuachError`] that covers the failure
//! modes of the fixed-radix quantities: out-of-range dates, arithmetic faults,
//! malformed letter numerals, and calculation failures.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidDate`](LuachError::InvalidDate) | Year, month or day outside the legal range |
//! | [`MathError`](LuachError::MathError) | Division by zero, non-finite values, out-of-domain arguments |
//! | [`MalformedNumeral`](LuachError::MalformedNumeral) | Letter numeral with characters that carry no value |
//! | [`ParseError`](LuachError::ParseError) | Angle or sign name that does not parse |
//! | [`CalculationError`](LuachError::CalculationError) | Algorithm failures |
//!
//! None of the variants are recoverable: there is no I/O anywhere in the
//! workspace, so retrying an operation with the same inputs gives the same error.
//!
//! # Usage
//!
//! ```
//! use luach_core::{Duration, LuachError, MathErrorKind};
//!
//! let quarter = Duration::new(365, 6, 0).checked_div(4).unwrap();
//! assert_eq!(quarter, Duration::new(91, 7, 540));
//!
//! let err = Duration::new(1, 0, 0).checked_div(0).unwrap_err();
//! assert!(matches!(
//!     err,
//!     LuachError::MathError { kind: MathErrorKind::DivisionByZero, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of arithmetic errors.
///
/// Used with [`LuachError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Result exceeds representable range.
    Overflow,
    /// Attempted division by a zero scalar.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside the domain of a table or formula.
    OutOfRange,
}

/// Unified error type for the fixed-radix quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LuachError {
    /// Invalid calendar date (e.g., month 13 of a common year, day 30 of a 29-day month).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i64,
        month: i64,
        day: i64,
        message: String,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A letter numeral that could not be decoded.
    #[error("Malformed numeral '{input}': {message}")]
    MalformedNumeral { input: String, message: String },

    /// Text that does not name an angle or a sign.
    #[error("Cannot parse {target}: {message}")]
    ParseError { target: String, message: String },

    /// Algorithm or calculation failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, LuachError>`.
pub type LuachResult<T> = Result<T, LuachError>;

impl LuachError {
    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i64, month: i64, day: i64, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MalformedNumeral`](Self::MalformedNumeral) error.
    pub fn malformed_numeral(input: &str, reason: &str) -> Self {
        Self::MalformedNumeral {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`ParseError`](Self::ParseError) for text meant to be a `target`.
    pub fn parse_error(target: &str, reason: &str) -> Self {
        Self::ParseError {
            target: target.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_error() {
        let err = LuachError::invalid_date(5783, 13, 1, "common year has 12 months");
        assert_eq!(
            err.to_string(),
            "Invalid date 5783-13-01: common year has 12 months"
        );
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = LuachError::math_error(
            "duration division",
            MathErrorKind::DivisionByZero,
            "divisor is zero",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DivisionByZero"));
    }

    #[test]
    fn test_malformed_numeral() {
        let err = LuachError::malformed_numeral("abc", "not a letter numeral");
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_parse_error() {
        let err = LuachError::parse_error("zodiac sign", "unknown sign name 'x'");
        assert_eq!(err.to_string(), "Cannot parse zodiac sign: unknown sign name 'x'");
    }

    #[test]
    fn test_calculation_error() {
        let err = LuachError::calculation_error("year type", "impossible weekday gap 1");
        assert!(err.to_string().contains("Calculation error in year type"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<LuachError>();
        _assert_sync::<LuachError>();
    }
}

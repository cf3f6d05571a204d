use luach_core::LuachError;
use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i64,
        month: i64,
        day: i64,
        message: String,
    },

    #[error("Unknown month name '{name}' (leap year: {leap})")]
    UnknownMonthName { name: String, leap: bool },

    #[error("Unknown weekday name '{name}'")]
    UnknownWeekdayName { name: String },

    #[error("Out of range: {message}")]
    OutOfRange { message: String },

    #[error("Core calculation failed: {source}")]
    Core {
        #[from]
        source: LuachError,
    },
}

impl CalendarError {
    pub fn invalid_date(year: i64, month: i64, day: i64, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: message.into(),
        }
    }

    pub fn unknown_month_name(name: &str, leap: bool) -> Self {
        Self::UnknownMonthName {
            name: name.to_string(),
            leap,
        }
    }

    pub fn unknown_weekday_name(name: &str) -> Self {
        Self::UnknownWeekdayName {
            name: name.to_string(),
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_core::MathErrorKind;

    #[test]
    fn test_display() {
        let err = CalendarError::invalid_date(5783, 13, 1, "common year has 12 months");
        assert_eq!(
            err.to_string(),
            "Invalid date 5783-13-01: common year has 12 months"
        );
        let err = CalendarError::unknown_month_name("Brumaire", false);
        assert!(err.to_string().contains("'Brumaire'"));
    }

    #[test]
    fn test_from_core() {
        let core = LuachError::malformed_numeral("x", "not a letter");
        let err: CalendarError = core.into();
        assert!(matches!(err, CalendarError::Core { .. }));

        let core = LuachError::math_error("div", MathErrorKind::DivisionByZero, "zero");
        assert!(CalendarError::from(core).to_string().contains("DivisionByZero"));

    }
}

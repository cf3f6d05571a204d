//! Month and weekday names.
//!
//! Hebrew spellings are canonical; common transliterations are accepted when
//! parsing. In a leap year months 6 and 7 are Adar I and Adar II, and a bare
//! "Adar" means Adar II.
//!
//! ```
//! use luach_calendar::names::{month_name, month_ordinal, weekday_ordinal};
//!
//! assert_eq!(month_ordinal(false, "ניסן").unwrap(), 7);
//! assert_eq!(month_ordinal(true, "ניסן").unwrap(), 8);
//! assert_eq!(month_ordinal(true, "Adar I").unwrap(), 6);
//! assert_eq!(month_name(true, 7).unwrap(), "אדר ב");
//! assert_eq!(weekday_ordinal("שלישי").unwrap(), 3);
//! ```

use crate::errors::{CalendarError, CalendarResult};

const COMMON_MONTHS: [&str; 12] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול",
];

const LEAP_MONTHS: [&str; 13] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר א", "אדר ב", "ניסן", "אייר", "סיון", "תמוז", "אב",
    "אלול",
];

/// Alternative spellings, mapped to the position in a common year.
const COMMON_ALIASES: [(&str, i64); 18] = [
    ("מרחשון", 2),
    ("מרחשוון", 2),
    ("חשוון", 2),
    ("סיוון", 9),
    ("איר", 8),
    ("tishrei", 1),
    ("cheshvan", 2),
    ("heshvan", 2),
    ("kislev", 3),
    ("tevet", 4),
    ("shevat", 5),
    ("adar", 6),
    ("nisan", 7),
    ("iyar", 8),
    ("sivan", 9),
    ("tammuz", 10),
    ("av", 11),
    ("elul", 12),
];

const WEEKDAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

const WEEKDAYS_EN: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Strips punctuation so "אדר ב'", "אדר-ב" and "אדר ב" compare equal.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '׳' | '״'))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Month ordinal `1..=12` (or `1..=13` in a leap year) for a month name.
pub fn month_ordinal(leap: bool, name: &str) -> CalendarResult<u8> {
    let key = normalize(name);
    let names: &[&str] = if leap { &LEAP_MONTHS } else { &COMMON_MONTHS };
    if let Some(i) = names.iter().position(|n| *n == key) {
        return Ok(i as u8 + 1);
    }

    let leap_adar = match key.as_str() {
        "אדר א" | "adar i" | "adar 1" => Some(6),
        "אדר ב" | "adar ii" | "adar 2" => Some(7),
        _ => None,
    };
    if let Some(ordinal) = leap_adar {
        return if leap {
            Ok(ordinal)
        } else {
            Err(CalendarError::unknown_month_name(name, leap))
        };
    }

    let common = COMMON_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|&(_, m)| m)
        .or_else(|| {
            COMMON_MONTHS
                .iter()
                .position(|n| *n == key)
                .map(|i| i as i64 + 1)
        });
    match common {
        // Plain Adar is Adar II in a leap year; later months shift by one.
        Some(m) if leap && m >= 6 => Ok(m as u8 + 1),
        Some(m) => Ok(m as u8),
        None => Err(CalendarError::unknown_month_name(name, leap)),
    }
}

/// Hebrew name of month `ordinal`.
pub fn month_name(leap: bool, ordinal: i64) -> CalendarResult<&'static str> {
    let names: &[&'static str] = if leap { &LEAP_MONTHS } else { &COMMON_MONTHS };
    names
        .get((ordinal - 1) as usize)
        .copied()
        .filter(|_| ordinal >= 1)
        .ok_or_else(|| CalendarError::unknown_month_name(&ordinal.to_string(), leap))
}

/// Weekday ordinal, 1 = Sunday, from a Hebrew or English name or a letter
/// numeral א..ז. A leading "יום" is ignored.
pub fn weekday_ordinal(name: &str) -> CalendarResult<u8> {
    let key = normalize(name);
    let key = key.strip_prefix("יום ").unwrap_or(&key);
    if let Some(i) = WEEKDAYS.iter().position(|n| *n == key) {
        return Ok(i as u8 + 1);
    }
    if let Some(i) = WEEKDAYS_EN.iter().position(|n| *n == key) {
        return Ok(i as u8 + 1);
    }
    let mut letters = key.chars();
    if let (Some(c), None) = (letters.next(), letters.next()) {
        if let Some(v) = luach_core::numerals::letter_value(c).filter(|v| (1..=7).contains(v)) {
            return Ok(v as u8);
        }
    }
    Err(CalendarError::unknown_weekday_name(name))
}

/// Hebrew name of weekday `ordinal`, 1 = Sunday.
pub fn weekday_name(ordinal: u8) -> CalendarResult<&'static str> {
    WEEKDAYS
        .get((ordinal as usize).wrapping_sub(1))
        .copied()
        .ok_or_else(|| CalendarError::unknown_weekday_name(&ordinal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_year_months() {
        for (i, name) in COMMON_MONTHS.iter().enumerate() {
            assert_eq!(month_ordinal(false, name).unwrap(), i as u8 + 1);
        }
        assert_eq!(month_ordinal(false, "מרחשון").unwrap(), 2);
        assert_eq!(month_ordinal(false, "Tishrei").unwrap(), 1);
        assert!(month_ordinal(false, "אדר ב").is_err());
    }

    #[test]
    fn test_leap_year_months() {
        assert_eq!(month_ordinal(true, "אדר א'").unwrap(), 6);
        assert_eq!(month_ordinal(true, "אדר-ב").unwrap(), 7);
        assert_eq!(month_ordinal(true, "אדר").unwrap(), 7);
        assert_eq!(month_ordinal(true, "Elul").unwrap(), 13);
        assert_eq!(month_ordinal(true, "תשרי").unwrap(), 1);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(false, 6).unwrap(), "אדר");
        assert_eq!(month_name(true, 13).unwrap(), "אלול");
        assert!(month_name(false, 13).is_err());
        assert!(month_name(false, 0).is_err());
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(weekday_ordinal("ראשון").unwrap(), 1);
        assert_eq!(weekday_ordinal("יום שבת").unwrap(), 7);
        assert_eq!(weekday_ordinal("ה").unwrap(), 5);
        assert_eq!(weekday_ordinal("Friday").unwrap(), 6);
        assert!(weekday_ordinal("ח").is_err());
        assert!(matches!(
            weekday_ordinal("someday"),
            Err(CalendarError::UnknownWeekdayName { .. })
        ));
        assert_eq!(weekday_name(2).unwrap(), "שני");
        assert!(weekday_name(0).is_err());
    }
}

//! Postponement rules (dehiyot) for the first day of the year.
//!
//! The year head starts on the day of the Tishrei molad and may be pushed
//! forward:
//!
//! | Rule | Condition on the molad | Applies |
//! |------|------------------------|---------|
//! | 2, old molad | hour ≥ 18 | always |
//! | 3, Tuesday | Tuesday, at or after 9h 204p, common year | if rule 2 did not fire |
//! | 4, Monday after a leap year | Monday, at or after 15h 589p, previous year leap | if rules 2 and 3 did not fire |
//! | 1, not Sunday/Wednesday/Friday | the resulting day is 1, 4 or 6 | re-checked last, always |
//!
//! The activation vector is indexed `[rule 1, rule 2, rule 3, rule 4]`.
//!
//! ```
//! use luach_calendar::postponement::year_head;
//!
//! let head = year_head(5782).unwrap();
//! assert_eq!(head.weekday, 3);
//! assert_eq!(head.activated, [false; 4]);
//!
//! // Rule 3 fires, then rule 1 moves Wednesday to Thursday.
//! let head = year_head(5789).unwrap();
//! assert_eq!(head.weekday, 5);
//! assert_eq!(head.activated, [true, false, true, false]);
//! ```

use crate::errors::CalendarResult;
use crate::leap::{check_year, is_leap};
use crate::molad::{molad_absolute, FIRST_MOLAD, SYNODIC_MONTH};
use crate::months::months_in_years;
use luach_core::constants::DAYS_PER_WEEK;
use luach_core::Duration;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weekdays the year may not begin on: Sunday, Wednesday, Friday.
pub const FORBIDDEN_HEAD_WEEKDAYS: [u8; 3] = [1, 4, 6];

/// One of the four postponement rules, numbered as in the treatise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PostponementRule {
    NotSundayWednesdayFriday,
    OldMolad,
    TuesdayOfCommonYear,
    MondayAfterLeapYear,
}

impl PostponementRule {
    pub const ALL: [PostponementRule; 4] = [
        PostponementRule::NotSundayWednesdayFriday,
        PostponementRule::OldMolad,
        PostponementRule::TuesdayOfCommonYear,
        PostponementRule::MondayAfterLeapYear,
    ];

    /// Position in the activation vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rule number, 1..=4.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Outcome of resolving the postponement rules for one Tishrei molad.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Postponement {
    /// Weekday of the year head, 1 = Sunday.
    pub weekday: u8,
    /// Which rules fired, indexed `[1, 2, 3, 4]`.
    pub activated: [bool; 4],
    /// Days between the molad's day and the year head, 0..=2.
    pub delay: i64,
}

impl Postponement {
    /// Applies the rules to a Tishrei molad.
    ///
    /// `leap` is whether the molad's year is a leap year, `previous_leap`
    /// whether the year before it was.
    pub fn resolve(molad: Duration, leap: bool, previous_leap: bool) -> Self {
        let weekday = molad.weekday();
        let (hours, parts) = (molad.hours(), molad.parts());
        let at_or_after = |h: i64, p: i64| hours > h || (hours == h && parts >= p);

        let mut activated = [false; 4];
        let mut delay = 0;

        if hours >= 18 {
            activated[PostponementRule::OldMolad.index()] = true;
        } else if !leap && weekday == 3 && at_or_after(9, 204) {
            activated[PostponementRule::TuesdayOfCommonYear.index()] = true;
        } else if previous_leap && weekday == 2 && at_or_after(15, 589) {
            activated[PostponementRule::MondayAfterLeapYear.index()] = true;
        }
        if activated.iter().any(|&a| a) {
            delay += 1;
        }

        let candidate = shift_weekday(weekday, delay);
        if FORBIDDEN_HEAD_WEEKDAYS.contains(&candidate) {
            activated[PostponementRule::NotSundayWednesdayFriday.index()] = true;
            delay += 1;
        }

        Self {
            weekday: shift_weekday(weekday, delay),
            activated,
            delay,
        }
    }

    pub fn fired(&self, rule: PostponementRule) -> bool {
        self.activated[rule.index()]
    }

    /// The rule the postponement started from: the first of rules 2 to 4 that
    /// fired, otherwise rule 1 if it fired alone.
    pub fn origin(&self) -> Option<PostponementRule> {
        PostponementRule::ALL[1..]
            .iter()
            .copied()
            .find(|r| self.fired(*r))
            .or_else(|| {
                self.fired(PostponementRule::NotSundayWednesdayFriday)
                    .then_some(PostponementRule::NotSundayWednesdayFriday)
            })
    }

    pub fn is_postponed(&self) -> bool {
        self.delay > 0
    }
}

fn shift_weekday(weekday: u8, days: i64) -> u8 {
    ((weekday as i64 - 1 + days).rem_euclid(DAYS_PER_WEEK) + 1) as u8
}

/// Resolves the postponement rules for the head of `year`.
pub fn year_head(year: i64) -> CalendarResult<Postponement> {
    let molad = molad_absolute(year, 1)?;
    let head = Postponement::resolve(molad, is_leap(year), is_leap(year - 1));
    if head.is_postponed() {
        debug!(
            year,
            molad = %molad.trim_weeks(),
            activated = ?head.activated,
            weekday = head.weekday,
            "year head postponed"
        );
    }
    Ok(head)
}

/// Weekday of the first day of `year`.
pub fn year_head_weekday(year: i64) -> CalendarResult<u8> {
    Ok(year_head(year)?.weekday)
}

/// Head of the year following `year`, which closes `year`. Resolved without
/// bounding `year + 1`, so the last accepted year still has a length.
pub(crate) fn following_year_head(year: i64) -> CalendarResult<Postponement> {
    check_year(year)?;
    let molad = FIRST_MOLAD + SYNODIC_MONTH.checked_mul(months_in_years(1, year + 1))?;
    Ok(Postponement::resolve(molad, is_leap(year + 1), is_leap(year)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_following_year_head_matches_year_head() {
        for year in [1, 5782, 5783, 5789] {
            assert_eq!(following_year_head(year).unwrap(), year_head(year + 1).unwrap());
        }
    }

    #[test]
    fn test_following_year_head_past_the_last_year() {
        assert!(following_year_head(crate::leap::MAX_YEAR).is_ok());
        assert!(year_head(crate::leap::MAX_YEAR + 1).is_err());
    }

    #[test]
    fn test_rule_1_alone() {
        let p = Postponement::resolve(Duration::new(1, 4, 5), true, true);
        assert_eq!(p.weekday, 2);
        assert_eq!(p.activated, [true, false, false, false]);
        assert_eq!(p.origin(), Some(PostponementRule::NotSundayWednesdayFriday));
    }

    #[test]
    fn test_rule_2_old_molad() {
        let p = Postponement::resolve(Duration::new(1, 18, 5), false, false);
        assert_eq!(p.weekday, 2);
        assert_eq!(p.activated, [false, true, false, false]);
        let p = Postponement::resolve(Duration::new(3, 17, 5), false, false);
        assert_eq!(p.weekday, 3);
        assert!(!p.is_postponed());
    }

    #[test]
    fn test_rule_2_then_rule_1() {
        // Tuesday evening molad: head moves to Wednesday, then Thursday.
        let p = Postponement::resolve(Duration::new(3, 18, 0), false, false);
        assert_eq!(p.weekday, 5);
        assert_eq!(p.delay, 2);
        assert_eq!(p.origin(), Some(PostponementRule::OldMolad));
    }

    #[test]
    fn test_rule_3_only_in_common_years() {
        let p = Postponement::resolve(Duration::new(3, 10, 5), false, false);
        assert_eq!(p.activated, [true, false, true, false]);
        assert_eq!(p.weekday, 5);
        assert_eq!(p.origin(), Some(PostponementRule::TuesdayOfCommonYear));

        let p = Postponement::resolve(Duration::new(3, 10, 5), true, false);
        assert_eq!(p.activated, [false; 4]);
        assert_eq!(p.weekday, 3);
    }

    #[test]
    fn test_rule_3_boundary() {
        let before = Postponement::resolve(Duration::new(3, 9, 203), false, false);
        assert!(!before.fired(PostponementRule::TuesdayOfCommonYear));
        let at = Postponement::resolve(Duration::new(3, 9, 204), false, false);
        assert!(at.fired(PostponementRule::TuesdayOfCommonYear));
    }

    #[test]
    fn test_rule_4() {
        let p = Postponement::resolve(Duration::new(2, 15, 589), false, true);
        assert_eq!(p.activated, [false, false, false, true]);
        assert_eq!(p.weekday, 3);
        let p = Postponement::resolve(Duration::new(2, 15, 588), false, true);
        assert!(!p.is_postponed());
    }

    #[test]
    fn test_saturday_molad() {
        // Day 0 of the week-relative clock is Saturday, a legal head.
        let p = Postponement::resolve(Duration::new(7, 3, 0), false, false);
        assert_eq!(p.weekday, 7);
        assert!(!p.is_postponed());
    }

    #[test]
    fn test_known_years() {
        let cases = [
            (5782, 3, [false, false, false, false]),
            (5766, 3, [false, false, false, true]),
            (5789, 5, [true, false, true, false]),
            (5786, 3, [false, true, false, false]),
            (5788, 7, [true, false, false, false]),
        ];
        for (year, weekday, activated) in cases {
            let head = year_head(year).unwrap();
            assert_eq!(head.weekday, weekday, "year {year}");
            assert_eq!(head.activated, activated, "year {year}");
        }
    }
}

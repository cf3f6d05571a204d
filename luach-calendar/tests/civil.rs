use luach_calendar::civil::{GREGORIAN_CUTOVER_JDN, JDN_OFFSET};
use luach_calendar::{CivilCalendar, CivilDate, DayNumber, HebrewDate};

fn hebrew(y: i64, m: i64, d: i64) -> HebrewDate {
    HebrewDate::new(y, m, d).unwrap()
}

#[test]
fn test_gregorian_correspondences() {
    let cases = [
        ((5783, 1, 1), (2022, 9, 26)),
        ((5783, 6, 26), (2023, 3, 19)),
        ((5708, 9, 5), (1948, 5, 14)),
        ((3761, 4, 18), (1, 1, 1)),
    ];
    for ((y, m, d), (cy, cm, cd)) in cases {
        let date = hebrew(y, m, d);
        let civil = CivilDate::new(cy, cm, cd);
        assert_eq!(date.to_civil(CivilCalendar::Gregorian).unwrap(), civil);
        assert_eq!(
            HebrewDate::from_civil(CivilCalendar::Gregorian, &civil).unwrap(),
            date
        );
    }
}

#[test]
fn test_epoch_in_julian() {
    let epoch = hebrew(1, 1, 1);
    let civil = epoch.to_civil(CivilCalendar::Julian).unwrap();
    assert_eq!(civil, CivilDate::new(-3760, 10, 7));
    assert_eq!(civil.to_string(), "-3760-10-07");
    assert_eq!(
        CivilCalendar::Julian.to_jdn(&civil).unwrap(),
        DayNumber::new(2).to_jdn()
    );
}

#[test]
fn test_historical_switches_at_cutover() {
    let cutover = DayNumber::from_jdn(GREGORIAN_CUTOVER_JDN);
    let historical = CivilCalendar::Historical;
    assert_eq!(
        historical.from_day_number(cutover),
        CivilDate::new(1582, 10, 15)
    );
    assert_eq!(
        historical.from_day_number(cutover - 1),
        CivilDate::new(1582, 10, 4)
    );
    assert_eq!(
        CivilCalendar::Gregorian.from_day_number(cutover - 1),
        CivilDate::new(1582, 10, 14)
    );
    assert!(HebrewDate::from_civil(historical, &CivilDate::new(1582, 10, 10)).is_err());
}

#[test]
fn test_historical_agrees_with_julian_before_cutover() {
    let date = hebrew(4938, 8, 3);
    let julian = date.to_civil(CivilCalendar::Julian).unwrap();
    assert_eq!(date.to_civil(CivilCalendar::Historical).unwrap(), julian);
    assert_eq!(julian.year, 1178);
}

#[test]
fn test_round_trip_across_calendars() {
    for calendar in [
        CivilCalendar::Gregorian,
        CivilCalendar::Julian,
        CivilCalendar::Historical,
    ] {
        let mut n = DayNumber::new(2);
        while n.value() < 2_200_000 {
            let civil = calendar.from_day_number(n);
            assert_eq!(calendar.to_day_number(&civil).unwrap(), n, "{calendar} {civil}");
            n = n + 9_973;
        }
    }
}

#[test]
fn test_jdn_offset() {
    let n = hebrew(5783, 1, 1).day_number().unwrap();
    assert_eq!(n.to_jdn() - n.value(), JDN_OFFSET);
    assert_eq!(n.to_jdn(), 2_459_849);
}

#[test]
fn test_invalid_civil_dates() {
    let g = CivilCalendar::Gregorian;
    assert!(HebrewDate::from_civil(g, &CivilDate::new(2023, 2, 29)).is_err());
    assert!(HebrewDate::from_civil(g, &CivilDate::new(2023, 0, 1)).is_err());
    // Before the Hebrew epoch.
    assert!(HebrewDate::from_civil(CivilCalendar::Julian, &CivilDate::new(-3760, 10, 6)).is_err());
}

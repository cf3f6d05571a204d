use luach_core::angle::{dm, dms};
use luach_core::numerals::{number_to_word, word_to_number};
use luach_core::{Angle, AngleUnit, Duration, DurationUnit};

#[test]
fn angle_recovers_fractional_degrees() {
    let mut degrees = 0.0;
    while degrees < 360.0 {
        let back = Angle::from_degrees(degrees).as_fraction_of(AngleUnit::Degree);
        assert!((back - degrees).abs() * 216_000.0 < 1e-4, "{degrees}");
        degrees += 0.731;
    }
}

#[test]
fn negative_angles_wrap_to_the_same_representative() {
    assert_eq!(Angle::from_degrees(-10.0), Angle::from_degrees(350.0));
    assert_eq!(dm(5, 0) - dm(10, 30), dm(354, 30));
    assert_eq!(-dms(180, 57, 28), dms(179, 2, 32));
}

#[test]
fn rounding_carries_upward() {
    let a = Angle::new(29.0, 59.0, 59.0, 30.0);
    assert_eq!(a.round_seconds(), dm(30, 0));
    assert_eq!(a.round_to_parts(), dm(30, 0));
    // Parts round first, then degrees.
    assert_eq!(dms(10, 29, 30).round_to_degrees(), dm(11, 0));
    assert_eq!(dms(10, 29, 30).round_to_parts(), dm(10, 30));
}

#[test]
fn ordering_is_by_total_value() {
    let mut angles = vec![dm(200, 0), dms(0, 0, 1), dm(90, 59), dm(90, 58)];
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(angles, vec![dms(0, 0, 1), dm(90, 58), dm(90, 59), dm(200, 0)]);
}

#[test]
fn duration_components_are_euclidean() {
    let d = Duration::new(0, 0, -1);
    assert_eq!(d.days(), -1);
    assert_eq!(d.hours(), 23);
    assert_eq!(d.parts(), 1079);
    assert_eq!(Duration::new(0, 48, 1080).days(), 2);
    assert_eq!(Duration::new(0, 48, 1080).hours(), 1);
}

#[test]
fn nineteen_years_of_months() {
    let month = Duration::new(29, 12, 793);
    let cycle = month.checked_mul(235).unwrap();
    assert_eq!(cycle, Duration::new(6_939, 16, 595));
    assert_eq!(cycle.trim_weeks(), Duration::new(2, 16, 595));
    assert!((month.as_fraction_of(DurationUnit::Day) - 29.530_594).abs() < 1e-6);
}

#[test]
fn numerals_read_back_what_they_write() {
    for n in (1..1000).chain(5_000..=6_000).chain([1_000, 9_000]) {
        assert_eq!(word_to_number(&number_to_word(n)).unwrap(), n, "{n}");
    }
}

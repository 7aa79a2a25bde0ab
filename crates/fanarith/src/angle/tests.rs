use super::*;
use proptest::prelude::*;

use crate::interval::Boundary::{Closed, Open};

#[test]
fn modulo_360_samples() {
    assert_eq!(modulo_360(0.0), 0.0);
    assert_eq!(modulo_360(360.0), 360.0);
    assert_eq!(modulo_360(720.0), 360.0);
    assert_eq!(modulo_360(450.0), 90.0);
    assert_eq!(modulo_360(-30.0), 330.0);
    assert_eq!(modulo_360(-360.0), 0.0);
    assert_eq!(modulo_360(-450.0), 270.0);
}

#[test]
fn normalized_wraps_only_out_of_range_extremes() {
    let ai = AngleInterval::new(370.0, 380.0, Closed, Closed).normalized();
    assert_eq!(ai, AngleInterval::new(10.0, 20.0, Closed, Closed));
    // In-range extremes pass through, including the 0/360 endpoints.
    let ai = AngleInterval::new(0.0, 360.0, Closed, Closed);
    assert_eq!(ai.normalized(), ai);
    let ai = AngleInterval::new(360.0, 360.0, Closed, Closed);
    assert_eq!(ai.normalized(), ai);
}

#[test]
fn normalized_snaps_seam_endpoints() {
    // A start of exactly 360 snaps to 0 when the end is elsewhere.
    assert_eq!(
        AngleInterval::new(360.0, 90.0, Closed, Closed).normalized(),
        AngleInterval::new(0.0, 90.0, Closed, Closed)
    );
    // An end of exactly 0 snaps to 360 when the start is elsewhere.
    assert_eq!(
        AngleInterval::new(30.0, 0.0, Closed, Closed).normalized(),
        AngleInterval::new(30.0, 360.0, Closed, Closed)
    );
    assert_eq!(
        AngleInterval::new(-90.0, 0.0, Closed, Open).normalized(),
        AngleInterval::new(270.0, 360.0, Closed, Open)
    );
}

#[test]
fn normalized_keeps_wrapping_order() {
    // first > second encodes a wrap across 0°; extremes are not reordered.
    let ai = AngleInterval::new(-30.0, 30.0, Closed, Closed).normalized();
    assert_eq!(ai, AngleInterval::new(330.0, 30.0, Closed, Closed));
}

#[test]
fn shifted_rotates_and_wraps() {
    let ai = AngleInterval::new(30.0, 60.0, Closed, Open);
    assert_eq!(ai.shifted(-30.0), AngleInterval::new(0.0, 30.0, Closed, Open));
    let ai = AngleInterval::new(10.0, 40.0, Closed, Closed);
    assert_eq!(ai.shifted(-20.0), AngleInterval::new(350.0, 20.0, Closed, Closed));
}

#[test]
fn addition_wraps_the_sum() {
    let a = AngleInterval::new(350.0, 355.0, Closed, Closed);
    let b = AngleInterval::new(20.0, 20.0, Closed, Closed);
    assert_eq!(a + b, AngleInterval::new(10.0, 15.0, Closed, Closed));
}

#[test]
fn rotated_180_twice_roundtrips() {
    let ai = AngleInterval::new(0.0, 30.0, Closed, Closed);
    assert_eq!(ai.rotated_180(), AngleInterval::new(180.0, 210.0, Closed, Closed));
    assert_eq!(ai.rotated_180().rotated_180(), ai);
    let ai = AngleInterval::new(270.0, 300.0, Closed, Open);
    assert_eq!(ai.rotated_180(), AngleInterval::new(90.0, 120.0, Closed, Open));
}

#[test]
fn full_turn_detection() {
    assert!(FULL_TURN.is_full_turn());
    assert!(!AngleInterval::new(0.0, 360.0, Closed, Open).is_full_turn());
    assert!(!AngleInterval::new(0.0, 350.0, Closed, Closed).is_full_turn());
}

#[test]
fn four_quadrant_coverage_is_literal() {
    assert!(covers_four_quadrants(&QUADRANTS));
    // Extra entries are fine.
    let mut list = QUADRANTS.to_vec();
    list.push(AngleInterval::new(10.0, 20.0, Closed, Closed));
    assert!(covers_four_quadrants(&list));
    // A missing quadrant or a flag mismatch breaks coverage.
    assert!(!covers_four_quadrants(&QUADRANTS[..3]));
    let mut list = QUADRANTS.to_vec();
    list[3] = AngleInterval::half_open(270.0, 360.0);
    assert!(!covers_four_quadrants(&list));
}

#[test]
fn union_all_of_quadrants_is_the_full_circle() {
    assert_eq!(union_all(&QUADRANTS), FULL_TURN);
}

#[test]
fn union_all_stitches_adjacent_pieces() {
    let list = [
        AngleInterval::half_open(10.0, 90.0),
        AngleInterval::half_open(90.0, 180.0),
        AngleInterval::new(180.0, 250.0, Closed, Closed),
    ];
    assert_eq!(union_all(&list), AngleInterval::new(10.0, 250.0, Closed, Closed));
}

#[test]
fn union_all_stitches_across_the_seam() {
    let list = [
        AngleInterval::new(350.0, 360.0, Closed, Closed),
        AngleInterval::new(0.0, 20.0, Closed, Closed),
    ];
    assert_eq!(union_all(&list), AngleInterval::new(350.0, 20.0, Closed, Closed));
}

#[test]
fn union_all_trivial_lists() {
    assert!(union_all(&[]).is_empty());
    let one = AngleInterval::new(5.0, 10.0, Open, Closed);
    assert_eq!(union_all(&[one]), one);
}

#[test]
fn union_all_terminates_on_disjoint_pieces() {
    let a = AngleInterval::new(0.0, 10.0, Closed, Closed);
    let b = AngleInterval::new(50.0, 60.0, Closed, Closed);
    let res = union_all(&[a, b]);
    assert!(res == a || res == b);
}

proptest! {
    #[test]
    fn modulo_360_stays_in_range(x in -3600.0f64..3600.0) {
        let m = modulo_360(x);
        prop_assert!((0.0..=360.0).contains(&m));
    }

    #[test]
    fn modulo_360_is_periodic(x in -1000.0f64..1000.0) {
        let m = modulo_360(x);
        let turns = (m - x) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }

    #[test]
    fn normalized_is_idempotent(
        start in -720.0f64..720.0,
        span in 0.0f64..360.0,
    ) {
        let ai = AngleInterval::new(start, start + span, Closed, Closed).normalized();
        prop_assert_eq!(ai.normalized(), ai);
        prop_assert!((0.0..=360.0).contains(&ai.first()));
        prop_assert!((0.0..=360.0).contains(&ai.second()));
    }

    #[test]
    fn rotated_180_twice_is_identity(
        start in 0.0f64..360.0,
        span in 0.0f64..180.0,
    ) {
        let ai = AngleInterval::new(start, start + span, Closed, Closed).normalized();
        let back = ai.rotated_180().rotated_180();
        prop_assert!((back.first() - ai.first()).abs() < 1e-9);
        prop_assert!((back.second() - ai.second()).abs() < 1e-9);
    }
}

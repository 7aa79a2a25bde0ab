use super::*;
use proptest::prelude::*;

use super::Boundary::{Closed, Open};

#[test]
fn normalized_reorders_and_carries_flags() {
    let iv = Interval::new(2.0, 1.0, Closed, Open).normalized();
    assert_eq!(iv, Interval::new(1.0, 2.0, Open, Closed));
    // Already ordered: untouched.
    let iv = Interval::new(1.0, 2.0, Closed, Open);
    assert_eq!(iv.normalized(), iv);
}

#[test]
fn emptiness_is_structural() {
    assert!(Interval::new(3.0, 3.0, Open, Open).is_empty());
    assert!(Interval::new(3.0, 3.0, Closed, Open).is_empty());
    assert!(Interval::new(3.0, 3.0, Open, Closed).is_empty());
    // A single closed point is not empty.
    assert!(!Interval::point(3.0).is_empty());
    assert!(!Interval::closed(1.0, 2.0).is_empty());
    assert!(Interval::empty().is_empty());
}

#[test]
fn union_of_overlapping_intervals() {
    let a = Interval::closed(0.0, 5.0);
    let b = Interval::closed(3.0, 8.0);
    assert_eq!(a.union(b), Interval::closed(0.0, 8.0));
}

#[test]
fn union_of_disjoint_intervals_is_empty() {
    let a = Interval::closed(0.0, 1.0);
    let b = Interval::closed(2.0, 3.0);
    assert!(a.union(b).is_empty());
}

#[test]
fn union_flag_mismatch_on_shared_extreme_degrades_to_open() {
    let a = Interval::new(0.0, 2.0, Closed, Closed);
    let b = Interval::new(0.0, 3.0, Open, Closed);
    assert_eq!(a.union(b), Interval::new(0.0, 3.0, Open, Closed));
    let c = Interval::new(1.0, 3.0, Closed, Open);
    let d = Interval::new(0.0, 3.0, Closed, Closed);
    assert_eq!(c.union(d), Interval::new(0.0, 3.0, Closed, Open));
}

#[test]
fn intersection_basic_cases() {
    // Partial overlap.
    let a = Interval::closed(0.0, 5.0);
    let b = Interval::closed(3.0, 8.0);
    assert_eq!(a.intersection(b), Interval::closed(3.0, 5.0));
    // Nested.
    let inner = Interval::new(2.0, 3.0, Open, Closed);
    assert_eq!(a.intersection(inner), inner);
    assert_eq!(inner.intersection(a), inner);
    // Disjoint.
    assert!(a.intersection(Interval::closed(6.0, 7.0)).is_empty());
}

#[test]
fn intersection_touching_endpoints() {
    // Both sides include the touching point: a single point survives.
    let a = Interval::closed(0.0, 2.0);
    let b = Interval::closed(2.0, 4.0);
    assert_eq!(a.intersection(b), Interval::point(2.0));
    assert_eq!(b.intersection(a), Interval::point(2.0));
    // One side open: nothing survives.
    let a_open = Interval::new(0.0, 2.0, Closed, Open);
    assert!(a_open.intersection(b).is_empty());
    assert!(b.intersection(a_open).is_empty());
}

#[test]
fn intersection_identical_point_requires_all_closed() {
    assert_eq!(
        Interval::point(4.0).intersection(Interval::point(4.0)),
        Interval::point(4.0)
    );
    let half = Interval::new(4.0, 4.0, Closed, Open);
    assert!(half.intersection(half).is_empty());
}

#[test]
fn negation_reflects_and_swaps_flags() {
    let iv = Interval::new(1.0, 2.0, Closed, Open);
    assert_eq!(iv.negation(), Interval::new(-2.0, -1.0, Open, Closed));
    assert_eq!(iv.negation().negation(), iv);
}

#[test]
fn addition_and_product_are_componentwise() {
    let a = Interval::new(1.0, 2.0, Closed, Open);
    let b = Interval::new(3.0, 4.0, Closed, Closed);
    assert_eq!(a + b, Interval::new(4.0, 6.0, Closed, Open));
    assert_eq!(a * b, Interval::new(3.0, 8.0, Closed, Open));
    // Mismatched flags degrade to open.
    let c = Interval::new(3.0, 4.0, Open, Closed);
    assert_eq!((a + c).first_bound, Open);
}

#[test]
fn subtraction_cross_combines() {
    let a = Interval::closed(1.0, 2.0);
    let b = Interval::closed(3.0, 5.0);
    assert_eq!(a - b, Interval::closed(-4.0, -1.0));
    // Each side needs its specific pairing closed.
    let b_open = Interval::new(3.0, 5.0, Open, Closed);
    assert_eq!(a - b_open, Interval::new(-4.0, -1.0, Closed, Open));
}

#[test]
fn division_inverts_the_divisor_range() {
    let a = Interval::closed(4.0, 6.0);
    let b = Interval::closed(2.0, 4.0);
    assert_eq!(a.division(b).unwrap(), Interval::closed(1.0, 3.0));
}

#[test]
fn division_by_zero_touching_interval_errors() {
    let a = Interval::closed(1.0, 2.0);
    let err = a.division(Interval::closed(0.0, 5.0)).unwrap_err();
    assert!(matches!(err, crate::error::FanError::DivisorTouchesZero { .. }));
    assert!(a.division(Interval::closed(-5.0, 0.0)).is_err());
    assert!(a.division(Interval::closed(1.0, 5.0)).is_ok());
}

#[test]
fn scaled_by_negative_swaps_extremes_not_flags() {
    let iv = Interval::new(1.0, 2.0, Closed, Open);
    assert_eq!(iv.scaled(3.0), Interval::new(3.0, 6.0, Closed, Open));
    assert_eq!(iv.scaled(-1.0), Interval::new(-2.0, -1.0, Closed, Open));
}

#[test]
fn display_format() {
    assert_eq!(Interval::closed(1.0, 2.0).to_string(), "[1,2]");
    assert_eq!(Interval::new(0.5, 2.0, Open, Open).to_string(), "(0.5,2)");
    assert_eq!(Interval::new(1.0, 2.0, Closed, Open).to_string(), "[1,2)");
}

#[test]
fn from_chars_accepts_only_matching_delimiters() {
    assert_eq!(
        Interval::from_chars(1.0, 2.0, '[', ')'),
        Some(Interval::new(1.0, 2.0, Closed, Open))
    );
    assert_eq!(Interval::from_chars(1.0, 2.0, ']', ')'), None);
    assert_eq!(Interval::from_chars(1.0, 2.0, '[', '('), None);
}

fn any_interval() -> impl Strategy<Value = Interval> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(a, b, fc, sc)| {
            Interval::new(
                a,
                b,
                if fc { Closed } else { Open },
                if sc { Closed } else { Open },
            )
        })
}

proptest! {
    #[test]
    fn normalized_is_idempotent_and_ordered(iv in any_interval()) {
        let n = iv.normalized();
        prop_assert!(n.first <= n.second);
        prop_assert_eq!(n.normalized(), n);
    }

    #[test]
    fn union_and_intersection_commute(a in any_interval(), b in any_interval()) {
        let (a, b) = (a.normalized(), b.normalized());
        prop_assert_eq!(a.union(b), b.union(a));
        prop_assert_eq!(a.intersection(b), b.intersection(a));
    }

    #[test]
    fn self_intersection_is_identity(iv in any_interval()) {
        let n = iv.normalized();
        prop_assume!(n.first < n.second);
        prop_assert_eq!(n.intersection(n), n);
    }

    #[test]
    fn double_negation_roundtrips(iv in any_interval()) {
        prop_assert_eq!(iv.negation().negation(), iv);
    }
}

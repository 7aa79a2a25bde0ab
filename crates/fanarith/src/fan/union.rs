//! Merging the pairwise partial fans back into one result.
//!
//! Magnitudes and angles are unioned independently: magnitude intervals by a
//! plain merge-or-rotate sweep, angle intervals by re-partitioning each
//! partial into quadrant pieces and stitching overlapping pieces until either
//! everything coalesces or the four-quadrant short-circuit fires.
//!
//! Both sweeps keep the source discipline: each pass either merges two
//! entries (shrinking the worklist) or rotates it; a full rotation cycle
//! without a merge ends the loop instead of spinning on a disjoint
//! remainder.

use std::collections::VecDeque;

use crate::angle::{self, AngleInterval, FULL_TURN};
use crate::interval::Interval;

use super::ComplexFan;

pub(super) fn union_of_results(partials: &[ComplexFan]) -> ComplexFan {
    let magnitudes: Vec<Interval> = partials.iter().map(|cf| cf.magnitude).collect();
    ComplexFan::new(union_of_magnitudes(&magnitudes), union_of_angles(partials))
}

/// Union a list of magnitude intervals by absorbing every interval that
/// overlaps the accumulator, rotating when nothing overlaps.
fn union_of_magnitudes(mis: &[Interval]) -> Interval {
    let mut acc = match mis {
        [] => return Interval::empty(),
        [one] => return *one,
        [first, ..] => *first,
    };
    let mut rest: VecDeque<Interval> = mis[1..].iter().copied().collect();
    let mut stale = 0usize;
    loop {
        while let Some(i) = rest
            .iter()
            .position(|mi| !acc.intersection(*mi).is_empty())
        {
            let mi = rest.remove(i).expect("position is in range");
            acc = acc.union(mi);
            stale = 0;
        }
        if rest.is_empty() {
            break;
        }
        let next = rest.pop_front().expect("rest is non-empty");
        rest.push_back(acc);
        acc = next;
        stale += 1;
        if stale > rest.len() + 1 {
            break;
        }
    }
    acc
}

fn angles_of(fans: &[ComplexFan]) -> Vec<AngleInterval> {
    fans.iter().map(|cf| cf.angle).collect()
}

/// Union the angle intervals of a list of partial fans.
///
/// The working representation is a list of quadrant pieces of the current
/// accumulated region. Each remaining partial is partitioned the same way;
/// any piece pair with intersecting angle intervals is replaced by its union
/// until no pair intersects. When a whole partial merges in, the coverage
/// check may short-circuit to the full circle. When nothing merges, the
/// accumulated pieces are collapsed by the stitching union and parked at the
/// back of the worklist.
fn union_of_angles(fans: &[ComplexFan]) -> AngleInterval {
    let first = match fans {
        [] => return AngleInterval::default(),
        [one] => return one.angle,
        [first, ..] => *first,
    };
    let mut res: Vec<ComplexFan> = first.partition().unwrap_or_else(|| vec![first]);
    let mut rest: VecDeque<ComplexFan> = fans[1..].iter().copied().collect();
    let mut stale = 0usize;
    loop {
        let mut k = 0;
        while k < rest.len() {
            let mut pcf1 = res.clone();
            let mut pcf2 = match rest[k].partition() {
                Some(p) => p,
                None => {
                    k += 1;
                    continue;
                }
            };
            // Replace every intersecting piece pair by its union; the merged
            // piece goes to the back of `pcf2` so it can keep absorbing.
            let mut merged_any = false;
            'scan: loop {
                for i in 0..pcf1.len() {
                    for j in 0..pcf2.len() {
                        let ai1 = pcf1[i].angle.as_interval();
                        let ai2 = pcf2[j].angle.as_interval();
                        if !ai1.intersection(ai2).is_empty() {
                            let stitched = AngleInterval::from(ai1.union(ai2));
                            pcf1.remove(i);
                            pcf2.remove(j);
                            pcf2.push(ComplexFan::new(Interval::empty(), stitched));
                            merged_any = true;
                            continue 'scan;
                        }
                    }
                }
                break;
            }
            if merged_any {
                res = pcf1;
                res.extend(pcf2);
                rest.remove(k);
                stale = 0;
                if angle::covers_four_quadrants(&angles_of(&res)) {
                    return FULL_TURN;
                }
                k = 0;
            } else {
                k += 1;
            }
        }
        if rest.is_empty() {
            break;
        }
        // Rotate: collapse the accumulated pieces into one stitched interval,
        // park it, and restart from the next partial.
        let next = rest.pop_front().expect("rest is non-empty");
        let collapsed = angle::union_all(&angles_of(&res));
        rest.push_back(ComplexFan::new(Interval::empty(), collapsed));
        res = next.partition().unwrap_or_else(|| vec![next]);
        stale += 1;
        if stale > rest.len() + 1 {
            break;
        }
    }
    angle::union_all(&angles_of(&res))
}

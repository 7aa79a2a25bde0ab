//! Angle intervals: bearings wrapped modulo 360°.
//!
//! Purpose
//! - Reuse the plain interval algebra but override the normalization policy:
//!   extremes are wrapped into `[0,360]`, with boundary snaps so a wrapped
//!   start of exactly 360 becomes 0 and a wrapped end of exactly 0 becomes
//!   360.
//! - Provide the angle-only machinery the fan addition relies on: 180°
//!   rotation, full-turn detection, literal four-quadrant coverage, and the
//!   merge-or-rotate stitching union over a list of pieces.
//!
//! A wrapping interval is represented with `first > second` (e.g. `[350,20]`
//! crosses 0°); `normalized` deliberately does *not* reorder extremes.

use std::collections::VecDeque;
use std::fmt;

use crate::interval::{Boundary, Interval, Normalize};

/// The four canonical quadrant pieces used by partitioning and by the
/// literal coverage check. Note the last one is closed at 360.
pub const QUADRANTS: [AngleInterval; 4] = [
    AngleInterval::half_open(0.0, 90.0),
    AngleInterval::half_open(90.0, 180.0),
    AngleInterval::half_open(180.0, 270.0),
    AngleInterval::new(270.0, 360.0, Boundary::Closed, Boundary::Closed),
];

/// The full circle `[0,360]`.
pub const FULL_TURN: AngleInterval = AngleInterval::new(0.0, 360.0, Boundary::Closed, Boundary::Closed);

/// Wrap a bearing into `[0,360]`.
///
/// Values already in `[0,360]` pass through unchanged, including exactly 0
/// and exactly 360; the two are distinct endpoints for interval purposes.
pub fn modulo_360(opd: f64) -> f64 {
    if opd > 360.0 {
        let mut res = opd - 360.0;
        while res > 360.0 {
            res -= 360.0;
        }
        res
    } else if opd < -360.0 {
        let mut res = opd + 360.0;
        while res < -360.0 {
            res += 360.0;
        }
        res + 360.0
    } else if opd < 0.0 {
        opd + 360.0
    } else {
        opd
    }
}

/// An interval of bearings; same structural shape as [`Interval`] with the
/// wrapping normalization policy layered on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleInterval {
    inner: Interval,
}

impl Default for AngleInterval {
    fn default() -> Self {
        AngleInterval::from(Interval::empty())
    }
}

impl From<Interval> for AngleInterval {
    #[inline]
    fn from(inner: Interval) -> Self {
        AngleInterval { inner }
    }
}

impl AngleInterval {
    #[inline]
    pub const fn new(first: f64, second: f64, first_bound: Boundary, second_bound: Boundary) -> Self {
        AngleInterval {
            inner: Interval::new(first, second, first_bound, second_bound),
        }
    }

    /// Quadrant-style piece `[a,b)`.
    #[inline]
    pub const fn half_open(first: f64, second: f64) -> Self {
        AngleInterval::new(first, second, Boundary::Closed, Boundary::Open)
    }

    /// Build from the textual inclusion characters, like
    /// [`Interval::from_chars`].
    pub fn from_chars(first: f64, second: f64, fe: char, se: char) -> Option<Self> {
        Interval::from_chars(first, second, fe, se).map(AngleInterval::from)
    }

    /// The underlying plain interval (raw extremes, no wrapping applied).
    #[inline]
    pub fn as_interval(self) -> Interval {
        self.inner
    }

    #[inline]
    pub fn first(self) -> f64 {
        self.inner.first
    }

    #[inline]
    pub fn second(self) -> f64 {
        self.inner.second
    }

    #[inline]
    pub fn first_bound(self) -> Boundary {
        self.inner.first_bound
    }

    #[inline]
    pub fn second_bound(self) -> Boundary {
        self.inner.second_bound
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.inner.is_empty()
    }

    /// Plain interval sum, wrapped back into `[0,360]`.
    pub fn addition(self, other: AngleInterval) -> AngleInterval {
        AngleInterval::from(self.inner.addition(other.inner)).normalized()
    }

    /// Plain interval difference, wrapped back into `[0,360]`.
    pub fn subtraction(self, other: AngleInterval) -> AngleInterval {
        AngleInterval::from(self.inner.subtraction(other.inner)).normalized()
    }

    /// Shift both extremes by `delta` degrees and renormalize; boundary flags
    /// stay in place. This is the canonical-frame rotation helper.
    pub fn shifted(self, delta: f64) -> AngleInterval {
        AngleInterval::new(
            self.inner.first + delta,
            self.inner.second + delta,
            self.inner.first_bound,
            self.inner.second_bound,
        )
        .normalized()
    }

    /// Rotate by half a turn (fan negation on the angle side).
    pub fn rotated_180(self) -> AngleInterval {
        self.addition(AngleInterval::new(
            180.0,
            180.0,
            self.inner.first_bound,
            self.inner.second_bound,
        ))
    }

    /// Exactly the closed full circle `[0,360]`.
    #[inline]
    pub fn is_full_turn(self) -> bool {
        self.inner.first == 0.0
            && self.inner.second == 360.0
            && self.inner.first_bound.is_closed()
            && self.inner.second_bound.is_closed()
    }
}

impl Normalize for AngleInterval {
    /// Wrap both extremes into `[0,360]`, then snap the boundary cases: a
    /// wrapped first extreme of exactly 360 becomes 0 (unless the second is
    /// also 360), a wrapped second extreme of exactly 0 becomes 360 (unless
    /// the first is also 0).
    fn normalized(self) -> Self {
        let mut fe = self.inner.first;
        let mut se = self.inner.second;
        if !(0.0..=360.0).contains(&fe) {
            fe = modulo_360(fe);
        }
        if !(0.0..=360.0).contains(&se) {
            se = modulo_360(se);
        }
        if fe == 360.0 && se != 360.0 {
            fe = 0.0;
        }
        if se == 0.0 && fe != 0.0 {
            se = 360.0;
        }
        AngleInterval::new(fe, se, self.inner.first_bound, self.inner.second_bound)
    }
}

impl std::ops::Add for AngleInterval {
    type Output = AngleInterval;
    #[inline]
    fn add(self, rhs: AngleInterval) -> AngleInterval {
        self.addition(rhs)
    }
}
impl std::ops::Sub for AngleInterval {
    type Output = AngleInterval;
    #[inline]
    fn sub(self, rhs: AngleInterval) -> AngleInterval {
        self.subtraction(rhs)
    }
}

impl fmt::Display for AngleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Literal four-quadrant coverage: the list must contain each of the four
/// canonical quadrant pieces as an element. This is a membership check, not
/// a geometric union; the addition short-circuits depend on exactly these
/// literals appearing after partitioning.
pub fn covers_four_quadrants(list: &[AngleInterval]) -> bool {
    QUADRANTS.iter().all(|q| list.iter().any(|ai| ai == q))
}

// Stitch conditions for `union_all`: the accumulator's upper end meets a
// piece's lower end (or wraps 360→0), with compatible openness.
fn touches_forward(acc: AngleInterval, ai: AngleInterval) -> bool {
    (acc.second() == ai.first()
        && acc.second_bound() == Boundary::Open
        && ai.first_bound() == Boundary::Closed)
        || (acc.second() == 360.0
            && ai.first() == 0.0
            && acc.second_bound() == Boundary::Closed
            && ai.first_bound() == Boundary::Closed)
}

fn touches_backward(acc: AngleInterval, ai: AngleInterval) -> bool {
    (acc.first() == ai.second()
        && ai.second_bound() == Boundary::Open
        && acc.first_bound() == Boundary::Closed)
        || (acc.first() == 0.0
            && ai.second() == 360.0
            && ai.second_bound() == Boundary::Closed
            && acc.first_bound() == Boundary::Closed)
}

/// Union of a list of angle intervals by iterative stitching.
///
/// Grows an accumulator by absorbing pieces whose endpoints touch it with
/// compatible boundary flags (including across the 0/360 seam); when nothing
/// touches, the accumulator is parked at the back of the worklist and the
/// next piece takes over. Short-circuits to `[0,360]` when the list holds
/// the four literal quadrants. A full rotation cycle without any merge ends
/// the loop, so disjoint remainders cannot spin forever.
pub fn union_all(list: &[AngleInterval]) -> AngleInterval {
    let mut acc = match list {
        [] => return AngleInterval::default(),
        [one] => return *one,
        [first, ..] => *first,
    };
    if covers_four_quadrants(list) {
        return FULL_TURN;
    }
    let mut rest: VecDeque<AngleInterval> = list[1..].iter().copied().collect();
    let mut stale = 0usize;
    while !rest.is_empty() {
        if let Some(i) = rest.iter().position(|ai| touches_forward(acc, *ai)) {
            let ai = rest.remove(i).expect("position is in range");
            acc = AngleInterval::new(acc.first(), ai.second(), acc.first_bound(), ai.second_bound());
            stale = 0;
        }
        if let Some(j) = rest.iter().position(|ai| touches_backward(acc, *ai)) {
            let ai = rest.remove(j).expect("position is in range");
            acc = AngleInterval::new(ai.first(), acc.second(), ai.first_bound(), acc.second_bound());
            stale = 0;
        }
        if rest.is_empty() {
            break;
        }
        // Rotate: park the accumulator, continue from the next piece.
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

#[cfg(test)]
mod tests;

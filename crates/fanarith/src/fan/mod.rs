//! Complex fans: annular sectors of the complex plane.
//!
//! Purpose
//! - Pair a magnitude (radius) interval with an angle interval and provide
//!   the geometric arithmetic over the resulting regions: negation, product,
//!   division, and the addition algorithm.
//!
//! Addition pipeline
//! - Rotate both fans so the first one's angle interval starts at 0°
//!   (canonical frame), quadrant-partition each fan, combine every pair of
//!   pieces through the case classifier and the per-case closed forms, undo
//!   the per-pair rotation, union all partial results, undo the outer
//!   rotation, normalize.
//!
//! Every operation is pure; the two fallible ones (`division`, `addition`)
//! surface [`FanError`] instead of aborting.

use std::fmt;

use crate::angle::AngleInterval;
use crate::error::FanError;
use crate::interval::{Interval, Normalize};

mod cases;
mod part;
mod union;

pub use part::{classify_pair, AdditionCase};

/// A region bounded by a radius range and a bearing range.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ComplexFan {
    magnitude: Interval,
    angle: AngleInterval,
}

impl ComplexFan {
    /// Build a fan; both members are normalized on construction.
    pub fn new(magnitude: Interval, angle: AngleInterval) -> Self {
        ComplexFan {
            magnitude: magnitude.normalized(),
            angle: angle.normalized(),
        }
    }

    /// Build from raw extremes and inclusion characters for both members.
    pub fn from_chars(mag: (f64, f64, char, char), ang: (f64, f64, char, char)) -> Option<Self> {
        Some(ComplexFan::new(
            Interval::from_chars(mag.0, mag.1, mag.2, mag.3)?,
            AngleInterval::from_chars(ang.0, ang.1, ang.2, ang.3)?,
        ))
    }

    #[inline]
    pub fn magnitude(&self) -> Interval {
        self.magnitude
    }

    #[inline]
    pub fn angle(&self) -> AngleInterval {
        self.angle
    }

    /// Empty iff both member intervals are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty() && self.angle.is_empty()
    }

    /// Rotate the fan's angle interval by `delta` degrees (renormalized).
    fn rotated(self, delta: f64) -> Self {
        if delta == 0.0 {
            self
        } else {
            ComplexFan {
                magnitude: self.magnitude,
                angle: self.angle.shifted(delta),
            }
        }
    }

    /// Undo a canonical-frame rotation, except on the full circle where the
    /// rotation no longer matters.
    fn rotated_unless_full(self, delta: f64) -> Self {
        if self.angle.is_full_turn() {
            self
        } else {
            self.rotated(delta)
        }
    }

    /// Point reflection through the origin: half-turn on the angle side,
    /// magnitude unchanged.
    pub fn negation(self) -> Self {
        ComplexFan::new(self.magnitude, self.angle.rotated_180())
    }

    /// Closed-form product: magnitudes multiply, angles add.
    pub fn product(self, other: Self) -> Self {
        ComplexFan::new(
            self.magnitude.product(other.magnitude),
            self.angle.addition(other.angle),
        )
    }

    /// Closed-form quotient: magnitudes divide, angles subtract.
    pub fn division(self, other: Self) -> Result<Self, FanError> {
        Ok(ComplexFan::new(
            self.magnitude.division(other.magnitude)?,
            self.angle.subtraction(other.angle),
        ))
    }

    /// Geometric sum of two fans.
    ///
    /// Fails with [`FanError::MalformedFan`] when either operand cannot be
    /// quadrant-partitioned (angle interval outside `[0,360]`).
    pub fn addition(self, other: Self) -> Result<Self, FanError> {
        // Canonical frame: the first fan's angle interval starts at 0.
        let rotation = self.angle.first();
        let acf1 = self.rotated(-rotation);
        let acf2 = other.rotated(-rotation);
        let parts1 = acf1
            .partition()
            .ok_or(FanError::MalformedFan { fan: self })?;
        let parts2 = acf2
            .partition()
            .ok_or(FanError::MalformedFan { fan: other })?;

        let mut partials = Vec::with_capacity(parts1.len() * parts2.len());
        for p1 in &parts1 {
            for p2 in &parts2 {
                // Re-canonicalize the pair to the first piece's start.
                let rot1 = p1.angle.first();
                let v1 = p1.rotated(-rot1);
                let v2 = p2.rotated(-rot1);
                let partial = match classify_pair(v2.angle.first(), v2.angle.second()) {
                    AdditionCase::FirstQuadrant => cases::addition_case1(v1, v2),
                    AdditionCase::SecondQuadrant => cases::addition_case2(v1, v2),
                    AdditionCase::ThirdQuadrant => cases::addition_case3(v1, v2),
                    AdditionCase::Mirror => {
                        // Swap operand roles, canonicalize to the second
                        // piece's start, run case 2, rotate the result back.
                        let rot2 = v2.angle.first();
                        let w1 = v1.rotated(-rot2);
                        let w2 = v2.rotated(-rot2);
                        cases::addition_case2(w2, w1).rotated_unless_full(rot2)
                    }
                };
                partials.push(partial.rotated_unless_full(rot1));
            }
        }
        let total = union::union_of_results(&partials);
        Ok(total.rotated_unless_full(rotation))
    }

    /// `a - b = a + (-b)`.
    pub fn subtraction(self, other: Self) -> Result<Self, FanError> {
        self.addition(other.negation())
    }
}

impl fmt::Display for ComplexFan {
    /// Renders as `<magnitude>∠ <angle>`, e.g. `[1,2]∠ [0,30]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2220} {}", self.magnitude, self.angle)
    }
}

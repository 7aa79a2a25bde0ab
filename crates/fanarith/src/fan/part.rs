//! Quadrant partitioning and the addition-case classifier.
//!
//! `partition` splits a fan at the quadrant boundaries 0/90/180/270/360 into
//! at most 5 sub-fans, each confined to one quadrant. True endpoints keep the
//! fan's own boundary flags; internal split points use the half-open `[_,_)`
//! convention, closed at 360. Wrapping intervals (`first > second`) unroll
//! across the seam.

use crate::angle::{AngleInterval, QUADRANTS};
use crate::interval::Boundary::{Closed, Open};

use super::ComplexFan;

/// Which closed-form sub-algorithm applies to a pair of quadrant-aligned
/// pieces, keyed by the second piece's angle bounds in the pair's canonical
/// frame (the first piece starts at 0°).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdditionCase {
    /// Second piece inside `[0,90]`.
    FirstQuadrant,
    /// Second piece inside `[90,180]`.
    SecondQuadrant,
    /// Second piece inside `[180,270]`.
    ThirdQuadrant,
    /// Fourth quadrant: swap operand roles, apply the second-quadrant
    /// algorithm, rotate the result back.
    Mirror,
}

/// Classify a pair by the second piece's canonical angle bounds.
pub fn classify_pair(alfa3: f64, alfa4: f64) -> AdditionCase {
    if alfa3 >= 0.0 && alfa4 <= 90.0 {
        AdditionCase::FirstQuadrant
    } else if alfa3 >= 90.0 && alfa4 <= 180.0 {
        AdditionCase::SecondQuadrant
    } else if alfa3 >= 180.0 && alfa4 <= 270.0 {
        AdditionCase::ThirdQuadrant
    } else {
        AdditionCase::Mirror
    }
}

impl ComplexFan {
    /// Split the fan into quadrant-aligned sub-fans.
    ///
    /// Returns `None` when no non-empty piece results, which only happens for
    /// an empty or out-of-range angle interval; callers treat that as a
    /// malformed fan.
    pub fn partition(&self) -> Option<Vec<ComplexFan>> {
        let al1 = self.angle.first();
        let al2 = self.angle.second();
        let p1 = self.angle.first_bound();
        let p2 = self.angle.second_bound();
        let piece = |ai: AngleInterval| ComplexFan::new(self.magnitude, ai);
        let [c1, c2, c3, c4] = QUADRANTS.map(piece);

        let mut pieces: Vec<ComplexFan> = Vec::with_capacity(5);

        if (0.0..=90.0).contains(&al1) && (0.0..=90.0).contains(&al2) {
            if al2 < al1 {
                // Wraps all the way around through the other three quadrants.
                pieces.push(piece(AngleInterval::new(al1, 90.0, p1, Open)));
                pieces.extend([c2, c3, c4]);
                pieces.push(piece(AngleInterval::new(0.0, al2, Closed, p2)));
            } else if al2 == al1 {
                if p1.is_closed() && p2.is_closed() {
                    pieces.push(piece(AngleInterval::new(al1, al1, Closed, Closed)));
                }
            } else if al2 == 90.0 && p2.is_closed() {
                pieces.push(piece(AngleInterval::new(al1, 90.0, p1, Open)));
                pieces.push(piece(AngleInterval::new(90.0, 90.0, Closed, Closed)));
            } else {
                pieces.push(piece(AngleInterval::new(al1, al2, p1, p2)));
            }
        } else if (90.0..=180.0).contains(&al1) && (90.0..=180.0).contains(&al2) {
            if al2 < al1 {
                if al1 == 180.0 {
                    pieces.push(piece(AngleInterval::new(180.0, 270.0, p1, Open)));
                    pieces.extend([c4, c1]);
                } else {
                    pieces.push(piece(AngleInterval::new(al1, 180.0, p1, Open)));
                    pieces.extend([c3, c4, c1]);
                }
                pieces.push(piece(AngleInterval::new(90.0, al2, Closed, p2)));
            } else if al2 == al1 {
                if p1.is_closed() && p2.is_closed() {
                    pieces.push(piece(AngleInterval::new(al1, al1, Closed, Closed)));
                }
            } else if al2 == 180.0 && p2.is_closed() {
                pieces.push(piece(AngleInterval::new(al1, 180.0, p1, Open)));
                pieces.push(piece(AngleInterval::new(180.0, 180.0, Closed, Closed)));
            } else {
                pieces.push(piece(AngleInterval::new(al1, al2, p1, p2)));
            }
        } else if (180.0..=270.0).contains(&al1) && (180.0..=270.0).contains(&al2) {
            if al2 < al1 {
                if al1 == 270.0 {
                    pieces.push(piece(AngleInterval::new(270.0, 360.0, p1, Closed)));
                    pieces.extend([c1, c2]);
                } else {
                    pieces.push(piece(AngleInterval::new(al1, 270.0, p1, Open)));
                    pieces.extend([c4, c1, c2]);
                }
                pieces.push(piece(AngleInterval::new(180.0, al2, Closed, p2)));
            } else if al2 == al1 {
                if p1.is_closed() && p2.is_closed() {
                    pieces.push(piece(AngleInterval::new(al1, al1, Closed, Closed)));
                }
            } else if al2 == 270.0 && p2.is_closed() {
                pieces.push(piece(AngleInterval::new(al1, 270.0, p1, Open)));
                pieces.push(piece(AngleInterval::new(270.0, 270.0, Closed, Closed)));
            } else {
                pieces.push(piece(AngleInterval::new(al1, al2, p1, p2)));
            }
        } else if (270.0..=360.0).contains(&al1) && (270.0..=360.0).contains(&al2) {
            if al2 < al1 {
                pieces.push(piece(AngleInterval::new(al1, 360.0, p1, Closed)));
                pieces.extend([c1, c2, c3]);
                pieces.push(piece(AngleInterval::new(270.0, al2, Closed, p2)));
            } else if al2 == al1 {
                if p1.is_closed() && p2.is_closed() {
                    pieces.push(piece(AngleInterval::new(al1, al1, Closed, Closed)));
                }
            } else {
                pieces.push(piece(AngleInterval::new(al1, al2, p1, p2)));
            }
        } else if (0.0..90.0).contains(&al1) {
            if al2 > 90.0 && al2 <= 180.0 {
                pieces.push(piece(AngleInterval::new(al1, 90.0, p1, Open)));
                if al2 == 180.0 && p2.is_closed() {
                    pieces.push(c2);
                    pieces.push(piece(AngleInterval::new(180.0, 180.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(90.0, al2, Closed, p2)));
                }
            } else if al2 > 180.0 && al2 <= 270.0 {
                pieces.push(piece(AngleInterval::new(al1, 90.0, p1, Open)));
                pieces.push(c2);
                if al2 == 270.0 && p2.is_closed() {
                    pieces.push(c3);
                    pieces.push(piece(AngleInterval::new(270.0, 270.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(180.0, al2, Closed, p2)));
                }
            } else if al2 > 270.0 && al2 <= 360.0 {
                pieces.push(piece(AngleInterval::new(al1, 90.0, p1, Open)));
                pieces.extend([c2, c3]);
                pieces.push(piece(AngleInterval::new(270.0, al2, Closed, p2)));
            }
        } else if (90.0..180.0).contains(&al1) {
            if al2 > 180.0 && al2 <= 270.0 {
                pieces.push(piece(AngleInterval::new(al1, 180.0, p1, Open)));
                if al2 == 270.0 && p2.is_closed() {
                    pieces.push(c3);
                    pieces.push(piece(AngleInterval::new(270.0, 270.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(180.0, al2, Closed, p2)));
                }
            } else if al2 > 270.0 && al2 <= 360.0 {
                pieces.push(piece(AngleInterval::new(al1, 180.0, p1, Open)));
                pieces.push(c3);
                pieces.push(piece(AngleInterval::new(270.0, al2, Closed, p2)));
            } else if al2 > 0.0 && al2 < 90.0 {
                pieces.push(piece(AngleInterval::new(al1, 180.0, p1, Open)));
                pieces.extend([c3, c4]);
                pieces.push(piece(AngleInterval::new(0.0, al2, Closed, p2)));
            }
        } else if (180.0..270.0).contains(&al1) {
            if al2 > 270.0 && al2 <= 360.0 {
                pieces.push(piece(AngleInterval::new(al1, 270.0, p1, Open)));
                pieces.push(piece(AngleInterval::new(270.0, al2, Closed, p2)));
            } else if al2 > 0.0 && al2 <= 90.0 {
                pieces.push(piece(AngleInterval::new(al1, 270.0, p1, Open)));
                pieces.push(c4);
                if al2 == 90.0 && p2.is_closed() {
                    pieces.push(c1);
                    pieces.push(piece(AngleInterval::new(90.0, 90.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(0.0, al2, Closed, p2)));
                }
            } else if al2 > 90.0 && al2 < 180.0 {
                pieces.push(piece(AngleInterval::new(al1, 270.0, p1, Open)));
                pieces.extend([c4, c1]);
                pieces.push(piece(AngleInterval::new(90.0, al2, Closed, p2)));
            }
        } else if (270.0..360.0).contains(&al1) {
            if al2 > 0.0 && al2 <= 90.0 {
                pieces.push(piece(AngleInterval::new(al1, 360.0, p1, Closed)));
                if al2 == 90.0 && p2.is_closed() {
                    pieces.push(c1);
                    pieces.push(piece(AngleInterval::new(90.0, 90.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(0.0, al2, Closed, p2)));
                }
            } else if al2 > 90.0 && al2 <= 180.0 {
                pieces.push(piece(AngleInterval::new(al1, 360.0, p1, Closed)));
                pieces.push(c1);
                if al2 == 180.0 && p2.is_closed() {
                    pieces.push(c2);
                    pieces.push(piece(AngleInterval::new(180.0, 180.0, Closed, Closed)));
                } else {
                    pieces.push(piece(AngleInterval::new(90.0, al2, Closed, p2)));
                }
            } else if al2 > 180.0 && al2 < 270.0 {
                pieces.push(piece(AngleInterval::new(al1, 360.0, p1, Closed)));
                pieces.extend([c1, c2]);
                pieces.push(piece(AngleInterval::new(180.0, al2, Closed, p2)));
            }
        }

        // Pieces with an empty angle over a non-empty magnitude are kept;
        // only fully-empty placeholders drop out.
        pieces.retain(|p| !p.is_empty());
        if pieces.is_empty() {
            None
        } else {
            Some(pieces)
        }
    }
}

//! Bounded 1-D intervals with per-endpoint openness.
//!
//! Purpose
//! - Provide the interval algebra (union, intersection, negation, `+ - * /`,
//!   constant scaling) that magnitude intervals and angle intervals build on.
//! - Keep endpoint-inclusion bookkeeping explicit: every operation states how
//!   boundary flags propagate, and mismatched flags degrade to open.
//!
//! Conventions
//! - `normalized` is the canonical form with `first <= second`; arithmetic
//!   does not require it but callers are expected to construct fans from
//!   normalized members.
//! - Emptiness is structural: equal extremes with at least one open side.
//!   `[x,x]` is a single point and is *not* empty.
//! - All operations are pure and return new values. The in-place mutators of
//!   classic interval libraries show up here as `normalized`/`scaled`.

use std::fmt;

use crate::error::FanError;

/// Openness of one interval endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Open,
    Closed,
}

impl Boundary {
    /// Merge rule for endpoint flags: keep the flag only when both operands
    /// agree, otherwise degrade to open.
    #[inline]
    pub(crate) fn merge(self, other: Boundary) -> Boundary {
        if self == other {
            self
        } else {
            Boundary::Open
        }
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Boundary::Closed)
    }

    /// Parse one inclusion character: `'('`/`'['` for the first extreme,
    /// `')'`/`']'` for the second.
    pub fn from_char(c: char) -> Option<Boundary> {
        match c {
            '(' | ')' => Some(Boundary::Open),
            '[' | ']' => Some(Boundary::Closed),
            _ => None,
        }
    }
}

/// Types with a canonical normalized form.
///
/// The only polymorphic seam between plain intervals and angle intervals is
/// the normalization policy; everything else is shared value algebra.
pub trait Normalize {
    fn normalized(self) -> Self;
}

/// A bounded interval `[a,b]`, `(a,b)` or mixed.
///
/// Doubles as a magnitude (radius) interval; callers are responsible for
/// keeping magnitudes non-negative, nothing here checks for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub first: f64,
    pub second: f64,
    pub first_bound: Boundary,
    pub second_bound: Boundary,
}

impl Default for Interval {
    /// The canonical empty interval `(0,0)`.
    fn default() -> Self {
        Interval::empty()
    }
}

impl Interval {
    #[inline]
    pub const fn new(first: f64, second: f64, first_bound: Boundary, second_bound: Boundary) -> Self {
        Self {
            first,
            second,
            first_bound,
            second_bound,
        }
    }

    /// The empty interval `(0,0)`.
    #[inline]
    pub const fn empty() -> Self {
        Interval::new(0.0, 0.0, Boundary::Open, Boundary::Open)
    }

    /// Closed interval `[a,b]`.
    #[inline]
    pub const fn closed(a: f64, b: f64) -> Self {
        Interval::new(a, b, Boundary::Closed, Boundary::Closed)
    }

    /// The single point `[x,x]`.
    #[inline]
    pub const fn point(x: f64) -> Self {
        Interval::closed(x, x)
    }

    /// Build from the textual inclusion characters `'('`/`'['` and `')'`/`']'`.
    pub fn from_chars(first: f64, second: f64, fe: char, se: char) -> Option<Self> {
        match (fe, se) {
            ('(' | '[', ')' | ']') => Some(Interval::new(
                first,
                second,
                Boundary::from_char(fe)?,
                Boundary::from_char(se)?,
            )),
            _ => None,
        }
    }

    /// Equal extremes with at least one open side.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.second
            && !(self.first_bound.is_closed() && self.second_bound.is_closed())
    }

    /// Scale both extremes by `k`. A negative factor swaps the extreme roles
    /// to keep the ordering invariant; boundary flags stay in place.
    pub fn scaled(self, k: f64) -> Self {
        if k < 0.0 {
            Interval::new(k * self.second, k * self.first, self.first_bound, self.second_bound)
        } else {
            Interval::new(k * self.first, k * self.second, self.first_bound, self.second_bound)
        }
    }

    /// Union of two intervals. Disjoint (or boundary-incompatible touching)
    /// operands yield the empty interval rather than a two-piece set.
    pub fn union(self, other: Interval) -> Interval {
        if self.intersection(other).is_empty() {
            return Interval::empty();
        }
        let (a, b, ai, bi) = (self.first, self.second, self.first_bound, self.second_bound);
        let (c, d, ci, di) = (other.first, other.second, other.first_bound, other.second_bound);
        let (fe, fei) = if a < c {
            (a, ai)
        } else if a > c {
            (c, ci)
        } else {
            (a, ai.merge(ci))
        };
        let (se, sei) = if d < b {
            (b, bi)
        } else if d > b {
            (d, di)
        } else {
            (b, bi.merge(di))
        };
        Interval::new(fe, se, fei, sei)
    }

    /// Intersection of two intervals, with a full case split on the relative
    /// ordering of the four extremes and every touching-endpoint combination.
    pub fn intersection(self, other: Interval) -> Interval {
        let (a, b, p1, p2) = (self.first, self.second, self.first_bound, self.second_bound);
        let (c, d, p3, p4) = (other.first, other.second, other.first_bound, other.second_bound);

        if a == c && b == d {
            if a == b {
                if p1.is_closed() && p3.is_closed() && p2.is_closed() && p4.is_closed() {
                    self
                } else {
                    Interval::empty()
                }
            } else {
                Interval::new(a, b, p1.merge(p3), p2.merge(p4))
            }
        } else if a < c && b <= c {
            // Only the touching point survives, and only if both sides include it.
            if b == c && p2.is_closed() && p3.is_closed() {
                Interval::new(b, b, p3, p2)
            } else {
                Interval::empty()
            }
        } else if a <= c && b < d {
            if a == c {
                Interval::new(a, b, p1.merge(p3), p2)
            } else {
                Interval::new(c, b, p3, p2)
            }
        } else if a < c && b == d {
            Interval::new(c, b, p3, p2.merge(p4))
        } else if a <= c && b > d {
            if a == c {
                Interval::new(a, d, p1.merge(p3), p4)
            } else {
                other
            }
        } else if a > c && b <= d {
            if b == d {
                Interval::new(a, b, p1, p2.merge(p4))
            } else {
                self
            }
        } else if a <= d && b > d {
            if a == d {
                if p1.is_closed() && p4.is_closed() {
                    Interval::new(a, a, p1, p4)
                } else {
                    Interval::empty()
                }
            } else {
                Interval::new(a, d, p1, p4)
            }
        } else {
            Interval::empty()
        }
    }

    /// `-[a,b] = [-b,-a]` with the boundary flags swapped along.
    pub fn negation(self) -> Interval {
        Interval::new(-self.second, -self.first, self.second_bound, self.first_bound)
    }

    /// Component-wise sum. Flags survive only where both operands agree.
    pub fn addition(self, other: Interval) -> Interval {
        Interval::new(
            self.first + other.first,
            self.second + other.second,
            self.first_bound.merge(other.first_bound),
            self.second_bound.merge(other.second_bound),
        )
    }

    /// Cross-combined difference `[a-d, b-c]`; each result flag is closed
    /// only when the specific side pairing is closed on both operands.
    pub fn subtraction(self, other: Interval) -> Interval {
        Interval::new(
            self.first - other.second,
            self.second - other.first,
            if self.first_bound.is_closed() && other.second_bound.is_closed() {
                Boundary::Closed
            } else {
                Boundary::Open
            },
            if self.second_bound.is_closed() && other.first_bound.is_closed() {
                Boundary::Closed
            } else {
                Boundary::Open
            },
        )
    }

    /// Component-wise product (magnitudes are assumed non-negative).
    pub fn product(self, other: Interval) -> Interval {
        Interval::new(
            self.first * other.first,
            self.second * other.second,
            self.first_bound.merge(other.first_bound),
            self.second_bound.merge(other.second_bound),
        )
    }

    /// `[a,b] / [c,d] = [a/d, b/c]` with the subtraction flag rule.
    ///
    /// A divisor touching zero at either extreme cannot be inverted and is
    /// surfaced as an error instead of aborting the computation.
    pub fn division(self, other: Interval) -> Result<Interval, FanError> {
        if other.first == 0.0 || other.second == 0.0 {
            return Err(FanError::DivisorTouchesZero { divisor: other });
        }
        Ok(Interval::new(
            self.first / other.second,
            self.second / other.first,
            if self.first_bound.is_closed() && other.second_bound.is_closed() {
                Boundary::Closed
            } else {
                Boundary::Open
            },
            if self.second_bound.is_closed() && other.first_bound.is_closed() {
                Boundary::Closed
            } else {
                Boundary::Open
            },
        ))
    }
}

impl Normalize for Interval {
    /// Reorder the extremes so `first <= second`, carrying each boundary flag
    /// along with its extreme.
    fn normalized(self) -> Self {
        if self.first > self.second {
            Interval::new(self.second, self.first, self.second_bound, self.first_bound)
        } else {
            self
        }
    }
}

impl std::ops::Add for Interval {
    type Output = Interval;
    #[inline]
    fn add(self, rhs: Interval) -> Interval {
        self.addition(rhs)
    }
}
impl std::ops::Sub for Interval {
    type Output = Interval;
    #[inline]
    fn sub(self, rhs: Interval) -> Interval {
        self.subtraction(rhs)
    }
}
impl std::ops::Mul for Interval {
    type Output = Interval;
    #[inline]
    fn mul(self, rhs: Interval) -> Interval {
        self.product(rhs)
    }
}
impl std::ops::Neg for Interval {
    type Output = Interval;
    #[inline]
    fn neg(self) -> Interval {
        self.negation()
    }
}

impl fmt::Display for Interval {
    /// Renders as `<flag><first>,<second><flag>`, e.g. `[1,2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.first_bound.is_closed() { '[' } else { '(' };
        let close = if self.second_bound.is_closed() { ']' } else { ')' };
        write!(f, "{}{},{}{}", open, self.first, self.second, close)
    }
}

#[cfg(test)]
mod tests;

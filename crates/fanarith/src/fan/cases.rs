//! Closed-form magnitude/angle bounds for the three addition cases.
//!
//! All three operate in the pair's canonical frame: the first piece's angle
//! interval starts at 0°, the second piece's bounds select the case.
//! Throughout, `(a,b)` are the first piece's magnitude extremes, `(c,d)` the
//! second's, and `alfa1..alfa4` the two angle intervals' extremes, following
//! the derivation's naming.
//!
//! - Case 1: both pieces inside the first quadrant; law-of-cosines bounds on
//!   the magnitude, vector-sum bearings for the angle.
//! - Case 2: the second piece progresses through 90°; the inner corner of
//!   the magnitude bound comes from an interval-intersection projection, and
//!   angle candidates past 90° are re-derived with a perpendicular-tangent
//!   construction.
//! - Case 3: the second piece sits past 180°, where the difference of the
//!   two magnitude ranges can reach zero and the result degenerates to the
//!   full circle.

use nalgebra::Vector2;

use crate::angle::{modulo_360, AngleInterval};
use crate::interval::Interval;

use super::ComplexFan;

/// Vector of length `r` at bearing `deg` degrees.
#[inline]
fn polar(r: f64, deg: f64) -> Vector2<f64> {
    let rad = deg.to_radians();
    Vector2::new(r * rad.cos(), r * rad.sin())
}

/// Bearing of a vector in `[0,360)` degrees, with explicit handling of every
/// sign-quadrant combination and the axis-aligned cases.
pub(super) fn bearing_of(v: Vector2<f64>) -> f64 {
    let (x, y) = (v.x, v.y);
    if x >= 0.0 && y > 0.0 {
        if x == 0.0 {
            90.0
        } else {
            (y / x).atan().to_degrees()
        }
    } else if x >= 0.0 && y == 0.0 {
        0.0
    } else if x >= 0.0 && y < 0.0 {
        if x == 0.0 {
            270.0
        } else {
            360.0 - (y.abs() / x).atan().to_degrees()
        }
    } else if x < 0.0 && y > 0.0 {
        180.0 - (y / x.abs()).atan().to_degrees()
    } else if x < 0.0 && y == 0.0 {
        180.0
    } else if x < 0.0 && y < 0.0 {
        180.0 + (y.abs() / x.abs()).atan().to_degrees()
    } else {
        // NaN component; no bearing is meaningful.
        0.0
    }
}

/// Case 1: both angle sub-intervals within `[0,90]`.
pub(super) fn addition_case1(cf1: ComplexFan, cf2: ComplexFan) -> ComplexFan {
    let (a, b) = (cf1.magnitude.first, cf1.magnitude.second);
    let (c, d) = (cf2.magnitude.first, cf2.magnitude.second);
    let (alfa1, alfa2) = (cf1.angle.first(), cf1.angle.second());
    let (alfa3, alfa4) = (cf2.angle.first(), cf2.angle.second());

    // Overlapping angle ranges can always align, so the widest-gap cosine
    // bounds the lower magnitude and the zero-gap cosine the upper.
    let angulo_min = if alfa2 >= alfa3 { 0.0 } else { alfa2 - alfa3 };
    let angulo_max = (alfa4 - alfa1).max(alfa2 - alfa3);
    let e = (a * a + c * c + 2.0 * a * c * angulo_max.to_radians().cos()).sqrt();
    let f = (b * b + d * d + 2.0 * b * d * angulo_min.to_radians().cos()).sqrt();

    let v5 = polar(b, alfa1) + polar(c, alfa3);
    let alfa5 = (v5.y / v5.x).atan().to_degrees();
    let alfa6 = if alfa2 < alfa4 {
        let v = polar(a, alfa2) + polar(d, alfa4);
        (v.y / v.x).atan().to_degrees()
    } else if alfa2 > alfa4 {
        let v = polar(b, alfa2) + polar(c, alfa4);
        (v.y / v.x).atan().to_degrees()
    } else {
        alfa2
    };
    ComplexFan::new(
        Interval::closed(e, f),
        AngleInterval::from(Interval::closed(alfa5, alfa6)),
    )
}

/// Case 2: the second angle sub-interval within `[90,180]`.
pub(super) fn addition_case2(cf1: ComplexFan, cf2: ComplexFan) -> ComplexFan {
    ComplexFan::new(magnitude_case2(cf1, cf2), angle_case2(cf1, cf2))
}

fn magnitude_case2(cf1: ComplexFan, cf2: ComplexFan) -> Interval {
    let mi1 = cf1.magnitude;
    let mi2 = cf2.magnitude;
    let (a, b) = (mi1.first, mi1.second);
    let (c, d) = (mi2.first, mi2.second);
    let (alfa1, alfa2) = (cf1.angle.first(), cf1.angle.second());
    let (alfa3, alfa4) = (cf2.angle.first(), cf2.angle.second());
    let angulo_min = alfa3 - alfa2;
    let angulo_max = alfa4 - alfa1;

    // Upper bound: law of cosines while the angular gap stays acute-ish,
    // else the farthest of the four extreme corners.
    let f = if angulo_min <= 90.0 {
        (b * b + d * d + 2.0 * b * d * angulo_min.to_radians().cos()).sqrt()
    } else {
        let corner = |r2: f64, r1: f64| (polar(r2, alfa3) + polar(r1, alfa2)).norm();
        corner(c, a).max(corner(d, a)).max(corner(c, b)).max(corner(d, b))
    };

    // Lower bound: project each magnitude axis against the other scaled by
    // cos(angular span); the intersection locates the tightest inner corner,
    // else the nearer un-intersected endpoint.
    let cos_max = angulo_max.to_radians().cos();
    let mut xm = 0.0;
    let mut ym = 0.0;
    let inter = mi1.intersection(mi2.scaled(cos_max).negation());
    if !inter.is_empty() {
        xm = inter.first;
    } else if a > -d * cos_max {
        xm = a;
    } else if b < -c * cos_max {
        xm = b;
    }
    let inter = mi2.intersection(mi1.scaled(cos_max).negation());
    if !inter.is_empty() {
        ym = inter.first;
    } else if c > -b * cos_max {
        ym = c;
    } else if d < -a * cos_max {
        ym = d;
    }
    let e = (xm * xm + ym * ym + 2.0 * xm * ym * cos_max).sqrt();
    Interval::closed(e, f)
}

fn angle_case2(cf1: ComplexFan, cf2: ComplexFan) -> AngleInterval {
    let (a, b) = (cf1.magnitude.first, cf1.magnitude.second);
    let (c, d) = (cf2.magnitude.first, cf2.magnitude.second);
    let (alfa1, alfa2) = (cf1.angle.first(), cf1.angle.second());
    let (alfa3, alfa4) = (cf2.angle.first(), cf2.angle.second());

    let aux1 = bearing_of(polar(c, alfa3) + polar(b, alfa1));
    let aux2 = bearing_of(polar(c, alfa4) + polar(b, alfa1));
    let mut alfa5 = aux1.min(aux2);
    let aux1 = bearing_of(polar(d, alfa4) + polar(a, alfa1));
    let aux2 = bearing_of(polar(d, alfa4) + polar(a, alfa2));
    let mut alfa6 = aux1.max(aux2);

    if alfa6 < 90.0 {
        // The candidate stayed below 90°: check the perpendicular-tangent
        // bearing against the second fan's angular range.
        let anguloy = alfa2 + (d / a).asin().to_degrees();
        let anguloo = anguloy + 90.0;
        let inter = Interval::point(anguloo).intersection(cf2.angle.as_interval());
        if !inter.is_empty() {
            alfa6 = anguloy;
        } else if anguloo < alfa3 {
            alfa6 = bearing_of(polar(d, alfa3) + polar(a, alfa2));
        } else if anguloo > alfa4 {
            alfa6 = bearing_of(polar(d, alfa4) + polar(a, alfa2));
        }
    }
    if alfa5 > 90.0 {
        let anguloy = alfa3 - (b / c).asin().to_degrees();
        let anguloo = anguloy - 90.0;
        let inter = Interval::point(anguloo).intersection(cf1.angle.as_interval());
        if !inter.is_empty() {
            // Snap to the tangent bearing itself, not the perpendicular foot.
            alfa5 = anguloy;
        } else if anguloo < alfa1 {
            alfa5 = bearing_of(polar(c, alfa3) + polar(b, alfa1));
        } else if anguloo > alfa2 {
            alfa5 = bearing_of(polar(c, alfa3) + polar(b, alfa2));
        }
    }
    AngleInterval::from(Interval::closed(alfa5, alfa6))
}

/// Case 3: the second angle sub-interval within `[180,270]`.
pub(super) fn addition_case3(cf1: ComplexFan, cf2: ComplexFan) -> ComplexFan {
    ComplexFan::new(magnitude_case3(cf1, cf2), angle_case3(cf1, cf2))
}

fn magnitude_case3(cf1: ComplexFan, cf2: ComplexFan) -> Interval {
    let mi1 = cf1.magnitude;
    let mi2 = cf2.magnitude;
    let (a, b) = (mi1.first, mi1.second);
    let (c, d) = (mi2.first, mi2.second);
    let (alfa1, alfa2) = (cf1.angle.first(), cf1.angle.second());
    let (alfa3, alfa4) = (cf2.angle.first(), cf2.angle.second());

    // Which pair of facing corners bounds the magnitude depends on whether
    // the near gap or the far (wrapped) gap is smaller.
    let angulo1 = alfa3 - alfa2;
    let angulo2 = 360.0 - (alfa4 - alfa1);
    let f = if angulo1 < angulo2 {
        let corner = |r2: f64, r1: f64| (polar(r2, alfa3) + polar(r1, alfa2)).norm();
        corner(c, a).max(corner(d, a)).max(corner(c, b)).max(corner(d, b))
    } else {
        let corner = |r2: f64, r1: f64| (polar(r2, alfa4) + polar(r1, alfa1)).norm();
        corner(c, a).max(corner(d, a)).max(corner(c, b)).max(corner(d, b))
    };

    // Opposed directions: the lower bound is the gap between the magnitude
    // ranges, zero when they overlap.
    let inter = mi1.intersection(mi2);
    let (mut xm, mut ym) = (0.0, 0.0);
    if !inter.is_empty() {
        xm = inter.first;
        ym = xm;
    } else if a > d {
        xm = a;
        ym = d;
    } else if b < c {
        xm = b;
        ym = c;
    }
    let e = (xm * xm + ym * ym - 2.0 * xm * ym).sqrt();
    Interval::closed(e, f)
}

fn angle_case3(cf1: ComplexFan, cf2: ComplexFan) -> AngleInterval {
    let mi1 = cf1.magnitude;
    let mi2 = cf2.magnitude;
    let (a, b) = (mi1.first, mi1.second);
    let (c, d) = (mi2.first, mi2.second);
    let (alfa1, alfa2) = (cf1.angle.first(), cf1.angle.second());
    let (alfa3, alfa4) = (cf2.angle.first(), cf2.angle.second());

    let angulo_max = 180.0f64;
    let mag_diff = mi1.addition(mi2.scaled(angulo_max.to_radians().cos()));

    let (alfa5, alfa6);
    if !Interval::point(0.0).intersection(mag_diff).is_empty() {
        // The zero vector lies inside the combined magnitude range: the sum
        // can point anywhere.
        alfa5 = 0.0;
        alfa6 = 360.0;
    } else if mag_diff.first > 0.0 && mag_diff.second > 0.0 {
        // The first fan dominates.
        let mut hi = bearing_of(polar(d, alfa3) + polar(a, alfa2));
        if hi > 90.0 {
            let anguloy = (d / a).asin().to_degrees() + alfa2;
            let anguloo = anguloy + 90.0;
            let inter = Interval::point(anguloo).intersection(cf2.angle.as_interval());
            if !inter.is_empty() {
                hi = anguloy;
            } else if anguloo < alfa3 {
                hi = bearing_of(polar(d, alfa3) + polar(a, alfa2));
            } else if anguloo > alfa4 {
                hi = bearing_of(polar(d, alfa4) + polar(a, alfa2));
            }
        }
        let mut lo = bearing_of(polar(d, alfa4) + polar(a, alfa1));
        if lo > 270.0 {
            let anguloy = 360.0 - (d / a).asin().to_degrees();
            let anguloo = anguloy - 90.0;
            let inter = Interval::point(anguloo).intersection(cf2.angle.as_interval());
            if !inter.is_empty() {
                lo = anguloy;
            } else if anguloo < alfa3 {
                lo = bearing_of(polar(d, alfa3) + polar(a, alfa1));
            } else if anguloo > alfa4 {
                lo = bearing_of(polar(d, alfa4) + polar(a, alfa1));
            }
        }
        alfa5 = lo;
        alfa6 = hi;
    } else {
        // The second fan dominates; bounds come from its corners against the
        // first fan's angular range.
        let mut hi = bearing_of(polar(c, alfa4) + polar(b, alfa1));
        if hi > 270.0 {
            let anguloy = alfa4 + (b / c).asin().to_degrees();
            let anguloo = modulo_360(anguloy + 90.0);
            let inter = Interval::point(anguloo).intersection(cf1.angle.as_interval());
            if !inter.is_empty() {
                hi = anguloy;
            } else if anguloo < alfa1 {
                hi = bearing_of(polar(c, alfa4) + polar(b, alfa1));
            } else if anguloo > alfa2 {
                hi = bearing_of(polar(c, alfa4) + polar(b, alfa2));
            }
        }
        let mut lo = bearing_of(polar(c, alfa3) + polar(b, alfa2));
        if lo < 180.0 {
            let anguloy = alfa3 - (b / c).asin().to_degrees();
            let anguloo = anguloy - 90.0;
            let inter = Interval::point(anguloo).intersection(cf1.angle.as_interval());
            if !inter.is_empty() {
                lo = anguloy;
            } else if anguloo < alfa1 {
                lo = bearing_of(polar(c, alfa3) + polar(b, alfa1));
            } else if anguloo > alfa2 {
                lo = bearing_of(polar(c, alfa3) + polar(b, alfa2));
            }
        }
        alfa5 = lo;
        alfa6 = hi;
    }
    AngleInterval::from(Interval::closed(alfa5, alfa6))
}

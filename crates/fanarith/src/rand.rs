//! Deterministic random fans (replay tokens).
//!
//! Purpose
//! - Provide a small, reproducible sampler for well-formed fans used by
//!   benchmarks and sampled tests: positive magnitude intervals, angle
//!   intervals inside `[0,360]`, random boundary flags.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::angle::AngleInterval;
use crate::fan::ComplexFan;
use crate::interval::{Boundary, Interval};

/// Fan sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FanCfg {
    /// Lower bound for the magnitude interval's start.
    pub mag_min: f64,
    /// Maximum width of the magnitude interval.
    pub mag_span: f64,
    /// Maximum angular width in degrees. Clamped to [0, 360].
    pub angle_span_max: f64,
    /// Allow the angle interval to wrap past 0°?
    pub allow_wrap: bool,
}

impl Default for FanCfg {
    fn default() -> Self {
        Self {
            mag_min: 0.5,
            mag_span: 4.0,
            angle_span_max: 120.0,
            allow_wrap: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_bound<R: Rng>(rng: &mut R) -> Boundary {
    if rng.gen::<bool>() {
        Boundary::Closed
    } else {
        Boundary::Open
    }
}

/// Draw a well-formed fan: a positive non-degenerate magnitude interval and
/// an angle interval of bounded width starting anywhere on the circle.
pub fn draw_fan(cfg: FanCfg, tok: ReplayToken) -> ComplexFan {
    let mut rng = tok.to_std_rng();
    let lo = cfg.mag_min.max(1e-9) + rng.gen::<f64>() * cfg.mag_span.max(0.0);
    let width = 1e-6 + rng.gen::<f64>() * cfg.mag_span.max(0.0);
    let magnitude = Interval::new(lo, lo + width, draw_bound(&mut rng), draw_bound(&mut rng));

    let span = rng.gen::<f64>() * cfg.angle_span_max.clamp(0.0, 360.0);
    let start = if cfg.allow_wrap {
        rng.gen::<f64>() * 360.0
    } else {
        rng.gen::<f64>() * (360.0 - span)
    };
    let angle = AngleInterval::new(start, start + span, draw_bound(&mut rng), draw_bound(&mut rng));
    ComplexFan::new(magnitude, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = FanCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let f1 = draw_fan(cfg, tok);
        let f2 = draw_fan(cfg, tok);
        assert_eq!(f1, f2);
    }

    #[test]
    fn draws_are_well_formed() {
        let cfg = FanCfg::default();
        for index in 0..64 {
            let f = draw_fan(cfg, ReplayToken { seed: 3, index });
            assert!(f.magnitude().first > 0.0);
            assert!(f.magnitude().first < f.magnitude().second);
            assert!((0.0..=360.0).contains(&f.angle().first()));
            assert!((0.0..=360.0).contains(&f.angle().second()));
            assert!(f.partition().is_some());
        }
    }
}

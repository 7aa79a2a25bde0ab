//! Error type for the fallible fan operations.
//!
//! Division by a zero-touching magnitude interval and a fan whose angle
//! interval cannot be split into quadrant pieces are the only two abort
//! points in the whole algebra; both surface as values so callers can
//! recover instead of losing the process.

use thiserror::Error;

use crate::fan::ComplexFan;
use crate::interval::Interval;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FanError {
    /// Interval or fan division where the divisor magnitude interval has an
    /// extreme exactly at zero.
    #[error("cannot divide by a magnitude interval touching zero: {divisor}")]
    DivisorTouchesZero { divisor: Interval },

    /// Quadrant partitioning produced no non-empty piece; the fan's angle
    /// interval is outside the supported `[0,360]` shape.
    #[error("fan has no quadrant-aligned parts: {fan}")]
    MalformedFan { fan: ComplexFan },
}

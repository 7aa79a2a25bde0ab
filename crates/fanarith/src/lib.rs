//! Interval arithmetic over complex fans.
//!
//! A complex fan generalizes a polar complex number to a region: a magnitude
//! (radius) interval paired with an angle (bearing) interval, each endpoint
//! independently open or closed. The crate provides the 1-D interval algebra,
//! angle intervals wrapped modulo 360°, and the geometric composition of two
//! fans — negation, product, division, and the quadrant-partitioned addition
//! algorithm for propagating magnitude+angle uncertainty through complex
//! sums.
//!
//! The core is pure, synchronous computation over `Copy` value types; the
//! only fallible operations are division by a zero-touching magnitude
//! interval and addition of a malformed fan, both surfaced as [`FanError`].

pub mod angle;
pub mod error;
pub mod fan;
pub mod interval;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::AngleInterval;
pub use error::FanError;
pub use fan::ComplexFan;
pub use interval::{Boundary, Interval, Normalize};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{covers_four_quadrants, modulo_360, union_all, AngleInterval, FULL_TURN};
    pub use crate::error::FanError;
    pub use crate::fan::{classify_pair, AdditionCase, ComplexFan};
    pub use crate::interval::{Boundary, Interval, Normalize};
    pub use crate::rand::{draw_fan, FanCfg, ReplayToken};
}

//! Planar primitives: point-on-segment, point-on-line, point-in-ring,
//! point-in-polygon and segment midpoints.
//!
//! All tests are exact. A point is on a segment only if it is exactly collinear
//! with it, there is no epsilon.

mod line;
mod polygon;

pub use line::*;
pub use polygon::*;

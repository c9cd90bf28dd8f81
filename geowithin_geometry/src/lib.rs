//! Geometry value types, bounding boxes and the planar primitives the `geowithin`
//! predicates are composed from.
//!
//! Coordinates are compared exactly: two coordinates are equal only if both
//! components are bit-for-bit equal floats, there is no tolerance.

mod bbox;
mod geometry;
pub mod math;

pub use bbox::*;
pub use geometry::*;

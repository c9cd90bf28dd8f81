// One function per supported `(first, second)` type pair. Each takes the concrete
// geometries, the dispatcher has already matched the types.
//
// Polygons are only consulted through their outer ring; holes never affect the result.

mod line_string;
mod multi_point;
mod point;
mod polygon;

pub(crate) use line_string::*;
pub(crate) use multi_point::*;
pub(crate) use point::*;
pub(crate) use polygon::*;

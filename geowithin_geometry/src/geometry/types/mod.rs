// Geometry kinds used by the predicates: `PointGeometry`, `LineStringGeometry`,
// `PolygonGeometry` (built from `RingGeometry`) and their multi counterparts.
// All of them implement `GeometryTrait` for bounds, validation and point location;
// the container kinds also implement `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;

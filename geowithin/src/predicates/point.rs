use geowithin_geometry::{
	LineStringGeometry, MultiPointGeometry, PointGeometry, PolygonGeometry,
	math::{point_in_ring, point_on_line},
};

/// The point equals one of the points of the multi-point.
pub(crate) fn point_in_multi_point(point: &PointGeometry, multi_point: &MultiPointGeometry) -> bool {
	multi_point.coords().any(|coord| coord == point.as_coord())
}

/// The point lies on the line, but not on its first or last vertex.
pub(crate) fn point_on_line_string(point: &PointGeometry, line: &LineStringGeometry) -> bool {
	point_on_line(point.as_coord(), line, true)
}

/// The point lies strictly inside the polygon's outer ring.
pub(crate) fn point_in_polygon_interior(point: &PointGeometry, polygon: &PolygonGeometry) -> bool {
	polygon
		.exterior()
		.is_some_and(|ring| point_in_ring(point.as_coord(), ring, true))
}

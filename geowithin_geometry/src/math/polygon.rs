use super::{SegmentEnds, point_on_segment};
use crate::{Coordinates, GeometryTrait, Location, PolygonGeometry, RingGeometry};

/// Locates a coordinate relative to a single ring.
///
/// Every ring edge is boundary. Off the edges the even-odd ray casting rule decides.
/// An open ring is treated as closed by an implicit edge from its last to its first
/// coordinate. Rings with fewer than three distinct vertices enclose nothing.
pub fn locate_in_ring(point: &Coordinates, ring: &RingGeometry) -> Location {
	let coords = &ring.0;
	let len = coords.len();

	let on_edge = (0..len).any(|i| point_on_segment(&coords[i], &coords[(i + 1) % len], point, SegmentEnds::Include));
	if on_edge {
		return Location::Boundary;
	}

	let vertices = if coords.first() == coords.last() { len.saturating_sub(1) } else { len };
	if vertices < 3 {
		return Location::Exterior;
	}

	let (x, y) = (point.x(), point.y());
	let mut inside = false;
	let mut j = coords.len() - 1;

	for i in 0..coords.len() {
		let (xi, yi) = (coords[i].x(), coords[i].y());
		let (xj, yj) = (coords[j].x(), coords[j].y());

		// Check if the edge straddles the horizontal ray and crosses it right of the point
		if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
			inside = !inside;
		}
		j = i;
	}

	if inside { Location::Interior } else { Location::Exterior }
}

/// Locates a coordinate relative to a polygon, holes included.
///
/// A point inside a hole is exterior, a point on a hole's edge is boundary.
pub fn locate_in_polygon(point: &Coordinates, polygon: &PolygonGeometry) -> Location {
	let Some(exterior) = polygon.exterior() else {
		return Location::Exterior;
	};
	match polygon.compute_bounds() {
		Some(bbox) if bbox.contains_coord(point) => {}
		_ => return Location::Exterior,
	}

	match locate_in_ring(point, exterior) {
		Location::Interior => {}
		other => return other,
	}

	for hole in polygon.interiors() {
		match locate_in_ring(point, hole) {
			Location::Interior => return Location::Exterior,
			Location::Boundary => return Location::Boundary,
			Location::Exterior => {}
		}
	}
	Location::Interior
}

/// Whether `point` lies inside `ring`, counting the ring's edges as inside unless
/// `exclude_boundary` is set.
pub fn point_in_ring(point: &Coordinates, ring: &RingGeometry, exclude_boundary: bool) -> bool {
	ring.locate(point).is_inside(exclude_boundary)
}

/// Whether `point` lies inside `polygon` (holes honoured), counting edges as inside
/// unless `exclude_boundary` is set.
///
/// ```
/// use geowithin_geometry::{Coordinates, PolygonGeometry, math::point_in_polygon};
///
/// let square = PolygonGeometry::from(&[[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]);
/// assert!(point_in_polygon(&Coordinates::new(5.0, 5.0), &square, true));
/// assert!(point_in_polygon(&Coordinates::new(0.0, 5.0), &square, false));
/// assert!(!point_in_polygon(&Coordinates::new(0.0, 5.0), &square, true));
/// ```
pub fn point_in_polygon(point: &Coordinates, polygon: &PolygonGeometry, exclude_boundary: bool) -> bool {
	locate_in_polygon(point, polygon).is_inside(exclude_boundary)
}

use geowithin_geometry::{
	GeometryTrait, LineStringGeometry, PolygonGeometry, bbox_overlap,
	math::{midpoint, point_in_ring, point_on_line},
};
use log::debug;

/// Every vertex of `line` lies on `other`, end vertices included.
///
/// Only vertices are tested, so a line that runs collinear with `other` between two of
/// its vertices counts as within.
pub(crate) fn line_string_on_line_string(line: &LineStringGeometry, other: &LineStringGeometry) -> bool {
	if line.0.is_empty() {
		return false;
	}
	line.0.iter().all(|coord| point_on_line(coord, other, false))
}

/// The line stays inside or on the polygon's outer ring and passes through its interior.
///
/// Each vertex except the last must be inside or on the ring. The interior witness is
/// either a vertex strictly inside the ring or the midpoint of a segment strictly inside it,
/// which rejects lines that only run along the boundary.
pub(crate) fn line_string_in_polygon(line: &LineStringGeometry, polygon: &PolygonGeometry) -> bool {
	let (Some(polygon_bbox), Some(line_bbox), Some(ring)) = (polygon.compute_bounds(), line.compute_bounds(), polygon.exterior())
	else {
		return false;
	};

	if !bbox_overlap(&polygon_bbox, &line_bbox) {
		debug!("line {line_bbox:?} pruned, not inside polygon {polygon_bbox:?}");
		return false;
	}

	let mut found_interior = false;
	for (start, end) in line.segments() {
		if !point_in_ring(start, ring, false) {
			return false;
		}
		if !found_interior {
			found_interior = point_in_ring(start, ring, true);
		}
		if !found_interior {
			found_interior = point_in_ring(&midpoint(start, end), ring, true);
		}
	}
	found_interior
}

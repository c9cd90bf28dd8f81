use geowithin_geometry::{GeometryTrait, PolygonGeometry, bbox_overlap, math::point_in_ring};
use log::debug;

/// Every vertex of the inner polygon's outer ring lies inside or on the outer polygon's
/// outer ring. No interior witness is required, so identical polygons are within each other.
pub(crate) fn polygon_in_polygon(inner: &PolygonGeometry, outer: &PolygonGeometry) -> bool {
	let (Some(inner_bbox), Some(outer_bbox), Some(inner_ring), Some(outer_ring)) =
		(inner.compute_bounds(), outer.compute_bounds(), inner.exterior(), outer.exterior())
	else {
		return false;
	};

	if !bbox_overlap(&outer_bbox, &inner_bbox) {
		debug!("polygon {inner_bbox:?} pruned, not inside polygon {outer_bbox:?}");
		return false;
	}

	inner_ring.0.iter().all(|coord| point_in_ring(coord, outer_ring, false))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square(min: i32, max: i32) -> PolygonGeometry {
		PolygonGeometry::from(&[[[min, min], [min, max], [max, max], [max, min], [min, min]]])
	}

	#[test]
	fn identical_squares() {
		assert!(polygon_in_polygon(&square(0, 10), &square(0, 10)));
	}

	#[test]
	fn nested_squares_are_directional() {
		assert!(polygon_in_polygon(&square(2, 8), &square(0, 10)));
		assert!(!polygon_in_polygon(&square(0, 10), &square(2, 8)));
	}

	#[test]
	fn bbox_prune() {
		assert!(!polygon_in_polygon(&square(5, 15), &square(0, 10)));
		assert!(!polygon_in_polygon(&square(20, 30), &square(0, 10)));
	}

	#[test]
	fn concave_container() {
		// U shape, the triangle's apex reaches into the notch
		let outer = PolygonGeometry::from(&[[[0, 0], [6, 0], [6, 6], [4, 6], [4, 2], [2, 2], [2, 6], [0, 6], [0, 0]]]);
		let inner = PolygonGeometry::from(&[[[1, 1], [3, 5], [5, 1], [1, 1]]]);
		assert!(!polygon_in_polygon(&inner, &outer));
		let inner = PolygonGeometry::from(&[[[1, 1], [3, 2], [5, 1], [1, 1]]]);
		assert!(polygon_in_polygon(&inner, &outer));
	}

	#[test]
	fn holes_are_ignored() {
		let with_hole = PolygonGeometry::from(&[
			[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]],
			[[2, 2], [2, 8], [8, 8], [8, 2], [2, 2]],
		]);
		assert!(polygon_in_polygon(&square(3, 7), &with_hole));
		assert!(polygon_in_polygon(&with_hole, &square(0, 10)));
	}

	#[test]
	fn empty_polygons() {
		assert!(!polygon_in_polygon(&PolygonGeometry(vec![]), &square(0, 10)));
		assert!(!polygon_in_polygon(&square(0, 10), &PolygonGeometry(vec![])));
	}
}

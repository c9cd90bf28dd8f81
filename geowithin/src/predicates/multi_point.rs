use geowithin_geometry::{
	LineStringGeometry, MultiPointGeometry, PolygonGeometry,
	math::{point_in_ring, point_on_line},
};

/// Every point of `multi_point` equals some point of `other`. Matches may repeat.
pub(crate) fn multi_point_in_multi_point(multi_point: &MultiPointGeometry, other: &MultiPointGeometry) -> bool {
	if multi_point.0.is_empty() {
		return false;
	}
	multi_point
		.coords()
		.all(|coord| other.coords().any(|candidate| candidate == coord))
}

/// Every point lies on the line, and at least one of them is not an end vertex.
pub(crate) fn multi_point_on_line_string(multi_point: &MultiPointGeometry, line: &LineStringGeometry) -> bool {
	let mut found_interior = false;
	for coord in multi_point.coords() {
		if !point_on_line(coord, line, false) {
			return false;
		}
		if !found_interior {
			found_interior = point_on_line(coord, line, true);
		}
	}
	found_interior
}

/// Every point lies inside or on the outer ring, and at least one strictly inside.
pub(crate) fn multi_point_in_polygon(multi_point: &MultiPointGeometry, polygon: &PolygonGeometry) -> bool {
	let Some(ring) = polygon.exterior() else {
		return false;
	};

	let mut found_interior = false;
	for coord in multi_point.coords() {
		if !point_in_ring(coord, ring, false) {
			return false;
		}
		if !found_interior {
			found_interior = point_in_ring(coord, ring, true);
		}
	}
	found_interior
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	// ── multi point in multi point ──

	#[rstest]
	#[case(&[[1.0, 1.0]], true)]
	#[case(&[[1.0, 1.0], [2.0, 2.0]], true)]
	#[case(&[[2.0, 2.0], [2.0, 2.0], [1.0, 1.0]], true)]
	#[case(&[[1.0, 1.0], [4.0, 4.0]], false)]
	#[case(&[], false)]
	fn in_multi_point(#[case] points: &[[f64; 2]], #[case] expected: bool) {
		let other = MultiPointGeometry::from(&[[1, 1], [2, 2], [3, 3]]);
		assert_eq!(multi_point_in_multi_point(&MultiPointGeometry::from(points), &other), expected);
	}

	#[test]
	fn multi_point_containment_is_directional() {
		let small = MultiPointGeometry::from(&[[1, 1]]);
		let large = MultiPointGeometry::from(&[[1, 1], [2, 2]]);
		assert!(multi_point_in_multi_point(&small, &large));
		assert!(!multi_point_in_multi_point(&large, &small));
	}

	// ── multi point on line string ──

	#[rstest]
	#[case(&[[0.0, 0.0], [1.0, 1.0]], true)]
	#[case(&[[0.5, 0.5]], true)]
	#[case(&[[3.0, 1.0], [2.0, 1.0]], true)]
	// only end vertices: no interior witness
	#[case(&[[0.0, 0.0], [3.0, 1.0]], false)]
	#[case(&[[0.0, 0.0]], false)]
	// one point off the line
	#[case(&[[0.5, 0.5], [0.5, 0.6]], false)]
	#[case(&[], false)]
	fn on_line_string(#[case] points: &[[f64; 2]], #[case] expected: bool) {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1], [3, 1]]);
		assert_eq!(multi_point_on_line_string(&MultiPointGeometry::from(points), &line), expected);
	}

	// ── multi point in polygon ──

	#[rstest]
	#[case(&[[5.0, 5.0]], true)]
	#[case(&[[0.0, 0.0], [5.0, 5.0]], true)]
	#[case(&[[0.0, 5.0], [10.0, 5.0], [1.0, 1.0]], true)]
	// only boundary points
	#[case(&[[0.0, 0.0], [10.0, 5.0]], false)]
	// second point outside, checked with its own index
	#[case(&[[5.0, 5.0], [20.0, 5.0]], false)]
	#[case(&[[5.0, 5.0], [6.0, 6.0], [-1.0, 5.0]], false)]
	#[case(&[], false)]
	fn in_polygon(#[case] points: &[[f64; 2]], #[case] expected: bool) {
		let polygon = PolygonGeometry::from(&[[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]);
		assert_eq!(multi_point_in_polygon(&MultiPointGeometry::from(points), &polygon), expected);
	}

	#[test]
	fn polygon_without_rings() {
		let points = MultiPointGeometry::from(&[[0, 0]]);
		assert!(!multi_point_in_polygon(&points, &PolygonGeometry(vec![])));
	}
}

use crate::{Coordinates, LineStringGeometry};

/// Which ends of a segment count as part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentEnds {
	Include,
	ExcludeStart,
	ExcludeEnd,
	ExcludeBoth,
}

impl SegmentEnds {
	fn excludes(self) -> (bool, bool) {
		match self {
			SegmentEnds::Include => (false, false),
			SegmentEnds::ExcludeStart => (true, false),
			SegmentEnds::ExcludeEnd => (false, true),
			SegmentEnds::ExcludeBoth => (true, true),
		}
	}
}

/// Whether `point` lies on the segment from `start` to `end`.
///
/// The point must be exactly collinear (zero cross product). Its position is then
/// compared along the axis on which the segment extends furthest, honouring `ends`.
/// A zero-length segment only contains its own coordinate, and only when its ends
/// are included.
pub fn point_on_segment(start: &Coordinates, end: &Coordinates, point: &Coordinates, ends: SegmentEnds) -> bool {
	let dx_line = end.x() - start.x();
	let dy_line = end.y() - start.y();

	if dx_line == 0.0 && dy_line == 0.0 {
		return ends == SegmentEnds::Include && point == start;
	}

	let dx_point = point.x() - start.x();
	let dy_point = point.y() - start.y();
	if dx_point * dy_line - dy_point * dx_line != 0.0 {
		return false;
	}

	let (p, a, b) = if dx_line.abs() >= dy_line.abs() {
		(point.x(), start.x(), end.x())
	} else {
		(point.y(), start.y(), end.y())
	};
	// mirror descending segments so `a` is always the lower end
	let (p, a, b) = if a < b { (p, a, b) } else { (-p, -a, -b) };

	let (exclude_start, exclude_end) = ends.excludes();
	let after_start = if exclude_start { a < p } else { a <= p };
	let before_end = if exclude_end { p < b } else { p <= b };
	after_start && before_end
}

/// Whether `point` lies on any segment of `line`.
///
/// With `exclude_boundary` the first and last vertex of the line do not count,
/// vertices in between still do.
///
/// ```
/// use geowithin_geometry::{Coordinates, LineStringGeometry, math::point_on_line};
///
/// let line = LineStringGeometry::from(&[[1, 1], [1, 2], [1, 3], [1, 4]]);
/// assert!(point_on_line(&Coordinates::new(1.0, 2.0), &line, true));
/// assert!(point_on_line(&Coordinates::new(1.0, 1.0), &line, false));
/// assert!(!point_on_line(&Coordinates::new(1.0, 1.0), &line, true));
/// ```
pub fn point_on_line(point: &Coordinates, line: &LineStringGeometry, exclude_boundary: bool) -> bool {
	let last = line.0.len().saturating_sub(2);
	line.segments().enumerate().any(|(index, (start, end))| {
		let ends = if exclude_boundary {
			match (index == 0, index == last) {
				(true, true) => SegmentEnds::ExcludeBoth,
				(true, false) => SegmentEnds::ExcludeStart,
				(false, true) => SegmentEnds::ExcludeEnd,
				(false, false) => SegmentEnds::Include,
			}
		} else {
			SegmentEnds::Include
		};
		point_on_segment(start, end, point, ends)
	})
}

/// The point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Coordinates, b: &Coordinates) -> Coordinates {
	Coordinates::new((a.x() + b.x()) / 2.0, (a.y() + b.y()) / 2.0)
}

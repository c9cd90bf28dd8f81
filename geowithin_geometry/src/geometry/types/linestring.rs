use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, Location};
use crate::{GeoBBox, math::point_on_line};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line.
///
/// The order of the coordinates is significant: consecutive coordinates form the segments.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Iterates over the segments of the line as `(start, end)` pairs.
	pub fn segments(&self) -> impl Iterator<Item = (&Coordinates, &Coordinates)> {
		self.0.windows(2).map(|pair| (&pair[0], &pair[1]))
	}
}

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::from_coordinates(&self.0)
	}

	/// The first and last vertex form the boundary of a line, everything else on the line
	/// is interior.
	fn locate(&self, coord: &Coordinates) -> Location {
		if point_on_line(coord, self, true) {
			Location::Interior
		} else if point_on_line(coord, self, false) {
			Location::Boundary
		} else {
			Location::Exterior
		}
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString> for LineStringGeometry {
	fn from(geometry: geo::LineString) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn vertical() -> LineStringGeometry {
		LineStringGeometry::from(&[[1, 1], [1, 2], [1, 3], [1, 4]])
	}

	#[test]
	fn verify() {
		assert!(vertical().verify().is_ok());
		assert!(LineStringGeometry::from(&[[1, 1]]).verify().is_err());
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(vertical().compute_bounds().unwrap().as_array(), [1.0, 1.0, 1.0, 4.0]);
		assert!(LineStringGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn segments() {
		let line = vertical();
		let segments: Vec<_> = line.segments().collect();
		assert_eq!(segments.len(), 3);
		assert_eq!(segments[1], (&Coordinates::new(1.0, 2.0), &Coordinates::new(1.0, 3.0)));
	}

	#[rstest]
	#[case(1.0, 1.0, Location::Boundary)]
	#[case(1.0, 4.0, Location::Boundary)]
	#[case(1.0, 2.0, Location::Interior)]
	#[case(1.0, 2.5, Location::Interior)]
	#[case(1.0, 4.5, Location::Exterior)]
	#[case(2.0, 2.0, Location::Exterior)]
	fn locate(#[case] x: f64, #[case] y: f64, #[case] expected: Location) {
		assert_eq!(vertical().locate(&Coordinates::new(x, y)), expected);
	}

	#[test]
	fn composite_push_and_last() {
		let mut line = LineStringGeometry::new();
		line.push(Coordinates::new(0.0, 0.0));
		line.push(Coordinates::new(1.0, 1.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line.last(), Some(&Coordinates::new(1.0, 1.0)));
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
		assert_eq!(LineStringGeometry::from(ls), LineStringGeometry::from(vec![(0.0, 0.0), (1.0, 1.0)]));
	}
}

use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, Location, PolygonGeometry};
use crate::GeoBBox;
use anyhow::Result;
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::merge_all(self.0.iter().map(PolygonGeometry::compute_bounds))
	}

	fn locate(&self, coord: &Coordinates) -> Location {
		let mut location = Location::Exterior;
		for polygon in &self.0 {
			match polygon.locate(coord) {
				Location::Interior => return Location::Interior,
				Location::Boundary => location = Location::Boundary,
				Location::Exterior => {}
			}
		}
		location
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_squares() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&[
			[[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]],
			[[[5, 5], [7, 5], [7, 7], [5, 7], [5, 5]]],
		])
	}

	#[test]
	fn locate() {
		let mp = two_squares();
		assert_eq!(mp.locate(&Coordinates::new(1.0, 1.0)), Location::Interior);
		assert_eq!(mp.locate(&Coordinates::new(6.0, 6.0)), Location::Interior);
		assert_eq!(mp.locate(&Coordinates::new(7.0, 6.0)), Location::Boundary);
		assert_eq!(mp.locate(&Coordinates::new(3.0, 3.0)), Location::Exterior);
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(two_squares().compute_bounds().unwrap().as_array(), [0.0, 0.0, 7.0, 7.0]);
		assert!(MultiPolygonGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn verify() {
		assert!(two_squares().verify().is_ok());
	}
}

use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, LineStringGeometry, Location};
use crate::GeoBBox;
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::merge_all(self.0.iter().map(LineStringGeometry::compute_bounds))
	}

	/// Interior of any part wins over the boundary of another part.
	fn locate(&self, coord: &Coordinates) -> Location {
		let mut location = Location::Exterior;
		for line in &self.0 {
			match line.locate(coord) {
				Location::Interior => return Location::Interior,
				Location::Boundary => location = Location::Boundary,
				Location::Exterior => {}
			}
		}
		location
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn locate_across_parts() {
		let mls = MultiLineStringGeometry::from(&[[[0, 0], [2, 0]], [[2, 0], [2, 2]]]);
		assert_eq!(mls.locate(&Coordinates::new(1.0, 0.0)), Location::Interior);
		assert_eq!(mls.locate(&Coordinates::new(2.0, 0.0)), Location::Boundary);
		assert_eq!(mls.locate(&Coordinates::new(3.0, 0.0)), Location::Exterior);
	}

	#[test]
	fn compute_bounds_and_verify() {
		let mls = MultiLineStringGeometry::from(&[[[0, 0], [2, 1]], [[-1, 3], [0, 5]]]);
		assert_eq!(mls.compute_bounds().unwrap().as_array(), [-1.0, 0.0, 2.0, 5.0]);
		assert!(mls.verify().is_ok());
		assert!(MultiLineStringGeometry::from(&[[[0, 0]]]).verify().is_err());
	}
}

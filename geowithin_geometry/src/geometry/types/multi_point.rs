use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, Location, PointGeometry};
use crate::GeoBBox;
use anyhow::Result;
use std::fmt::Debug;

/// Represents a collection of points. The order of the points carries no meaning.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl MultiPointGeometry {
	/// Iterates over the coordinates of all points.
	pub fn coords(&self) -> impl Iterator<Item = &Coordinates> {
		self.0.iter().map(PointGeometry::as_coord)
	}
}

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		for point in &self.0 {
			point.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::from_coordinates(self.coords())
	}

	/// Any point with exactly this coordinate makes it interior.
	fn locate(&self, coord: &Coordinates) -> Location {
		if self.coords().any(|c| c == coord) {
			Location::Interior
		} else {
			Location::Exterior
		}
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> MultiPointGeometry {
		MultiPointGeometry::from(&[[1, 2], [3, 4], [5, 6]])
	}

	#[test]
	fn verify_ok() {
		assert!(sample().verify().is_ok());
		assert!(MultiPointGeometry::new().verify().is_ok());
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(sample().compute_bounds().unwrap().as_array(), [1.0, 2.0, 5.0, 6.0]);
		assert!(MultiPointGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn locate() {
		assert_eq!(sample().locate(&Coordinates::new(3.0, 4.0)), Location::Interior);
		assert_eq!(sample().locate(&Coordinates::new(3.0, 5.0)), Location::Exterior);
	}

	#[test]
	fn coords() {
		let xs: Vec<f64> = sample().coords().map(Coordinates::x).collect();
		assert_eq!(xs, [1.0, 3.0, 5.0]);
	}

	#[test]
	fn composite_push() {
		let mut mp = MultiPointGeometry::new();
		mp.push(PointGeometry::from(&[1, 2]));
		assert_eq!(mp.len(), 1);
		assert_eq!(mp.first(), Some(&PointGeometry::from([1.0, 2.0])));
	}

	#[test]
	fn from_geo_multi_point() {
		let mp = geo::MultiPoint::from(vec![(0.0, 1.0), (2.0, 3.0)]);
		assert_eq!(MultiPointGeometry::from(mp), MultiPointGeometry::from(vec![(0.0, 1.0), (2.0, 3.0)]));
	}
}

use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, Location};
use crate::{GeoBBox, math::locate_in_ring};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a closed ring geometry, which is a connected series of coordinates forming a loop.
/// This structure is the building block for polygons.
/// The first and last points must be identical to form a closed shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 coordinates (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last points are identical.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::from_coordinates(&self.0)
	}

	fn locate(&self, coord: &Coordinates) -> Location {
		locate_in_ring(coord, self)
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

/// Converts a `geo::LineString` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString> for RingGeometry {
	fn from(geometry: geo::LineString) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

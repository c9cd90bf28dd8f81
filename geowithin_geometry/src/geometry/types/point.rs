use super::{Coordinates, GeometryTrait, Location};
use crate::GeoBBox;
use std::fmt::Debug;

/// Represents a single point defined by x and y coordinates.
///
/// This is the simplest geometric type and the building block of `MultiPointGeometry`.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// A point is always valid.
	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		Some(GeoBBox::from_coord(&self.0))
	}

	/// A point has no boundary, so an identical coordinate is its interior.
	fn locate(&self, coord: &Coordinates) -> Location {
		if &self.0 == coord {
			Location::Interior
		} else {
			Location::Exterior
		}
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from anything convertible into `Coordinates`,
	/// such as arrays, tuples or `geo::Point`.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

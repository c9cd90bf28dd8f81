use super::Coordinates;
use crate::GeoBBox;
use anyhow::Result;
use std::fmt::Debug;

/// Where a coordinate lies relative to a geometry.
///
/// For lines the boundary consists of the first and last vertex, for polygons it is
/// every ring edge. Points and multi-points have no boundary: a matching coordinate
/// is `Interior`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
	Interior,
	Boundary,
	Exterior,
}

impl Location {
	/// Whether the location counts as "inside".
	///
	/// With `exclude_boundary` only `Interior` qualifies, otherwise `Boundary` does too.
	pub fn is_inside(self, exclude_boundary: bool) -> bool {
		match self {
			Location::Interior => true,
			Location::Boundary => !exclude_boundary,
			Location::Exterior => false,
		}
	}
}

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry.
	/// For example, checks if there are enough points or if polygons are properly closed.
	/// Returns an error if the geometry is invalid.
	fn verify(&self) -> Result<()>;

	/// Compute the bounding box of this geometry.
	///
	/// Returns `None` if the geometry has no coordinates.
	fn compute_bounds(&self) -> Option<GeoBBox>;

	/// Locates a coordinate relative to this geometry's interior, boundary and exterior.
	///
	/// This is the plain topological answer for the whole geometry. A polygon's holes
	/// count here, while `geowithin::within` only consults the outer ring
	/// (`PolygonGeometry::exterior().locate(..)`).
	fn locate(&self, coord: &Coordinates) -> Location;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a linestring is made of coordinates.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

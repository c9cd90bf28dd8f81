use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, Location, RingGeometry};
use crate::{GeoBBox, math::locate_in_polygon};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A polygon: the first ring is the outer boundary, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// The outer ring, if the polygon has any rings at all.
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// The holes, i.e. every ring after the first.
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		GeoBBox::merge_all(self.0.iter().map(RingGeometry::compute_bounds))
	}

	/// Holes are honoured: a coordinate inside a hole is `Exterior`, one on a hole's
	/// edge is `Boundary`.
	fn locate(&self, coord: &Coordinates) -> Location {
		locate_in_polygon(coord, self)
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon> for PolygonGeometry {
	fn from(geometry: geo::Polygon) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

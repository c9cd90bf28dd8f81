use super::Geometry;
use std::collections::BTreeMap;

/// A geometry wrapped with an optional id and string properties, like a GeoJSON
/// `Feature`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<String>,
	pub geometry: Geometry,
	pub properties: BTreeMap<String, String>,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: BTreeMap::new(),
		}
	}

	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.properties.insert(key.into(), value.into());
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		GeoFeature::new(geometry)
	}
}

/// Anything a predicate can take as an argument: a bare geometry or a feature
/// wrapping one.
pub trait GeometryInput {
	/// The geometry to evaluate.
	fn geometry(&self) -> &Geometry;
}

impl GeometryInput for Geometry {
	fn geometry(&self) -> &Geometry {
		self
	}
}

impl GeometryInput for GeoFeature {
	fn geometry(&self) -> &Geometry {
		&self.geometry
	}
}

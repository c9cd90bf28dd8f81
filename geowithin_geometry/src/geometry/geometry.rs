use super::*;
use crate::GeoBBox;
use anyhow::{Result, bail};
use std::fmt::{Debug, Display};

/// The kind of a [`Geometry`], displayed with its GeoJSON type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	Polygon,
	MultiLineString,
	MultiPolygon,
}

impl GeometryType {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
		}
	}

	#[cfg(any(test, feature = "test"))]
	pub fn new_example() -> Self {
		Self::new_polygon(vec![
			vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
			vec![[4.0, 4.0], [4.0, 6.0], [6.0, 6.0], [6.0, 4.0], [4.0, 4.0]],
		])
	}
}

/// Bounding box of any geometry; `None` if it has no coordinates.
pub fn bounding_box(geometry: &Geometry) -> Option<GeoBBox> {
	geometry.compute_bounds()
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}

	fn locate(&self, coord: &Coordinates) -> Location {
		match self {
			Geometry::Point(g) => g.locate(coord),
			Geometry::LineString(g) => g.locate(coord),
			Geometry::Polygon(g) => g.locate(coord),
			Geometry::MultiPoint(g) => g.locate(coord),
			Geometry::MultiLineString(g) => g.locate(coord),
			Geometry::MultiPolygon(g) => g.locate(coord),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.geometry_type().as_str()).field(inner).finish()
	}
}

/// Converts a `geo` geometry. `Line`, `Rect` and `Triangle` become a line string or
/// polygon; geometry collections have no counterpart and are rejected.
impl TryFrom<geo::Geometry> for Geometry {
	type Error = anyhow::Error;

	fn try_from(geometry: geo::Geometry) -> Result<Self> {
		Ok(match geometry {
			geo::Geometry::Point(g) => Geometry::Point(g.into()),
			geo::Geometry::Line(g) => Geometry::LineString(geo::LineString::from(vec![g.start, g.end]).into()),
			geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
			geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
			geo::Geometry::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
			geo::Geometry::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
			geo::Geometry::GeometryCollection(_) => bail!("geometry collections can not be converted"),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point([1.0, 2.0]), "Point")]
	#[case(Geometry::new_multi_point(&[[1, 2]]), "MultiPoint")]
	#[case(Geometry::new_line_string(&[[1, 2], [3, 4]]), "LineString")]
	#[case(Geometry::new_example(), "Polygon")]
	#[case(Geometry::new_multi_line_string(&[[[1, 2], [3, 4]]]), "MultiLineString")]
	#[case(Geometry::new_multi_polygon(&[[[[0, 0], [1, 0], [1, 1], [0, 0]]]]), "MultiPolygon")]
	fn geometry_type_names(#[case] geometry: Geometry, #[case] name: &str) {
		assert_eq!(geometry.geometry_type().to_string(), name);
		assert!(format!("{geometry:?}").starts_with(name));
	}

	#[test]
	fn bounding_box_covers_all_rings() {
		let bbox = bounding_box(&Geometry::new_example()).unwrap();
		assert_eq!(bbox.as_array(), [0.0, 0.0, 10.0, 10.0]);
		assert!(bounding_box(&Geometry::new_multi_point(Vec::<[f64; 2]>::new())).is_none());
	}

	#[test]
	fn locate_delegates() {
		let geometry = Geometry::new_example();
		assert_eq!(geometry.locate(&Coordinates::new(1.0, 1.0)), Location::Interior);
		assert_eq!(geometry.locate(&Coordinates::new(5.0, 5.0)), Location::Exterior);
		assert!(geometry.verify().is_ok());
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point([1.0, 2.0])), "Point([1.0, 2.0])");
	}

	#[test]
	fn try_from_geo() {
		let rect = geo::Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 2.0, y: 1.0 });
		let converted = Geometry::try_from(geo::Geometry::Rect(rect)).unwrap();
		assert_eq!(converted.geometry_type(), GeometryType::Polygon);
		assert_eq!(bounding_box(&converted).unwrap().as_array(), [0.0, 0.0, 2.0, 1.0]);

		let line = geo::Line::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 1.0, y: 1.0 });
		let converted = Geometry::try_from(geo::Geometry::Line(line)).unwrap();
		assert_eq!(converted, Geometry::new_line_string(&[[0, 0], [1, 1]]));

		let collection = geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![]));
		assert!(Geometry::try_from(collection).is_err());
	}
}

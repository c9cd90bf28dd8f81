use geowithin_geometry::GeometryType;
use std::fmt::{Display, Formatter};

/// Which argument of a binary predicate an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	First,
	Second,
}

impl Display for Side {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Side::First => "first",
			Side::Second => "second",
		})
	}
}

/// Raised when a geometry type, or a combination of two types, has no predicate.
///
/// Returned inside an `anyhow::Error`; use `downcast_ref` to inspect it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedGeometryError {
	/// The argument that caused the failure.
	pub side: Side,
	/// The offending type.
	pub geometry_type: GeometryType,
	/// For a rejected second argument: the type of the first argument.
	pub first_type: Option<GeometryType>,
}

impl UnsupportedGeometryError {
	/// The first argument's type is never supported as the contained geometry.
	pub fn first(geometry_type: GeometryType) -> Self {
		Self {
			side: Side::First,
			geometry_type,
			first_type: None,
		}
	}

	/// The second argument's type can not contain a geometry of `first_type`.
	pub fn second(geometry_type: GeometryType, first_type: GeometryType) -> Self {
		Self {
			side: Side::Second,
			geometry_type,
			first_type: Some(first_type),
		}
	}
}

impl Display for UnsupportedGeometryError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} geometry type '{}' is not supported", self.side, self.geometry_type)?;
		if let Some(first_type) = self.first_type {
			write!(f, " for a first geometry of type '{first_type}'")?;
		}
		Ok(())
	}
}

impl std::error::Error for UnsupportedGeometryError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_first() {
		let err = UnsupportedGeometryError::first(GeometryType::MultiPolygon);
		assert_eq!(err.to_string(), "first geometry type 'MultiPolygon' is not supported");
	}

	#[test]
	fn display_second() {
		let err = UnsupportedGeometryError::second(GeometryType::Point, GeometryType::LineString);
		assert_eq!(
			err.to_string(),
			"second geometry type 'Point' is not supported for a first geometry of type 'LineString'"
		);
	}

	#[test]
	fn survives_anyhow() {
		let err = anyhow::Error::from(UnsupportedGeometryError::first(GeometryType::MultiLineString));
		let inner = err.downcast_ref::<UnsupportedGeometryError>().unwrap();
		assert_eq!(inner.side, Side::First);
		assert_eq!(inner.geometry_type, GeometryType::MultiLineString);
	}
}

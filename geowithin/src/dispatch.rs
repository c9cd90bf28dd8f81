use crate::{UnsupportedGeometryError, predicates::*};
use anyhow::Result;
use geowithin_geometry::{Geometry, GeometryInput};
use log::trace;

/// Tests whether the first geometry lies within the second one.
///
/// Both arguments can be a [`Geometry`] or a [`GeoFeature`](crate::GeoFeature).
/// Unsupported type combinations fail with an [`UnsupportedGeometryError`] naming the
/// offending argument and its type.
///
/// ```
/// use geowithin::{Geometry, UnsupportedGeometryError, within};
///
/// let square = Geometry::new_polygon(&[[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]);
/// assert!(within(&square, &square)?);
///
/// let err = within(&square, &Geometry::new_point([1.0, 1.0])).unwrap_err();
/// assert!(err.downcast_ref::<UnsupportedGeometryError>().is_some());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn within<A, B>(first: &A, second: &B) -> Result<bool>
where
	A: GeometryInput + ?Sized,
	B: GeometryInput + ?Sized,
{
	use Geometry::*;

	let (a, b) = (first.geometry(), second.geometry());
	trace!("within: {} in {}", a.geometry_type(), b.geometry_type());

	Ok(match (a, b) {
		(Point(point), MultiPoint(multi_point)) => point_in_multi_point(point, multi_point),
		(Point(point), LineString(line)) => point_on_line_string(point, line),
		(Point(point), Polygon(polygon)) => point_in_polygon_interior(point, polygon),

		(MultiPoint(multi_point), MultiPoint(other)) => multi_point_in_multi_point(multi_point, other),
		(MultiPoint(multi_point), LineString(line)) => multi_point_on_line_string(multi_point, line),
		(MultiPoint(multi_point), Polygon(polygon)) => multi_point_in_polygon(multi_point, polygon),

		(LineString(line), LineString(other)) => line_string_on_line_string(line, other),
		(LineString(line), Polygon(polygon)) => line_string_in_polygon(line, polygon),

		(Polygon(polygon), Polygon(other)) => polygon_in_polygon(polygon, other),

		(MultiLineString(_) | MultiPolygon(_), _) => {
			return Err(UnsupportedGeometryError::first(a.geometry_type()).into());
		}
		(Point(_) | MultiPoint(_) | LineString(_) | Polygon(_), _) => {
			return Err(UnsupportedGeometryError::second(b.geometry_type(), a.geometry_type()).into());
		}
	})
}

/// Method form of [`within`], available on geometries and features.
pub trait Within: GeometryInput {
	/// Same as `within(self, other)`.
	fn is_within<B: GeometryInput + ?Sized>(&self, other: &B) -> Result<bool> {
		within(self, other)
	}
}

impl<T: GeometryInput + ?Sized> Within for T {}

use crate::Coordinates;
use std::fmt::Debug;

/// An axis-aligned bounding box (`GeoBBox`) defined by its minimum and maximum
/// x and y coordinates.
///
/// Bounding boxes are only used to reject impossible containment cheaply, they
/// never decide a predicate on their own.
///
/// # Examples
///
/// ```
/// use geowithin_geometry::GeoBBox;
///
/// let mut bbox1 = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
/// let bbox2 = GeoBBox::new(-12.0, -3.0, 8.0, 6.0);
/// bbox1.extend(&bbox2);
/// assert_eq!(bbox1.as_array(), [-12.0, -5.0, 10.0, 6.0]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `x_min, y_min, x_max, y_max`.
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GeoBBox {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// A degenerate box covering exactly one coordinate.
	#[must_use]
	pub fn from_coord(coord: &Coordinates) -> GeoBBox {
		GeoBBox::new(coord.x(), coord.y(), coord.x(), coord.y())
	}

	/// The smallest box covering all given coordinates, or `None` if there are none.
	///
	/// ```
	/// use geowithin_geometry::{Coordinates, GeoBBox};
	///
	/// let coords = [Coordinates::new(1.0, 5.0), Coordinates::new(3.0, -2.0)];
	/// let bbox = GeoBBox::from_coordinates(&coords).unwrap();
	/// assert_eq!(bbox.as_array(), [1.0, -2.0, 3.0, 5.0]);
	/// assert!(GeoBBox::from_coordinates(&[]).is_none());
	/// ```
	pub fn from_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<GeoBBox> {
		let mut iter = coords.into_iter();
		let mut bbox = GeoBBox::from_coord(iter.next()?);
		for coord in iter {
			bbox.x_min = bbox.x_min.min(coord.x());
			bbox.y_min = bbox.y_min.min(coord.y());
			bbox.x_max = bbox.x_max.max(coord.x());
			bbox.y_max = bbox.y_max.max(coord.y());
		}
		Some(bbox)
	}

	/// Expands the current bounding box in place so that it includes the area
	/// covered by `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &GeoBBox) -> GeoBBox {
		self.extend(other);
		self
	}

	/// Merges a sequence of optional boxes, skipping `None`s.
	pub fn merge_all(boxes: impl IntoIterator<Item = Option<GeoBBox>>) -> Option<GeoBBox> {
		boxes.into_iter().flatten().reduce(|a, b| a.extended(&b))
	}

	/// Returns the bounding box as `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Whether `other` fits inside `self`, edges included.
	///
	/// Returns `false` as soon as `self` starts after `other` or ends before it on
	/// either axis.
	///
	/// ```
	/// use geowithin_geometry::GeoBBox;
	///
	/// let outer = GeoBBox::new(0.0, 0.0, 10.0, 10.0);
	/// assert!(outer.contains_bbox(&GeoBBox::new(0.0, 2.0, 10.0, 3.0)));
	/// assert!(!outer.contains_bbox(&GeoBBox::new(-1.0, 2.0, 5.0, 3.0)));
	/// assert!(!GeoBBox::new(2.0, 2.0, 3.0, 3.0).contains_bbox(&outer));
	/// ```
	#[must_use]
	pub fn contains_bbox(&self, other: &GeoBBox) -> bool {
		if self.x_min > other.x_min || self.y_min > other.y_min {
			return false;
		}
		if self.x_max < other.x_max || self.y_max < other.y_max {
			return false;
		}
		true
	}

	/// Whether the coordinate lies inside the box, edges included.
	#[must_use]
	pub fn contains_coord(&self, coord: &Coordinates) -> bool {
		self.x_min <= coord.x() && coord.x() <= self.x_max && self.y_min <= coord.y() && coord.y() <= self.y_max
	}
}

/// Asymmetric bounding box pruning test: `true` when `inner` fits inside `outer`.
///
/// Call sites pass the box of the candidate container first and the box of the
/// geometry that should lie within it second.
#[must_use]
pub fn bbox_overlap(outer: &GeoBBox, inner: &GeoBBox) -> bool {
	outer.contains_bbox(inner)
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoBBox({}, {}, {}, {})", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

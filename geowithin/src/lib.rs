//! Directional "within" test for planar geometries.
//!
//! `within(a, b)` is true when every point of `a` lies in the interior or on the
//! boundary of `b`, and at least one point of `a` lies in `b`'s interior. The
//! arguments can be bare [`Geometry`] values or [`GeoFeature`]s wrapping one.
//!
//! ```
//! use geowithin::{Geometry, within};
//!
//! let point = Geometry::new_point([1.0, 2.0]);
//! let line = Geometry::new_line_string(&[[1, 1], [1, 2], [1, 3], [1, 4]]);
//! assert!(within(&point, &line)?);
//! assert!(!within(&Geometry::new_point([1.0, 1.0]), &line)?);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Supported `(first, second)` pairs:
//!
//! | first      | second                              |
//! |------------|-------------------------------------|
//! | Point      | MultiPoint, LineString, Polygon     |
//! | MultiPoint | MultiPoint, LineString, Polygon     |
//! | LineString | LineString, Polygon                 |
//! | Polygon    | Polygon                             |
//!
//! Every other pair fails with an [`UnsupportedGeometryError`].

mod dispatch;
mod error;
mod predicates;

pub use dispatch::*;
pub use error::*;
pub use geowithin_geometry::*;

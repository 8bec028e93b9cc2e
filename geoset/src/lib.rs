//! Geoset computes intersection, difference, symmetric difference and union of geometries in cartesian and
//! geographic coordinates.
//!
//! # Quick start
//!
//! ```
//! use geoset::{intersection, Geom, Geometry, Linestring, CartesianSpace2d};
//!
//! let a = Geometry::Cartesian(Geom::Linestring(Linestring::<CartesianSpace2d>::new([(0.0, 0.0), (2.0, 0.0)])));
//! let b = Geometry::Cartesian(Geom::Linestring(Linestring::<CartesianSpace2d>::new([(1.0, 0.0), (3.0, 0.0)])));
//!
//! let result = intersection(None, &a, &b, "st_intersection").expect("valid geometries");
//! assert_eq!(
//!     result,
//!     Geometry::Cartesian(Geom::Linestring(Linestring::new([(1.0, 0.0), (2.0, 0.0)])))
//! );
//! ```
//!
//! # Structure
//!
//! * [`intersection`], [`difference`], [`symdifference`] and [`union_`] are the entry points. They validate the
//!   arguments, convert every failure into a [`GisError`] and normalize empty results into an empty geometry
//!   collection.
//! * [`Intersection`], [`Difference`], [`Symdifference`] and [`Union`] are the operations themselves. They can be
//!   created once and evaluated many times, see [`SetOperation`].
//! * [`strategy`] contains the geometric primitives of the cartesian plane and of the ellipsoid surface.
//!
//! Geographic operations treat edges as great arcs on the auxiliary sphere of the ellipsoid given by the SRS.

pub mod error;
pub use error::{GisError, SetOpError};

pub mod strategy;

mod api;
pub use api::{difference, intersection, symdifference, union_};

mod operation;
pub use operation::{Difference, Intersection, SetOperation, Symdifference, Union};

mod normalize;
mod overlay;

pub use geoset_types;
pub use geoset_types::{
    CartesianSpace2d, Coord, CoordinateSpace, CoordinateSystem, Ellipsoid, GeoSpace2d, Geom, Geometry,
    GeometryCollection, GeometryType, Linestring, MultiLinestring, MultiPoint, MultiPolygon, Point,
    Polygon, Ring, Srs,
};

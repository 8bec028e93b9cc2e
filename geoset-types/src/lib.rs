//! Geometry value model used by the `geoset` set operations.
//!
//! Every geometry is a [`Geom`] parametrized by the coordinate space it lives in
//! ([`CartesianSpace2d`] or [`GeoSpace2d`]). The [`Geometry`] enum closes over both spaces, so a pair of
//! geometries can be dispatched with a plain `match` on their tags.
//!
//! Coordinates are stored as [`geo_types::Coord`]. For geographic geometries `x` is longitude and `y` is latitude,
//! both in degrees.

pub mod error;
pub use error::GeometryError;

mod space;
pub use space::{CartesianSpace2d, CoordinateSpace, CoordinateSystem, GeoSpace2d};

mod geometry_type;
pub use geometry_type::GeometryType;

mod point;
pub use point::Point;

mod linestring;
pub use linestring::{Linestring, Ring};

mod polygon;
pub use polygon::Polygon;

mod multi_point;
pub use multi_point::MultiPoint;

mod multi_linestring;
pub use multi_linestring::MultiLinestring;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

mod collection;
pub use collection::GeometryCollection;

mod geometry;
pub use geometry::{Geom, Geometry};

mod ellipsoid;
pub use ellipsoid::Ellipsoid;

mod srs;
pub use srs::Srs;

pub mod validate;

mod conversion;

pub use geo_types::Coord;

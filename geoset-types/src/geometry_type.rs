use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryType {
    /// Single point.
    Point,
    /// Sequence of connected points.
    Linestring,
    /// Area bounded by an exterior ring with optional holes.
    Polygon,
    /// Set of points.
    Multipoint,
    /// Set of linestrings.
    Multilinestring,
    /// Set of polygons.
    Multipolygon,
    /// Heterogeneous set of geometries, possibly nested.
    Geometrycollection,
}

impl GeometryType {
    /// Topological dimension of the geometry kind. Collections report `None`, since their members can be of any
    /// dimension.
    pub fn dimension(&self) -> Option<u8> {
        match self {
            GeometryType::Point | GeometryType::Multipoint => Some(0),
            GeometryType::Linestring | GeometryType::Multilinestring => Some(1),
            GeometryType::Polygon | GeometryType::Multipolygon => Some(2),
            GeometryType::Geometrycollection => None,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "POINT",
            GeometryType::Linestring => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::Multipoint => "MULTIPOINT",
            GeometryType::Multilinestring => "MULTILINESTRING",
            GeometryType::Multipolygon => "MULTIPOLYGON",
            GeometryType::Geometrycollection => "GEOMETRYCOLLECTION",
        };

        write!(f, "{name}")
    }
}

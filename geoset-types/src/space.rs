use std::fmt::{Debug, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Geom, Geometry};

/// Interpretation of the coordinates of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateSystem {
    /// Flat euclidean plane.
    Cartesian,
    /// Longitude and latitude on the surface of an ellipsoid.
    Geographic,
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateSystem::Cartesian => write!(f, "cartesian"),
            CoordinateSystem::Geographic => write!(f, "geographic"),
        }
    }
}

/// Coordinate space marker. Geometries are parametrized by it, so geometries from different spaces cannot be mixed
/// in one operation.
///
/// The defined coordinate spaces are:
/// * [`CartesianSpace2d`]
/// * [`GeoSpace2d`]
pub trait CoordinateSpace:
    Debug + Copy + Clone + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Coordinate system that the space represents.
    const SYSTEM: CoordinateSystem;

    /// Wraps a geometry of this space into the space-erased [`Geometry`] enum.
    fn into_geometry(geom: Geom<Self>) -> Geometry;
}

/// Geographic coordinate space marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoSpace2d;

/// 2d cartesian coordinate space marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianSpace2d;

impl CoordinateSpace for CartesianSpace2d {
    const SYSTEM: CoordinateSystem = CoordinateSystem::Cartesian;

    fn into_geometry(geom: Geom<Self>) -> Geometry {
        Geometry::Cartesian(geom)
    }
}

impl CoordinateSpace for GeoSpace2d {
    const SYSTEM: CoordinateSystem = CoordinateSystem::Geographic;

    fn into_geometry(geom: Geom<Self>) -> Geometry {
        Geometry::Geographic(geom)
    }
}

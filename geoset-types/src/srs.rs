#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CoordinateSystem, Ellipsoid};

/// Spatial reference system of the operation arguments.
///
/// Only the properties needed by set operations are described: the identifier, whether the system is cartesian or
/// geographic, and the reference ellipsoid of geographic systems.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Srs {
    id: u32,
    kind: SrsKind,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum SrsKind {
    Cartesian,
    Geographic(Ellipsoid),
}

impl Srs {
    /// SRID of the unit-less cartesian plane, used when no SRS is given.
    pub const UNDEFINED_ID: u32 = 0;

    /// Creates a cartesian (projected) spatial reference system.
    pub const fn cartesian(id: u32) -> Self {
        Self {
            id,
            kind: SrsKind::Cartesian,
        }
    }

    /// Creates a geographic spatial reference system on the given ellipsoid.
    pub const fn geographic(id: u32, ellipsoid: Ellipsoid) -> Self {
        Self {
            id,
            kind: SrsKind::Geographic(ellipsoid),
        }
    }

    /// EPSG:4326, geographic coordinates on the WGS 84 ellipsoid.
    pub const fn wgs84() -> Self {
        Self::geographic(4326, Ellipsoid::WGS84)
    }

    /// Identifier of the system.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns true if the system is cartesian.
    pub fn is_cartesian(&self) -> bool {
        matches!(self.kind, SrsKind::Cartesian)
    }

    /// Returns true if the system is geographic.
    pub fn is_geographic(&self) -> bool {
        matches!(self.kind, SrsKind::Geographic(_))
    }

    /// Coordinate system of the geometries in this reference system.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self.kind {
            SrsKind::Cartesian => CoordinateSystem::Cartesian,
            SrsKind::Geographic(_) => CoordinateSystem::Geographic,
        }
    }

    /// Reference ellipsoid of a geographic system.
    pub fn ellipsoid(&self) -> Option<&Ellipsoid> {
        match &self.kind {
            SrsKind::Cartesian => None,
            SrsKind::Geographic(ellipsoid) => Some(ellipsoid),
        }
    }

    /// Semi-major axis of the ellipsoid. `0.0` for cartesian systems.
    pub fn semi_major_axis(&self) -> f64 {
        self.ellipsoid().map_or(0.0, Ellipsoid::semimajor)
    }

    /// Semi-minor axis of the ellipsoid. `0.0` for cartesian systems.
    pub fn semi_minor_axis(&self) -> f64 {
        self.ellipsoid().map_or(0.0, Ellipsoid::semiminor)
    }
}

impl Default for Srs {
    fn default() -> Self {
        Self::cartesian(Self::UNDEFINED_ID)
    }
}

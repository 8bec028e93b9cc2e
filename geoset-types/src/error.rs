//! Error type used by the crate.

use thiserror::Error;

use crate::GeometryType;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// One of the coordinates is NaN or infinite.
    #[error("coordinate ({x}, {y}) is not a finite number")]
    NonFiniteCoordinate {
        /// X coordinate (longitude).
        x: f64,
        /// Y coordinate (latitude).
        y: f64,
    },
    /// Longitude of a geographic coordinate is outside of [-180, 180].
    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Latitude of a geographic coordinate is outside of [-90, 90].
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// A linestring or a ring has too few points to be a valid geometry.
    #[error("{kind} must have at least {required} points, got {found}")]
    TooFewPoints {
        /// Type of the geometry the points belong to.
        kind: GeometryType,
        /// Minimal number of points.
        required: usize,
        /// Actual number of points.
        found: usize,
    },
    /// Ellipsoid axes do not describe an oblate ellipsoid or a sphere.
    #[error("invalid ellipsoid axes: semi-major {semi_major}, semi-minor {semi_minor}")]
    InvalidEllipsoid {
        /// Semi-major axis.
        semi_major: f64,
        /// Semi-minor axis.
        semi_minor: f64,
    },
}

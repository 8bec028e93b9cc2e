#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeometryError;

/// Reference ellipsoid of a geographic coordinate system.
///
/// Inverse flattening of `0.0` describes a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    semimajor: f64,
    inv_flattening: f64,
}

impl Ellipsoid {
    /// WGS 84 ellipsoid.
    pub const WGS84: Self = Ellipsoid {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// GRS 1980 ellipsoid.
    pub const GRS80: Self = Ellipsoid {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257222101,
    };

    /// Creates an ellipsoid from its semi-major and semi-minor axes.
    ///
    /// Both axes must be positive and finite, and the semi-minor axis must not exceed the semi-major one.
    pub fn from_axes(semi_major: f64, semi_minor: f64) -> Result<Self, GeometryError> {
        if !semi_major.is_finite()
            || !semi_minor.is_finite()
            || semi_major <= 0.0
            || semi_minor <= 0.0
            || semi_minor > semi_major
        {
            return Err(GeometryError::InvalidEllipsoid {
                semi_major,
                semi_minor,
            });
        }

        let inv_flattening = if semi_major == semi_minor {
            0.0
        } else {
            semi_major / (semi_major - semi_minor)
        };

        Ok(Self {
            semimajor: semi_major,
            inv_flattening,
        })
    }

    /// Semi-major axis in metres.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Semi-minor axis in metres.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - self.flattening())
    }

    /// Inverse flattening. `0.0` for a sphere.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `(a - b) / a`.
    pub fn flattening(&self) -> f64 {
        if self.inv_flattening == 0.0 {
            0.0
        } else {
            1.0 / self.inv_flattening
        }
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

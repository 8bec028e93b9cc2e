//! Error types used by the crate.

use geoset_types::{CoordinateSystem, GeometryError};
use thiserror::Error;

/// Failure of a set operation algorithm.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetOpError {
    /// One of the arguments is not a valid geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    /// The arguments are defined in different coordinate systems.
    #[error("coordinate system mismatch: {0} and {1}")]
    CoordinateSystemMismatch(CoordinateSystem, CoordinateSystem),
    /// Result rings could not be assembled.
    #[error("overlay failed: {0}")]
    Overlay(String),
    /// Unexpected failure inside the algorithms.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error reported by the public entry points. It carries the name of the function the caller reports the error for.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{func_name}: {source}")]
pub struct GisError {
    func_name: String,
    source: SetOpError,
}

impl GisError {
    /// Creates a new error for the given function.
    pub fn new(func_name: impl Into<String>, source: SetOpError) -> Self {
        Self {
            func_name: func_name.into(),
            source,
        }
    }

    /// Name of the function the error is reported for.
    pub fn func_name(&self) -> &str {
        &self.func_name
    }

    /// Underlying failure.
    pub fn kind(&self) -> &SetOpError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = GisError::new(
            "st_intersection",
            SetOpError::InvalidGeometry(GeometryError::LatitudeOutOfRange(91.0)),
        );
        assert_eq!(
            err.to_string(),
            "st_intersection: invalid geometry: latitude 91 is out of range [-90, 90]"
        );
        assert_eq!(err.func_name(), "st_intersection");
    }
}

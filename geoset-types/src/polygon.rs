#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Ring;

/// Polygon geometry. Polygon consists of one exterior ring, and zero or more interior rings.
///
/// Interior rings represent *holes* in a polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<S> {
    exterior: Ring<S>,
    interiors: Vec<Ring<S>>,
}

impl<S> Polygon<S> {
    /// Creates a new polygon.
    pub fn new(exterior: Ring<S>, interiors: Vec<Ring<S>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior ring of the polygon.
    pub fn exterior(&self) -> &Ring<S> {
        &self.exterior
    }

    /// Interior rings (holes) of the polygon.
    pub fn interiors(&self) -> &[Ring<S>] {
        &self.interiors
    }

    /// Iterates over all rings of the polygon starting with the exterior one.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<S>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Returns true if the exterior ring of the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Consumes the polygon returning its rings.
    pub fn into_rings(self) -> (Ring<S>, Vec<Ring<S>>) {
        (self.exterior, self.interiors)
    }
}

impl<S> From<Ring<S>> for Polygon<S> {
    fn from(value: Ring<S>) -> Self {
        Self {
            exterior: value,
            interiors: vec![],
        }
    }
}

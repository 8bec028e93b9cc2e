#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Polygon;

/// Set of polygons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPolygon<S> {
    polygons: Vec<Polygon<S>>,
}

impl<S> MultiPolygon<S> {
    /// Creates a new multipolygon.
    pub fn new(polygons: Vec<Polygon<S>>) -> Self {
        Self { polygons }
    }

    /// Member polygons.
    pub fn polygons(&self) -> &[Polygon<S>] {
        &self.polygons
    }

    /// Returns true if all of the member polygons are empty.
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
    }

    /// Consumes the multipolygon returning its members.
    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        self.polygons
    }
}

impl<S> From<Vec<Polygon<S>>> for MultiPolygon<S> {
    fn from(value: Vec<Polygon<S>>) -> Self {
        Self::new(value)
    }
}

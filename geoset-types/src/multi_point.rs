use std::marker::PhantomData;

use geo_types::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// Set of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPoint<S> {
    coords: Vec<Coord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S> MultiPoint<S> {
    /// Creates a new multipoint.
    pub fn new(points: impl IntoIterator<Item = impl Into<Coord>>) -> Self {
        Self {
            coords: points.into_iter().map(Into::into).collect(),
            space: PhantomData,
        }
    }

    /// Coordinates of the points.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterates over the points.
    pub fn points(&self) -> impl Iterator<Item = Point<S>> + '_ {
        self.coords.iter().map(|c| Point::from_coord(*c))
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl<S> From<Vec<Point<S>>> for MultiPoint<S> {
    fn from(value: Vec<Point<S>>) -> Self {
        Self::new(value.into_iter().map(|p| p.coord()))
    }
}

impl<S> From<Vec<Coord>> for MultiPoint<S> {
    fn from(coords: Vec<Coord>) -> Self {
        Self {
            coords,
            space: PhantomData,
        }
    }
}

//! Linestrings and rings.
//!
//! A [`Linestring`] is an open sequence of points. It is considered closed when its first and last points are the
//! same.
//!
//! A [`Ring`] is always closed, but unlike OGC linear rings it does not duplicate the first point at the end. If the
//! points given to [`Ring::new`] repeat the first point at the end, the duplicate is dropped. The closing segment is
//! produced by [`Ring::iter_points_closing`] and [`Ring::segments`] instead.

use std::marker::PhantomData;

use geo_types::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// Sequence of connected points. See module level documentation for details.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linestring<S> {
    coords: Vec<Coord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S> Linestring<S> {
    /// Creates a new linestring from the given points.
    pub fn new(points: impl IntoIterator<Item = impl Into<Coord>>) -> Self {
        Self {
            coords: points.into_iter().map(Into::into).collect(),
            space: PhantomData,
        }
    }

    /// Coordinates of the linestring points.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterates over the points of the linestring.
    pub fn points(&self) -> impl Iterator<Item = Point<S>> + '_ {
        self.coords.iter().map(|c| Point::from_coord(*c))
    }

    /// Number of points in the linestring.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the linestring has no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns true if the first and the last points of the linestring are the same.
    pub fn is_closed(&self) -> bool {
        self.coords.len() > 1 && self.coords.first() == self.coords.last()
    }

    /// Iterates over the segments of the linestring.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.coords.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consumes the linestring returning its coordinates.
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

impl<S> AsRef<[Coord]> for Linestring<S> {
    fn as_ref(&self) -> &[Coord] {
        &self.coords
    }
}

impl<S> From<Vec<Coord>> for Linestring<S> {
    fn from(coords: Vec<Coord>) -> Self {
        Self {
            coords,
            space: PhantomData,
        }
    }
}

/// Closed sequence of points, a boundary of a polygon. See module level documentation for details.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring<S> {
    coords: Vec<Coord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S> Ring<S> {
    /// Creates a new ring. If the last point is the same as the first one, it is dropped.
    pub fn new(points: impl IntoIterator<Item = impl Into<Coord>>) -> Self {
        Self::from(points.into_iter().map(Into::into).collect::<Vec<Coord>>())
    }

    /// Coordinates of the ring, not including the closing point.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterates over the points of the ring, not including the closing point.
    pub fn points(&self) -> impl Iterator<Item = Point<S>> + '_ {
        self.coords.iter().map(|c| Point::from_coord(*c))
    }

    /// Same as [`Ring::coords`], but repeats the first point again at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter().chain(self.coords.first())
    }

    /// Iterates over the segments of the ring including the one between the last and the first points.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let count = if self.coords.len() > 1 {
            self.coords.len()
        } else {
            0
        };
        (0..count).map(move |i| (self.coords[i], self.coords[(i + 1) % count]))
    }

    /// Number of distinct points in the ring.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the same ring going in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.reverse();
        Self::from(coords)
    }

    /// Consumes the ring returning its coordinates (not including the closing point).
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

impl<S> AsRef<[Coord]> for Ring<S> {
    fn as_ref(&self) -> &[Coord] {
        &self.coords
    }
}

impl<S> From<Vec<Coord>> for Ring<S> {
    fn from(mut coords: Vec<Coord>) -> Self {
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }

        Self {
            coords,
            space: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CartesianSpace2d;

    type L = Linestring<CartesianSpace2d>;
    type R = Ring<CartesianSpace2d>;

    #[test]
    fn ring_drops_closing_point() {
        let ring = R::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(ring.len(), 3);

        let ring = R::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn iter_points_closing() {
        let ring = R::new([(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(ring.iter_points_closing().count(), 3);
        assert_eq!(
            *ring.iter_points_closing().last().expect("not empty"),
            Coord { x: 0.0, y: 0.0 }
        );
    }

    #[test]
    fn segments() {
        let line = L::new([(0.0, 0.0)]);
        assert_eq!(line.segments().count(), 0);

        let line = L::new([(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(line.segments().count(), 1);

        let ring = R::new([(0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
        assert_eq!(ring.segments().count(), 3);
        assert_eq!(
            ring.segments().last(),
            Some((Coord { x: 1.0, y: 0.0 }, Coord { x: 0.0, y: 0.0 }))
        );

        let ring = R::new([(0.0, 0.0)]);
        assert_eq!(ring.segments().count(), 0);
    }

    #[test]
    fn closed_linestring() {
        assert!(L::new([(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_closed());
        assert!(!L::new([(0.0, 0.0), (1.0, 0.0)]).is_closed());
        assert!(!L::new([(0.0, 0.0)]).is_closed());
    }
}

use std::marker::PhantomData;

use approx::AbsDiffEq;
use geo_types::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeoSpace2d;

/// A point in the coordinate space `S`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<S> {
    coord: Coord,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S> Point<S> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coord: Coord { x, y },
            space: PhantomData,
        }
    }

    /// Creates a point at the given coordinate.
    pub const fn from_coord(coord: Coord) -> Self {
        Self {
            coord,
            space: PhantomData,
        }
    }

    /// X coordinate of the point.
    pub fn x(&self) -> f64 {
        self.coord.x
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> f64 {
        self.coord.y
    }

    /// Coordinate of the point.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Reference to the coordinate of the point.
    pub fn as_coord(&self) -> &Coord {
        &self.coord
    }
}

impl Point<GeoSpace2d> {
    /// Creates a new geographic point from latitude and longitude values (in degrees).
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.coord.x
    }
}

impl<S> From<Coord> for Point<S> {
    fn from(value: Coord) -> Self {
        Self::from_coord(value)
    }
}

impl<S> From<(f64, f64)> for Point<S> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl<S: PartialEq> AbsDiffEq for Point<S> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coord.x.abs_diff_eq(&other.coord.x, epsilon)
            && self.coord.y.abs_diff_eq(&other.coord.y, epsilon)
    }
}

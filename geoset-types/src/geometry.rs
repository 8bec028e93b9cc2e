#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    CartesianSpace2d, CoordinateSpace, CoordinateSystem, GeoSpace2d, GeometryCollection,
    GeometryType, Linestring, MultiLinestring, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Geometry of any of the seven kinds in the coordinate space `S`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geom<S> {
    /// Point geometry.
    Point(Point<S>),
    /// Linestring geometry.
    Linestring(Linestring<S>),
    /// Polygon geometry.
    Polygon(Polygon<S>),
    /// Multipoint geometry.
    MultiPoint(MultiPoint<S>),
    /// Multilinestring geometry.
    MultiLinestring(MultiLinestring<S>),
    /// Multipolygon geometry.
    MultiPolygon(MultiPolygon<S>),
    /// Geometry collection.
    GeometryCollection(GeometryCollection<S>),
}

impl<S> Geom<S> {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geom::Point(_) => GeometryType::Point,
            Geom::Linestring(_) => GeometryType::Linestring,
            Geom::Polygon(_) => GeometryType::Polygon,
            Geom::MultiPoint(_) => GeometryType::Multipoint,
            Geom::MultiLinestring(_) => GeometryType::Multilinestring,
            Geom::MultiPolygon(_) => GeometryType::Multipolygon,
            Geom::GeometryCollection(_) => GeometryType::Geometrycollection,
        }
    }

    /// Returns true if the geometry does not contain any point.
    ///
    /// A point is never empty. Multi-geometries and collections are empty when all their members are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) => false,
            Geom::Linestring(v) => v.is_empty(),
            Geom::Polygon(v) => v.is_empty(),
            Geom::MultiPoint(v) => v.is_empty(),
            Geom::MultiLinestring(v) => v.is_empty(),
            Geom::MultiPolygon(v) => v.is_empty(),
            Geom::GeometryCollection(v) => v.is_empty(),
        }
    }

    /// Total number of points (vertices) in the geometry.
    pub fn num_points(&self) -> usize {
        match self {
            Geom::Point(_) => 1,
            Geom::Linestring(v) => v.len(),
            Geom::Polygon(v) => v.rings().map(|r| r.len()).sum(),
            Geom::MultiPoint(v) => v.len(),
            Geom::MultiLinestring(v) => v.lines().iter().map(Linestring::len).sum(),
            Geom::MultiPolygon(v) => v
                .polygons()
                .iter()
                .flat_map(Polygon::rings)
                .map(|r| r.len())
                .sum(),
            Geom::GeometryCollection(v) => v.members().iter().map(Geom::num_points).sum(),
        }
    }

    /// Creates an empty geometry collection.
    pub fn empty_collection() -> Self {
        Geom::GeometryCollection(GeometryCollection::empty())
    }
}

impl<S: CoordinateSpace> Geom<S> {
    /// Coordinate system of the geometry.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        S::SYSTEM
    }
}

impl<S> From<Point<S>> for Geom<S> {
    fn from(value: Point<S>) -> Self {
        Self::Point(value)
    }
}

impl<S> From<Linestring<S>> for Geom<S> {
    fn from(value: Linestring<S>) -> Self {
        Self::Linestring(value)
    }
}

impl<S> From<Polygon<S>> for Geom<S> {
    fn from(value: Polygon<S>) -> Self {
        Self::Polygon(value)
    }
}

impl<S> From<MultiPoint<S>> for Geom<S> {
    fn from(value: MultiPoint<S>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<S> From<MultiLinestring<S>> for Geom<S> {
    fn from(value: MultiLinestring<S>) -> Self {
        Self::MultiLinestring(value)
    }
}

impl<S> From<MultiPolygon<S>> for Geom<S> {
    fn from(value: MultiPolygon<S>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<S> From<GeometryCollection<S>> for Geom<S> {
    fn from(value: GeometryCollection<S>) -> Self {
        Self::GeometryCollection(value)
    }
}

/// A geometry in either of the supported coordinate systems.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// Geometry in 2d cartesian coordinates.
    Cartesian(Geom<CartesianSpace2d>),
    /// Geometry in geographic coordinates.
    Geographic(Geom<GeoSpace2d>),
}

impl Geometry {
    /// Coordinate system of the geometry.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Geometry::Cartesian(_) => CoordinateSystem::Cartesian,
            Geometry::Geographic(_) => CoordinateSystem::Geographic,
        }
    }

    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Cartesian(v) => v.geometry_type(),
            Geometry::Geographic(v) => v.geometry_type(),
        }
    }

    /// Returns true if the geometry does not contain any point. See [`Geom::is_empty`].
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Cartesian(v) => v.is_empty(),
            Geometry::Geographic(v) => v.is_empty(),
        }
    }

    /// Total number of points (vertices) in the geometry.
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Cartesian(v) => v.num_points(),
            Geometry::Geographic(v) => v.num_points(),
        }
    }

    /// Creates an empty geometry collection in the given coordinate system.
    pub fn empty_collection(coordinate_system: CoordinateSystem) -> Self {
        match coordinate_system {
            CoordinateSystem::Cartesian => Geometry::Cartesian(Geom::empty_collection()),
            CoordinateSystem::Geographic => Geometry::Geographic(Geom::empty_collection()),
        }
    }

    /// Returns the cartesian geometry, if the geometry is cartesian.
    pub fn as_cartesian(&self) -> Option<&Geom<CartesianSpace2d>> {
        match self {
            Geometry::Cartesian(v) => Some(v),
            Geometry::Geographic(_) => None,
        }
    }

    /// Returns the geographic geometry, if the geometry is geographic.
    pub fn as_geographic(&self) -> Option<&Geom<GeoSpace2d>> {
        match self {
            Geometry::Cartesian(_) => None,
            Geometry::Geographic(v) => Some(v),
        }
    }
}

impl<S: CoordinateSpace> From<Geom<S>> for Geometry {
    fn from(value: Geom<S>) -> Self {
        S::into_geometry(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ring;

    type G = Geom<CartesianSpace2d>;

    #[test]
    fn emptiness() {
        assert!(!G::Point(Point::new(0.0, 0.0)).is_empty());
        assert!(G::empty_collection().is_empty());
        assert!(G::MultiPoint(MultiPoint::new(Vec::<(f64, f64)>::new())).is_empty());

        let nested = G::GeometryCollection(GeometryCollection::new(vec![
            G::empty_collection(),
            G::MultiPolygon(MultiPolygon::new(vec![])),
        ]));
        assert!(nested.is_empty());

        let with_point = G::GeometryCollection(GeometryCollection::new(vec![
            G::empty_collection(),
            G::Point(Point::new(1.0, 1.0)),
        ]));
        assert!(!with_point.is_empty());
    }

    #[test]
    fn num_points() {
        let polygon = Polygon::new(
            Ring::new([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![Ring::new([(1.0, 1.0), (1.0, 2.0), (2.0, 1.0)])],
        );
        let collection = G::GeometryCollection(GeometryCollection::new(vec![
            G::Polygon(polygon),
            G::Point(Point::new(9.0, 9.0)),
        ]));

        assert_eq!(collection.num_points(), 8);
    }

    #[test]
    fn space_erasure() {
        let geometry: Geometry = Geom::<GeoSpace2d>::Point(Point::<GeoSpace2d>::latlon(10.0, 20.0)).into();
        assert_eq!(geometry.coordinate_system(), CoordinateSystem::Geographic);
        assert_eq!(geometry.geometry_type(), GeometryType::Point);
        assert!(geometry.as_cartesian().is_none());

        let empty = Geometry::empty_collection(CoordinateSystem::Cartesian);
        assert_eq!(empty.geometry_type(), GeometryType::Geometrycollection);
        assert!(empty.is_empty());
    }
}

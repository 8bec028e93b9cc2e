//! Structural validation of geometries before they are used in set operations.
//!
//! A geometry is valid when:
//! * all coordinates are finite numbers;
//! * every linestring has at least 2 points, and every polygon ring has at least 3 distinct points;
//! * geographic coordinates have longitude in `[-180, 180]` and latitude in `[-90, 90]`.
//!
//! Empty linestrings and polygons are allowed, they denote the empty geometry of their kind.

use geo_types::Coord;

use crate::{
    CoordinateSpace, CoordinateSystem, Geom, Geometry, GeometryError, GeometryType, Linestring,
    Polygon, Ring,
};

/// Minimal number of points in a non-empty linestring.
pub const MIN_LINESTRING_POINTS: usize = 2;
/// Minimal number of points in a non-empty ring (closing point not counted).
pub const MIN_RING_POINTS: usize = 3;

/// Checks that the geometry can take part in a set operation.
pub fn validate_geometry(geometry: &Geometry) -> Result<(), GeometryError> {
    match geometry {
        Geometry::Cartesian(geom) => validate(geom),
        Geometry::Geographic(geom) => validate(geom),
    }
}

/// Checks that the geometry in the space `S` can take part in a set operation.
pub fn validate<S: CoordinateSpace>(geom: &Geom<S>) -> Result<(), GeometryError> {
    let system = S::SYSTEM;
    match geom {
        Geom::Point(p) => validate_coord(p.as_coord(), system),
        Geom::Linestring(line) => validate_linestring(line),
        Geom::Polygon(polygon) => validate_polygon(polygon),
        Geom::MultiPoint(points) => validate_coords(points.coords(), system),
        Geom::MultiLinestring(lines) => lines.lines().iter().try_for_each(validate_linestring),
        Geom::MultiPolygon(polygons) => polygons.polygons().iter().try_for_each(validate_polygon),
        Geom::GeometryCollection(collection) => collection.members().iter().try_for_each(validate),
    }
}

fn validate_linestring<S: CoordinateSpace>(line: &Linestring<S>) -> Result<(), GeometryError> {
    if !line.is_empty() && line.len() < MIN_LINESTRING_POINTS {
        return Err(GeometryError::TooFewPoints {
            kind: GeometryType::Linestring,
            required: MIN_LINESTRING_POINTS,
            found: line.len(),
        });
    }

    validate_coords(line.coords(), S::SYSTEM)
}

fn validate_polygon<S: CoordinateSpace>(polygon: &Polygon<S>) -> Result<(), GeometryError> {
    if polygon.is_empty() {
        return Ok(());
    }

    polygon.rings().try_for_each(validate_ring)
}

fn validate_ring<S: CoordinateSpace>(ring: &Ring<S>) -> Result<(), GeometryError> {
    if ring.len() < MIN_RING_POINTS {
        return Err(GeometryError::TooFewPoints {
            kind: GeometryType::Polygon,
            required: MIN_RING_POINTS,
            found: ring.len(),
        });
    }

    validate_coords(ring.coords(), S::SYSTEM)
}

fn validate_coords(coords: &[Coord], system: CoordinateSystem) -> Result<(), GeometryError> {
    coords.iter().try_for_each(|c| validate_coord(c, system))
}

fn validate_coord(coord: &Coord, system: CoordinateSystem) -> Result<(), GeometryError> {
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return Err(GeometryError::NonFiniteCoordinate {
            x: coord.x,
            y: coord.y,
        });
    }

    if system == CoordinateSystem::Geographic {
        if !(-180.0..=180.0).contains(&coord.x) {
            return Err(GeometryError::LongitudeOutOfRange(coord.x));
        }
        if !(-90.0..=90.0).contains(&coord.y) {
            return Err(GeometryError::LatitudeOutOfRange(coord.y));
        }
    }

    Ok(())
}

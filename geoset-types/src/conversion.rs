//! Conversions between the geometries of this crate and [`geo_types`] geometries.
//!
//! `geo_types` geometries do not carry a coordinate space, so the conversion into [`Geom`] can target any space.

use geo_types::LineString;

use crate::{
    Geom, GeometryCollection, Linestring, MultiLinestring, MultiPoint, MultiPolygon, Point,
    Polygon, Ring,
};

impl<S> From<geo_types::Point<f64>> for Point<S> {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::from_coord(value.0)
    }
}

impl<S> From<Point<S>> for geo_types::Point<f64> {
    fn from(value: Point<S>) -> Self {
        geo_types::Point(value.coord())
    }
}

impl<S> From<LineString<f64>> for Linestring<S> {
    fn from(value: LineString<f64>) -> Self {
        Linestring::from(value.0)
    }
}

impl<S> From<&Linestring<S>> for LineString<f64> {
    fn from(value: &Linestring<S>) -> Self {
        LineString(value.coords().to_vec())
    }
}

fn ring_from_geo<S>(value: &LineString<f64>) -> Ring<S> {
    Ring::from(value.0.clone())
}

fn ring_to_geo<S>(ring: &Ring<S>) -> LineString<f64> {
    LineString(ring.iter_points_closing().copied().collect())
}

impl<S> From<geo_types::Polygon<f64>> for Polygon<S> {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let exterior = ring_from_geo(value.exterior());
        if exterior.is_empty() {
            return Polygon::new(exterior, vec![]);
        }

        Polygon::new(exterior, value.interiors().iter().map(ring_from_geo).collect())
    }
}

impl<S> From<&Polygon<S>> for geo_types::Polygon<f64> {
    fn from(value: &Polygon<S>) -> Self {
        geo_types::Polygon::new(
            ring_to_geo(value.exterior()),
            value.interiors().iter().map(ring_to_geo).collect(),
        )
    }
}

impl<S> From<geo_types::Geometry<f64>> for Geom<S> {
    fn from(value: geo_types::Geometry<f64>) -> Self {
        match value {
            geo_types::Geometry::Point(p) => Geom::Point(p.into()),
            geo_types::Geometry::Line(line) => {
                Geom::Linestring(Linestring::new([line.start, line.end]))
            }
            geo_types::Geometry::LineString(line) => Geom::Linestring(line.into()),
            geo_types::Geometry::Polygon(polygon) => Geom::Polygon(polygon.into()),
            geo_types::Geometry::MultiPoint(points) => {
                Geom::MultiPoint(MultiPoint::new(points.0.into_iter().map(|p| p.0)))
            }
            geo_types::Geometry::MultiLineString(lines) => Geom::MultiLinestring(
                MultiLinestring::new(lines.0.into_iter().map(Linestring::from).collect()),
            ),
            geo_types::Geometry::MultiPolygon(polygons) => Geom::MultiPolygon(MultiPolygon::new(
                polygons.0.into_iter().map(Polygon::from).collect(),
            )),
            geo_types::Geometry::GeometryCollection(collection) => Geom::GeometryCollection(
                GeometryCollection::new(collection.0.into_iter().map(Geom::from).collect()),
            ),
            geo_types::Geometry::Rect(rect) => Geom::Polygon(rect.to_polygon().into()),
            geo_types::Geometry::Triangle(triangle) => {
                Geom::Polygon(triangle.to_polygon().into())
            }
        }
    }
}

impl<S> From<&Geom<S>> for geo_types::Geometry<f64> {
    fn from(value: &Geom<S>) -> Self {
        match value {
            Geom::Point(p) => geo_types::Geometry::Point(geo_types::Point(p.coord())),
            Geom::Linestring(line) => geo_types::Geometry::LineString(line.into()),
            Geom::Polygon(polygon) => geo_types::Geometry::Polygon(polygon.into()),
            Geom::MultiPoint(points) => geo_types::Geometry::MultiPoint(geo_types::MultiPoint(
                points.coords().iter().map(|c| geo_types::Point(*c)).collect(),
            )),
            Geom::MultiLinestring(lines) => {
                geo_types::Geometry::MultiLineString(geo_types::MultiLineString(
                    lines.lines().iter().map(LineString::from).collect(),
                ))
            }
            Geom::MultiPolygon(polygons) => geo_types::Geometry::MultiPolygon(
                geo_types::MultiPolygon(
                    polygons
                        .polygons()
                        .iter()
                        .map(geo_types::Polygon::from)
                        .collect(),
                ),
            ),
            Geom::GeometryCollection(collection) => {
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(
                    collection
                        .members()
                        .iter()
                        .map(geo_types::Geometry::from)
                        .collect(),
                ))
            }
        }
    }
}

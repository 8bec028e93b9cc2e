//! Accumulation of operation results and their conversion into the most specific geometry type.

use geo_types::Coord;
use geoset_types::{
    Geom, Geometry, GeometryCollection, Linestring, MultiLinestring, MultiPoint, MultiPolygon,
    Point, Polygon, Ring,
};

/// Area as a list of rings: the exterior ring first, holes after it. Closing points are not repeated.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Area {
    rings: Vec<Vec<Coord>>,
}

impl Area {
    pub fn new(rings: Vec<Vec<Coord>>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Vec<Coord>] {
        &self.rings
    }

    fn from_polygon<S>(polygon: &Polygon<S>) -> Self {
        Self::new(polygon.rings().map(|ring| ring.coords().to_vec()).collect())
    }

    fn into_polygon<S>(self) -> Polygon<S> {
        let mut rings = self.rings.into_iter().map(Ring::from);
        let exterior = rings.next().unwrap_or_else(|| Ring::new(Vec::<Coord>::new()));
        Polygon::new(exterior, rings.collect())
    }
}

/// Flat result of a set operation: points, linestrings and areas.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Parts {
    pub points: Vec<Coord>,
    pub lines: Vec<Vec<Coord>>,
    pub polygons: Vec<Area>,
}

impl Parts {
    pub fn from_points(points: Vec<Coord>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn from_lines(lines: Vec<Vec<Coord>>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    pub fn from_polygons(polygons: Vec<Area>) -> Self {
        Self {
            polygons,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    /// Moves all parts of `other` into `self`.
    pub fn append(&mut self, mut other: Parts) {
        self.points.append(&mut other.points);
        self.lines.append(&mut other.lines);
        self.polygons.append(&mut other.polygons);
    }

    /// Flattens the geometry, including nested collections, into parts. Empty members are skipped.
    pub fn from_geom<S>(geom: &Geom<S>) -> Self {
        let mut parts = Parts::default();
        parts.add_geom(geom);
        parts
    }

    fn add_geom<S>(&mut self, geom: &Geom<S>) {
        match geom {
            Geom::Point(p) => self.points.push(p.coord()),
            Geom::Linestring(line) => self.add_line(line),
            Geom::Polygon(polygon) => self.add_polygon(polygon),
            Geom::MultiPoint(points) => self.points.extend_from_slice(points.coords()),
            Geom::MultiLinestring(lines) => lines.lines().iter().for_each(|l| self.add_line(l)),
            Geom::MultiPolygon(polygons) => polygons
                .polygons()
                .iter()
                .for_each(|p| self.add_polygon(p)),
            Geom::GeometryCollection(collection) => collection
                .members()
                .iter()
                .for_each(|member| self.add_geom(member)),
        }
    }

    fn add_line<S>(&mut self, line: &Linestring<S>) {
        if !line.is_empty() {
            self.lines.push(line.coords().to_vec());
        }
    }

    fn add_polygon<S>(&mut self, polygon: &Polygon<S>) {
        if !polygon.is_empty() {
            self.polygons.push(Area::from_polygon(polygon));
        }
    }

    /// Converts the parts into the most specific geometry type:
    /// * nothing: empty geometry collection;
    /// * parts of one kind: a single geometry for one part, a multi-geometry for several;
    /// * parts of several kinds: a geometry collection with polygons first, then linestrings, then points.
    pub fn into_geom<S>(self) -> Geom<S> {
        let kinds = [
            !self.points.is_empty(),
            !self.lines.is_empty(),
            !self.polygons.is_empty(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count();

        match kinds {
            0 => Geom::empty_collection(),
            1 => {
                if !self.polygons.is_empty() {
                    polygons_geom(self.polygons)
                } else if !self.lines.is_empty() {
                    lines_geom(self.lines)
                } else {
                    points_geom(self.points)
                }
            }
            _ => {
                let mut collection = GeometryCollection::empty();
                for area in self.polygons {
                    collection.push(area.into_polygon::<S>());
                }
                for line in self.lines {
                    collection.push(Linestring::<S>::from(line));
                }
                for point in self.points {
                    collection.push(Point::<S>::from_coord(point));
                }

                Geom::GeometryCollection(collection)
            }
        }
    }
}

fn polygons_geom<S>(mut polygons: Vec<Area>) -> Geom<S> {
    if polygons.len() == 1 {
        if let Some(area) = polygons.pop() {
            return Geom::Polygon(area.into_polygon());
        }
    }

    Geom::MultiPolygon(MultiPolygon::new(
        polygons.into_iter().map(Area::into_polygon).collect(),
    ))
}

fn lines_geom<S>(mut lines: Vec<Vec<Coord>>) -> Geom<S> {
    if lines.len() == 1 {
        if let Some(line) = lines.pop() {
            return Geom::Linestring(Linestring::from(line));
        }
    }

    Geom::MultiLinestring(MultiLinestring::new(
        lines.into_iter().map(Linestring::from).collect(),
    ))
}

fn points_geom<S>(points: Vec<Coord>) -> Geom<S> {
    match points.as_slice() {
        [single] => Geom::Point(Point::from_coord(*single)),
        _ => Geom::MultiPoint(MultiPoint::from(points)),
    }
}

/// Replaces a result without any points by an empty geometry collection in the same coordinate system.
pub(crate) fn normalize_empty(result: Geometry) -> Geometry {
    if result.is_empty() {
        Geometry::empty_collection(result.coordinate_system())
    } else {
        result
    }
}

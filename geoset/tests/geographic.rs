use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use geoset::{
    difference, intersection, symdifference, union_, Coord, GeoSpace2d, Geom, Geometry,
    Linestring, Point, Polygon, Ring, Srs,
};

type G = Geom<GeoSpace2d>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cell with edges along the given meridians and between the given latitudes.
fn cell(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Geometry {
    Geometry::Geographic(G::Polygon(Polygon::from(Ring::new([
        (min_lon, min_lat),
        (max_lon, min_lat),
        (max_lon, max_lat),
        (min_lon, max_lat),
    ]))))
}

fn area<const N: usize>(ring: [(f64, f64); N]) -> Geometry {
    Geometry::Geographic(G::Polygon(Polygon::from(Ring::new(ring))))
}

/// Ring of four vertices on the given parallel, around the nearest pole.
fn cap(lat: f64) -> Geometry {
    area([(0.0, lat), (90.0, lat), (180.0, lat), (-90.0, lat)])
}

fn across_antimeridian() -> Geometry {
    area([(170.0, 0.0), (-170.0, 0.0), (-170.0, 10.0), (170.0, 10.0)])
}

fn assert_has_vertex(coords: &[Coord], expected: (f64, f64)) {
    assert!(
        coords
            .iter()
            .any(|c| (c.x - expected.0).abs() < 0.01 && (c.y - expected.1).abs() < 0.01),
        "no vertex near {expected:?} in {coords:?}"
    );
}

fn is_empty_collection(geometry: &Geometry) -> bool {
    matches!(geometry, Geometry::Geographic(G::GeometryCollection(c)) if c.is_empty())
}

fn point(lon: f64, lat: f64) -> Geometry {
    Geometry::Geographic(G::Point(Point::latlon(lat, lon)))
}

fn assert_near(actual: &Coord, expected: (f64, f64)) {
    assert_abs_diff_eq!(actual.x, expected.0, epsilon = 0.01);
    assert_abs_diff_eq!(actual.y, expected.1, epsilon = 0.01);
}

#[test]
fn overlapping_cells() {
    init_logger();
    let srs = Srs::wgs84();

    let result = intersection(
        Some(&srs),
        &cell(0.0, 0.0, 2.0, 2.0),
        &cell(1.0, 1.0, 3.0, 3.0),
        "st_intersection",
    )
    .unwrap();

    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    let coords = polygon.exterior().coords();
    assert_eq!(coords.len(), 4);
    for expected in [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)] {
        assert_has_vertex(coords, expected);
    }
}

#[test]
fn union_of_adjacent_cells() {
    init_logger();
    let srs = Srs::wgs84();

    let result = union_(
        Some(&srs),
        &cell(0.0, 0.0, 1.0, 1.0),
        &cell(1.0, 0.0, 2.0, 1.0),
        "st_union",
    )
    .unwrap()
    .unwrap();

    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert!(polygon.interiors().is_empty());
    // The vertex on the equator is dropped, the northern one is not on the great arc between its neighbours.
    assert_eq!(polygon.exterior().len(), 5);
    assert!(polygon
        .exterior()
        .coords()
        .iter()
        .all(|c| !(c.x == 1.0 && c.y == 0.0)));
}

#[test]
fn difference_of_disjoint_cells() {
    let srs = Srs::wgs84();
    let a = cell(10.0, 10.0, 11.0, 11.0);

    let result = difference(Some(&srs), &a, &cell(20.0, 20.0, 21.0, 21.0), "st_difference").unwrap();
    assert_matches!(result, Geometry::Geographic(G::Polygon(_)));

    let result = difference(Some(&srs), &a, &a, "st_difference").unwrap();
    assert_matches!(result, Geometry::Geographic(G::GeometryCollection(c)) if c.is_empty());
}

#[test]
fn points() {
    let srs = Srs::wgs84();

    let result = intersection(Some(&srs), &cell(0.0, 0.0, 2.0, 2.0), &point(1.0, 1.0), "st_intersection").unwrap();
    assert_eq!(result, point(1.0, 1.0));

    let result = intersection(Some(&srs), &point(180.0, 10.0), &point(-180.0, 10.0), "st_intersection").unwrap();
    assert_eq!(result, point(180.0, 10.0));

    let result = intersection(Some(&srs), &point(10.0, 90.0), &point(-45.0, 90.0), "st_intersection").unwrap();
    assert_eq!(result, point(10.0, 90.0));
}

#[test]
fn line_through_cell() {
    let srs = Srs::wgs84();
    let line = Geometry::Geographic(G::Linestring(Linestring::new([(-10.0, 0.0), (10.0, 0.0)])));

    let result = intersection(Some(&srs), &line, &cell(0.0, -1.0, 2.0, 1.0), "st_intersection").unwrap();
    let Geometry::Geographic(G::Linestring(result)) = result else {
        panic!("expected a linestring, got {result:?}");
    };
    assert_eq!(result.len(), 2);
    assert_near(&result.coords()[0], (0.0, 0.0));
    assert_near(&result.coords()[1], (2.0, 0.0));
}

#[test]
fn points_across_antimeridian() {
    init_logger();
    let srs = Srs::wgs84();
    let a = across_antimeridian();

    for inside in [point(180.0, 5.0), point(-180.0, 5.0), point(175.0, 5.0), point(-175.0, 5.0)] {
        let result = intersection(Some(&srs), &a, &inside, "st_intersection").unwrap();
        assert_eq!(result, inside);
    }

    for outside in [point(0.0, 5.0), point(165.0, 5.0), point(-165.0, 5.0)] {
        let result = intersection(Some(&srs), &a, &outside, "st_intersection").unwrap();
        assert!(is_empty_collection(&result), "{outside:?} is not outside: {result:?}");
    }
}

#[test]
fn areas_across_antimeridian() {
    init_logger();
    let srs = Srs::wgs84();
    let b = area([(175.0, 5.0), (-165.0, 5.0), (-165.0, 15.0), (175.0, 15.0)]);

    let result = intersection(Some(&srs), &across_antimeridian(), &b, "st_intersection").unwrap();
    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert!(polygon.interiors().is_empty());

    // Edges crossing the antimeridian are great arcs bulging away from the equator.
    let coords = polygon.exterior().coords();
    assert_eq!(coords.len(), 4);
    for expected in [(175.0, 5.0), (-170.0, 5.0575), (-170.0, 10.0), (175.0, 10.1133)] {
        assert_has_vertex(coords, expected);
    }

    let result = difference(Some(&srs), &across_antimeridian(), &b, "st_difference").unwrap();
    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert_eq!(polygon.exterior().len(), 6);
}

#[test]
fn polar_cap() {
    init_logger();
    let srs = Srs::wgs84();
    let outer = cap(80.0);

    let result = intersection(Some(&srs), &outer, &point(45.0, 89.0), "st_intersection").unwrap();
    assert_eq!(result, point(45.0, 89.0));

    let result = intersection(Some(&srs), &outer, &point(-120.0, 85.0), "st_intersection").unwrap();
    assert_eq!(result, point(-120.0, 85.0));

    // Below the arc between two vertices, which reaches 82.9 degrees.
    let result = intersection(Some(&srs), &outer, &point(45.0, 81.0), "st_intersection").unwrap();
    assert!(is_empty_collection(&result));

    let result = intersection(Some(&srs), &outer, &point(45.0, 0.0), "st_intersection").unwrap();
    assert!(is_empty_collection(&result));
}

#[test]
fn nested_polar_caps() {
    init_logger();
    let srs = Srs::wgs84();
    let outer = cap(80.0);
    let inner = cap(85.0);

    let result = intersection(Some(&srs), &outer, &inner, "st_intersection").unwrap();
    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert_eq!(polygon.exterior().len(), 4);
    assert!(polygon.exterior().coords().iter().all(|c| (c.y - 85.0).abs() < 1e-9));

    let result = union_(Some(&srs), &outer, &inner, "st_union").unwrap().unwrap();
    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert!(polygon.interiors().is_empty());
    assert!(polygon.exterior().coords().iter().all(|c| (c.y - 80.0).abs() < 1e-9));

    let result = difference(Some(&srs), &outer, &inner, "st_difference").unwrap();
    let Geometry::Geographic(G::Polygon(polygon)) = result else {
        panic!("expected a polygon, got {result:?}");
    };
    assert_eq!(polygon.interiors().len(), 1);
    assert!(polygon.exterior().coords().iter().all(|c| (c.y - 80.0).abs() < 1e-9));
    assert!(polygon.interiors()[0].coords().iter().all(|c| (c.y - 85.0).abs() < 1e-9));

    let result = difference(Some(&srs), &inner, &outer, "st_difference").unwrap();
    assert!(is_empty_collection(&result));
}

#[test]
fn symdifference_of_cells() {
    init_logger();
    let srs = Srs::wgs84();
    let a = cell(0.0, 0.0, 2.0, 2.0);

    let result = symdifference(Some(&srs), &a, &cell(1.0, 1.0, 3.0, 3.0), "st_symdifference").unwrap();
    let Geometry::Geographic(G::MultiPolygon(parts)) = result else {
        panic!("expected a multipolygon, got {result:?}");
    };
    assert_eq!(parts.polygons().len(), 2);
    assert!(parts.polygons().iter().all(|p| p.interiors().is_empty()));

    let result = symdifference(Some(&srs), &a, &a, "st_symdifference").unwrap();
    assert!(is_empty_collection(&result));

    let result = symdifference(Some(&srs), &a, &cell(10.0, 10.0, 11.0, 11.0), "st_symdifference").unwrap();
    assert_matches!(result, Geometry::Geographic(G::MultiPolygon(m)) if m.polygons().len() == 2);
}

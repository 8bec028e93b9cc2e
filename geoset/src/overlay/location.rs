use geo_types::Coord;
use geoset_types::Polygon;

use super::Overlay;
use crate::normalize::Area;
use crate::strategy::{OverlayStrategy, PointLocation, WindingStrategy};

/// Area given by its rings: the exterior ring first, then holes. Closing points are not repeated.
pub(crate) trait AreaRings {
    fn ring_coords(&self) -> impl Iterator<Item = &[Coord]>;
}

impl<S> AreaRings for Polygon<S> {
    fn ring_coords(&self) -> impl Iterator<Item = &[Coord]> {
        self.rings().map(|ring| ring.coords())
    }
}

impl AreaRings for Area {
    fn ring_coords(&self) -> impl Iterator<Item = &[Coord]> {
        self.rings().iter().map(Vec::as_slice)
    }
}

impl<T: AreaRings> AreaRings for &T {
    fn ring_coords(&self) -> impl Iterator<Item = &[Coord]> {
        (*self).ring_coords()
    }
}

impl<St: OverlayStrategy> Overlay<'_, St> {
    /// Location of the point relative to a single area. Points in holes are outside, points on hole rings are on the
    /// boundary.
    pub(crate) fn locate_in_area<A: AreaRings>(&self, p: Coord, area: &A) -> PointLocation {
        let winding = self.st.winding();
        let mut rings = area.ring_coords();

        let Some(exterior) = rings.next() else {
            return PointLocation::Outside;
        };

        match winding.locate_in_ring(exterior, p) {
            PointLocation::Inside => {}
            location => return location,
        }

        for hole in rings {
            match winding.locate_in_ring(hole, p) {
                PointLocation::Inside => return PointLocation::Outside,
                PointLocation::Boundary => return PointLocation::Boundary,
                PointLocation::Outside => {}
            }
        }

        PointLocation::Inside
    }

    /// Location of the point relative to the union of non-overlapping areas.
    pub(crate) fn locate_in_areas<A: AreaRings>(&self, p: Coord, areas: &[A]) -> PointLocation {
        let mut location = PointLocation::Outside;
        for area in areas {
            match self.locate_in_area(p, area) {
                PointLocation::Inside => return PointLocation::Inside,
                PointLocation::Boundary => location = PointLocation::Boundary,
                PointLocation::Outside => {}
            }
        }

        location
    }

    /// Returns true if the point is inside or on the boundary of any of the areas.
    pub(crate) fn point_in_areas<A: AreaRings>(&self, p: Coord, areas: &[A]) -> bool {
        self.locate_in_areas(p, areas) != PointLocation::Outside
    }

    /// Returns true if the point lies on any of the lines.
    pub(crate) fn point_on_lines<L: AsRef<[Coord]>>(&self, p: Coord, lines: &[L]) -> bool {
        let winding = self.st.winding();
        lines.iter().any(|line| {
            let coords = line.as_ref();
            match coords {
                [single] => winding.equals(*single, p),
                _ => coords
                    .windows(2)
                    .any(|segment| winding.on_segment(segment[0], segment[1], p)),
            }
        })
    }

    /// Returns true if the point equals any of the points.
    pub(crate) fn point_in_points(&self, p: Coord, points: &[Coord]) -> bool {
        points.iter().any(|other| self.equals(p, *other))
    }
}

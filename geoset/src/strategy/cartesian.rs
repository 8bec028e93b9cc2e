use approx::relative_eq;
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::BooleanOps;
use geo_types::{Coord, LineString, MultiPolygon, Polygon, Rect};

use super::{
    IntersectionStrategy, Orientation, OverlayOp, OverlayStrategy, PointLocation, Strategies,
    WindingStrategy, RELATIVE_COORD_EPSILON, SIDE_EPSILON,
};

fn tolerance(u: f64, v: f64) -> f64 {
    RELATIVE_COORD_EPSILON * u.abs().max(v.abs()).max(1.0)
}

/// Planar point predicates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CartesianWinding;

impl WindingStrategy for CartesianWinding {
    fn orientation(&self, a: Coord, b: Coord, p: Coord) -> Orientation {
        let ab = b - a;
        let ap = p - a;
        let cross = ab.x * ap.y - ab.y * ap.x;
        let tolerance = SIDE_EPSILON * ab.x.hypot(ab.y) * ap.x.hypot(ap.y);

        if cross.abs() <= tolerance {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::Counterclockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Coordinates are compared with [`RELATIVE_COORD_EPSILON`] relative to their magnitude.
    fn equals(&self, a: Coord, b: Coord) -> bool {
        relative_eq!(
            a.x,
            b.x,
            epsilon = RELATIVE_COORD_EPSILON,
            max_relative = RELATIVE_COORD_EPSILON
        ) && relative_eq!(
            a.y,
            b.y,
            epsilon = RELATIVE_COORD_EPSILON,
            max_relative = RELATIVE_COORD_EPSILON
        )
    }

    fn on_segment(&self, a: Coord, b: Coord, p: Coord) -> bool {
        if self.equals(a, p) || self.equals(b, p) {
            return true;
        }

        if self.orientation(a, b, p) != Orientation::Collinear {
            return false;
        }

        let slack_x = tolerance(a.x, b.x);
        let slack_y = tolerance(a.y, b.y);
        p.x >= a.x.min(b.x) - slack_x
            && p.x <= a.x.max(b.x) + slack_x
            && p.y >= a.y.min(b.y) - slack_y
            && p.y <= a.y.max(b.y) + slack_y
    }

    fn ring_area_signed(&self, ring: &[Coord]) -> f64 {
        let Some(first) = ring.first() else {
            return 0.0;
        };

        let mut prev = first;
        let mut aggr = 0.0;
        for p in ring.iter().skip(1).chain(std::iter::once(first)) {
            aggr += prev.x * p.y - p.x * prev.y;
            prev = p;
        }

        aggr / 2.0
    }

    /// Points within the coordinate tolerance of the ring are on its boundary, the rest is located by
    /// [`CoordinatePosition`].
    fn locate_in_ring(&self, ring: &[Coord], p: Coord) -> PointLocation {
        let count = ring.len();
        if count == 0 {
            return PointLocation::Outside;
        }

        if (0..count).any(|i| self.on_segment(ring[i], ring[(i + 1) % count], p)) {
            return PointLocation::Boundary;
        }

        let polygon = Polygon::new(LineString::from(ring.to_vec()), vec![]);
        match polygon.coordinate_position(&p) {
            CoordPos::Inside => PointLocation::Inside,
            CoordPos::OnBoundary => PointLocation::Boundary,
            CoordPos::Outside => PointLocation::Outside,
        }
    }
}

/// Planar segment constructions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CartesianIntersection;

impl IntersectionStrategy for CartesianIntersection {
    fn crossing_point(&self, a0: Coord, a1: Coord, b0: Coord, b1: Coord) -> Coord {
        let da = a1 - a0;
        let db = b1 - b0;
        let denominator = da.x * db.y - da.y * db.x;
        if denominator == 0.0 {
            return a0;
        }

        let d0 = b0 - a0;
        let t = ((d0.x * db.y - d0.y * db.x) / denominator).clamp(0.0, 1.0);

        Coord {
            x: a0.x + t * da.x,
            y: a0.y + t * da.y,
        }
    }

    fn fraction(&self, a: Coord, b: Coord, p: Coord) -> f64 {
        let ab = b - a;
        let len_sq = ab.x * ab.x + ab.y * ab.y;
        if len_sq == 0.0 {
            return 0.0;
        }

        let ap = p - a;
        (ap.x * ab.x + ap.y * ab.y) / len_sq
    }

    fn midpoint(&self, a: Coord, b: Coord) -> Coord {
        Coord {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }

    fn direction(&self, a: Coord, b: Coord) -> f64 {
        (b.y - a.y).atan2(b.x - a.x)
    }

    fn envelope(&self, a: Coord, b: Coord) -> Rect<f64> {
        Rect::new(a, b)
    }
}

impl OverlayStrategy for Strategies<CartesianWinding, CartesianIntersection> {
    type Winding = CartesianWinding;
    type Intersection = CartesianIntersection;

    fn winding(&self) -> &CartesianWinding {
        &self.winding
    }

    fn intersection(&self) -> &CartesianIntersection {
        &self.intersection
    }

    /// Polygons are overlaid by [`BooleanOps`].
    fn overlay_polygons(
        &self,
        op: OverlayOp,
        a: &MultiPolygon<f64>,
        b: &MultiPolygon<f64>,
    ) -> Option<MultiPolygon<f64>> {
        Some(match op {
            OverlayOp::Intersection => a.intersection(b),
            OverlayOp::Union => a.union(b),
            OverlayOp::Difference => a.difference(b),
        })
    }
}

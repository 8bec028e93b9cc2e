//! Geometric primitives the overlay engine is built upon, in cartesian and geographic flavours.
//!
//! A set operation needs two groups of primitives:
//! * [`WindingStrategy`]: orientation of a point relative to a segment, coordinate equality, point-on-segment test,
//!   point-in-ring location and ring orientation (signed area);
//! * [`IntersectionStrategy`]: intersection point of crossing segments, position of a point along a segment,
//!   segment midpoint, direction of a segment at its start and the segment envelope used as a pre-filter.
//!
//! [`Strategies`] bundles one of each, and [`OverlayStrategy`] builds segment intersection on top of them. An
//! [`OverlayStrategy`] can also provide a dedicated polygon overlay kernel; the cartesian one uses [`geo::BooleanOps`].

use geo_types::{Coord, MultiPolygon, Rect};

mod cartesian;
pub use cartesian::{CartesianIntersection, CartesianWinding};

mod geographic;
pub use geographic::{GeographicIntersection, GeographicWinding, Spheroid};

/// Two geographic coordinates closer than this (in degrees) along both axes are considered equal.
pub const COORD_EPSILON: f64 = 1e-9;

/// Relative tolerance of cartesian coordinate equality. Values with magnitude below `1.0` use it as an absolute
/// tolerance.
pub const RELATIVE_COORD_EPSILON: f64 = 1e-12;

/// Relative tolerance of the orientation test.
pub const SIDE_EPSILON: f64 = 1e-12;

/// Orientation of a triplet of points `(a, b, p)`: on which side of the directed segment `a -> b` the point `p` lies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `p` lies to the right of `a -> b`.
    Clockwise,
    /// `p` lies to the left of `a -> b`.
    Counterclockwise,
    /// `p` lies on the line (great circle) through `a` and `b`.
    Collinear,
}

/// Location of a point relative to an area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointLocation {
    /// In the interior of the area.
    Inside,
    /// On one of the rings of the area.
    Boundary,
    /// In the exterior of the area.
    Outside,
}

/// Set operation performed by an overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlayOp {
    /// Points common to both operands.
    Intersection,
    /// Points of either operand.
    Union,
    /// Points of the first operand that are not in the second one.
    Difference,
}

/// Result of intersecting two segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntersection {
    /// The segments have no common points.
    None,
    /// The segments cross or touch at a single point.
    Point(Coord),
    /// The segments are collinear and share the part between the two points. The points are ordered along the first
    /// segment.
    Overlap(Coord, Coord),
}

/// Point-level predicates of a coordinate system.
pub trait WindingStrategy: std::fmt::Debug + Send + Sync {
    /// Orientation of the point `p` relative to the directed segment `a -> b`.
    fn orientation(&self, a: Coord, b: Coord, p: Coord) -> Orientation;

    /// Returns true if the two coordinates denote the same point.
    fn equals(&self, a: Coord, b: Coord) -> bool;

    /// Returns true if `p` lies on the segment `a -> b`, including its endpoints.
    fn on_segment(&self, a: Coord, b: Coord, p: Coord) -> bool;

    /// Signed area of the ring. Positive for counterclockwise rings. The closing point must not be repeated.
    fn ring_area_signed(&self, ring: &[Coord]) -> f64;

    /// Location of the point relative to the area bounded by the ring. The closing point must not be repeated.
    fn locate_in_ring(&self, ring: &[Coord], p: Coord) -> PointLocation;
}

/// Segment-level constructions of a coordinate system.
pub trait IntersectionStrategy: std::fmt::Debug + Send + Sync {
    /// Intersection point of two segments that are known to cross properly.
    fn crossing_point(&self, a0: Coord, a1: Coord, b0: Coord, b1: Coord) -> Coord;

    /// Relative position of the point `p` lying on the segment `a -> b`: `0.0` at `a`, `1.0` at `b`.
    fn fraction(&self, a: Coord, b: Coord, p: Coord) -> f64;

    /// Middle point of the segment.
    fn midpoint(&self, a: Coord, b: Coord) -> Coord;

    /// Direction of the segment at `a`, in radians counterclockwise from the positive `x` (east) direction.
    fn direction(&self, a: Coord, b: Coord) -> f64;

    /// Rectangle containing the whole segment.
    fn envelope(&self, a: Coord, b: Coord) -> Rect<f64>;
}

/// Full set of primitives for an overlay in one coordinate system.
pub trait OverlayStrategy: std::fmt::Debug + Send + Sync {
    /// Point-level predicates.
    type Winding: WindingStrategy;
    /// Segment-level constructions.
    type Intersection: IntersectionStrategy;

    /// Point-level predicates.
    fn winding(&self) -> &Self::Winding;

    /// Segment-level constructions.
    fn intersection(&self) -> &Self::Intersection;

    /// Intersection of the segments `a0 -> a1` and `b0 -> b1`.
    ///
    /// Endpoints are preferred over computed points: if an endpoint of one segment lies on the other, that endpoint
    /// is returned as is.
    fn intersect(&self, a0: Coord, a1: Coord, b0: Coord, b1: Coord) -> SegmentIntersection {
        let winding = self.winding();

        let o1 = winding.orientation(a0, a1, b0);
        let o2 = winding.orientation(a0, a1, b1);
        let o3 = winding.orientation(b0, b1, a0);
        let o4 = winding.orientation(b0, b1, a1);

        let collinear = (o1 == Orientation::Collinear && o2 == Orientation::Collinear)
            || (o3 == Orientation::Collinear && o4 == Orientation::Collinear);
        if collinear {
            return collinear_intersection(self, a0, a1, b0, b1);
        }

        if (o1 == o2 && o1 != Orientation::Collinear) || (o3 == o4 && o3 != Orientation::Collinear) {
            return SegmentIntersection::None;
        }

        for candidate in [a0, a1, b0, b1] {
            if winding.on_segment(a0, a1, candidate) && winding.on_segment(b0, b1, candidate) {
                return SegmentIntersection::Point(candidate);
            }
        }

        if [o1, o2, o3, o4].contains(&Orientation::Collinear) {
            return SegmentIntersection::None;
        }

        SegmentIntersection::Point(self.intersection().crossing_point(a0, a1, b0, b1))
    }

    /// Overlay of two sets of polygons computed by a dedicated kernel.
    ///
    /// Returns `None` if the coordinate system has no such kernel, in which case polygons are overlaid by edge
    /// selection over the primitives of this strategy.
    fn overlay_polygons(
        &self,
        _op: OverlayOp,
        _a: &MultiPolygon<f64>,
        _b: &MultiPolygon<f64>,
    ) -> Option<MultiPolygon<f64>> {
        None
    }
}

fn collinear_intersection<St: OverlayStrategy + ?Sized>(
    st: &St,
    a0: Coord,
    a1: Coord,
    b0: Coord,
    b1: Coord,
) -> SegmentIntersection {
    let winding = st.winding();
    let mut common: Vec<(f64, Coord)> = Vec::with_capacity(4);
    for candidate in [a0, a1, b0, b1] {
        if !winding.on_segment(a0, a1, candidate) || !winding.on_segment(b0, b1, candidate) {
            continue;
        }
        if common.iter().any(|(_, c)| winding.equals(*c, candidate)) {
            continue;
        }

        common.push((st.intersection().fraction(a0, a1, candidate), candidate));
    }

    common.sort_by(|a, b| a.0.total_cmp(&b.0));

    match common.as_slice() {
        [] => SegmentIntersection::None,
        [(_, p)] => SegmentIntersection::Point(*p),
        [(_, first), .., (_, last)] => SegmentIntersection::Overlap(*first, *last),
    }
}

/// Winding and intersection strategies of one coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strategies<W, I> {
    winding: W,
    intersection: I,
}

/// Strategies of the 2d cartesian plane.
pub type CartesianStrategies = Strategies<CartesianWinding, CartesianIntersection>;

/// Strategies of geographic coordinates on an ellipsoid.
pub type GeographicStrategies = Strategies<GeographicWinding, GeographicIntersection>;

impl<W, I> Strategies<W, I> {
    /// Bundles the two strategies together.
    pub fn new(winding: W, intersection: I) -> Self {
        Self {
            winding,
            intersection,
        }
    }
}

impl Strategies<CartesianWinding, CartesianIntersection> {
    /// Planar strategies.
    pub fn cartesian() -> Self {
        Self::new(CartesianWinding, CartesianIntersection)
    }
}

impl Strategies<GeographicWinding, GeographicIntersection> {
    /// Strategies on the ellipsoid with the given axes. See [`Spheroid::new`] for handling of invalid axes.
    pub fn geographic(semi_major: f64, semi_minor: f64) -> Self {
        let spheroid = Spheroid::new(semi_major, semi_minor);
        Self::new(
            GeographicWinding::new(spheroid),
            GeographicIntersection::new(spheroid),
        )
    }
}

/// Strategies of both coordinate systems, built once from the ellipsoid axes and owned by a set operation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyBundle {
    semi_major: f64,
    semi_minor: f64,
    cartesian: CartesianStrategies,
    geographic: GeographicStrategies,
}

impl StrategyBundle {
    /// Creates strategies for the given ellipsoid axes. Cartesian strategies ignore the axes.
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            semi_major,
            semi_minor,
            cartesian: CartesianStrategies::cartesian(),
            geographic: GeographicStrategies::geographic(semi_major, semi_minor),
        }
    }

    /// Semi-major axis the strategies were created with.
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Semi-minor axis the strategies were created with.
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Planar strategies.
    pub fn cartesian(&self) -> &CartesianStrategies {
        &self.cartesian
    }

    /// Ellipsoidal strategies.
    pub fn geographic(&self) -> &GeographicStrategies {
        &self.geographic
    }
}

/// Returns true if the two envelopes have at least one common point, with a slack covering both the geographic
/// [`COORD_EPSILON`] and the cartesian [`RELATIVE_COORD_EPSILON`].
pub fn envelopes_intersect(a: &Rect<f64>, b: &Rect<f64>) -> bool {
    let magnitude = [a.min(), a.max(), b.min(), b.max()]
        .iter()
        .fold(1.0f64, |acc, c| acc.max(c.x.abs()).max(c.y.abs()));
    let slack = COORD_EPSILON.max(RELATIVE_COORD_EPSILON * magnitude);

    a.min().x <= b.max().x + slack
        && b.min().x <= a.max().x + slack
        && a.min().y <= b.max().y + slack
        && b.min().y <= a.max().y + slack
}

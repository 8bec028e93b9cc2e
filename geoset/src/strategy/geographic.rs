use std::f64::consts::{FRAC_PI_2, PI, TAU};

use geo_types::{coord, Coord, Rect};
use nalgebra::Vector3;

use super::{
    IntersectionStrategy, Orientation, OverlayStrategy, PointLocation, Strategies,
    WindingStrategy, COORD_EPSILON, SIDE_EPSILON,
};

/// Auxiliary sphere of an ellipsoid.
///
/// Geodetic latitudes are mapped to reduced (parametric) latitudes `beta = atan((1 - f) tan(phi))`, and edges between
/// two vertices are treated as great circle arcs on the resulting unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spheroid {
    flattening: f64,
    area_scale: f64,
}

impl Spheroid {
    /// Creates the auxiliary sphere of the ellipsoid with the given axes.
    ///
    /// If the axes do not describe an oblate ellipsoid (e.g. both are `0.0`), a unit sphere is used.
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        let valid = semi_major.is_finite()
            && semi_minor.is_finite()
            && semi_major > 0.0
            && semi_minor > 0.0
            && semi_minor <= semi_major;

        if valid {
            Self {
                flattening: (semi_major - semi_minor) / semi_major,
                area_scale: semi_major * semi_minor,
            }
        } else {
            Self {
                flattening: 0.0,
                area_scale: 1.0,
            }
        }
    }

    /// Flattening of the ellipsoid.
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    fn reduced_latitude(&self, lat: f64) -> f64 {
        let phi = lat.to_radians();
        ((1.0 - self.flattening) * phi.sin()).atan2(phi.cos())
    }

    /// Unit vector of the point on the auxiliary sphere.
    pub fn to_vector(&self, c: Coord) -> Vector3<f64> {
        let lon = c.x.to_radians();
        let beta = self.reduced_latitude(c.y);
        Vector3::new(beta.cos() * lon.cos(), beta.cos() * lon.sin(), beta.sin())
    }

    /// Geographic coordinate of a (not necessarily unit) vector on the auxiliary sphere.
    pub fn to_coord(&self, v: &Vector3<f64>) -> Coord {
        let beta = v.z.atan2(v.x.hypot(v.y));
        let lon = v.y.atan2(v.x);
        let phi = beta.sin().atan2((1.0 - self.flattening) * beta.cos());

        coord! { x: lon.to_degrees(), y: phi.to_degrees() }
    }
}

impl Default for Spheroid {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

fn wrap_longitude_delta(delta: f64) -> f64 {
    let wrapped = (delta + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

/// Winding of a ring around the `e3` axis of a right-handed frame.
///
/// `turn` is `±2π` if the ring goes around the axis (positive when counterclockwise seen from `e3`) and `0.0`
/// otherwise. `sweep` is `-∮ z dλ` over the ring with edges interpolated linearly in `z`. For a ring that does not go
/// around the axis it is the area of the region without the `e3` pole, positive if that region is to the left.
struct AxisWinding {
    turn: f64,
    sweep: f64,
}

fn frame_winding(
    vectors: &[Vector3<f64>],
    e1: &Vector3<f64>,
    e2: &Vector3<f64>,
    e3: &Vector3<f64>,
) -> AxisWinding {
    let local = |v: &Vector3<f64>| (v.dot(e2).atan2(v.dot(e1)), v.dot(e3));

    let mut turn = 0.0;
    let mut sweep = 0.0;
    for (i, v) in vectors.iter().enumerate() {
        let (lon1, z1) = local(v);
        let (lon2, z2) = local(&vectors[(i + 1) % vectors.len()]);
        let delta = wrap_longitude_delta(lon2 - lon1);
        turn += delta;
        sweep -= delta * (z1 + z2) / 2.0;
    }

    AxisWinding { turn, sweep }
}

impl AxisWinding {
    fn encircles_pole(&self) -> bool {
        self.turn.abs() > PI
    }

    /// Solid angle of the smaller of the two regions bounded by the ring, positive if that region is to the left of
    /// the ring.
    fn smaller_side(&self) -> f64 {
        let g = self.sweep;
        if self.encircles_pole() {
            if g <= 0.0 {
                g + TAU
            } else {
                g - TAU
            }
        } else if g > TAU {
            g - 2.0 * TAU
        } else if g < -TAU {
            g + 2.0 * TAU
        } else {
            g
        }
    }
}

/// Point predicates on the auxiliary sphere.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GeographicWinding {
    spheroid: Spheroid,
}

impl GeographicWinding {
    /// Creates predicates on the given sphere.
    pub fn new(spheroid: Spheroid) -> Self {
        Self { spheroid }
    }

    fn vectors(&self, ring: &[Coord]) -> Vec<Vector3<f64>> {
        ring.iter().map(|c| self.spheroid.to_vector(*c)).collect()
    }
}

impl WindingStrategy for GeographicWinding {
    fn orientation(&self, a: Coord, b: Coord, p: Coord) -> Orientation {
        let normal = self
            .spheroid
            .to_vector(a)
            .cross(&self.spheroid.to_vector(b));
        let norm = normal.norm();
        if norm <= SIDE_EPSILON {
            return Orientation::Collinear;
        }

        let side = normal.dot(&self.spheroid.to_vector(p)) / norm;
        if side.abs() <= SIDE_EPSILON {
            Orientation::Collinear
        } else if side > 0.0 {
            Orientation::Counterclockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Longitudes `-180` and `180` denote the same meridian, and all points with latitude `±90` are the same pole.
    fn equals(&self, a: Coord, b: Coord) -> bool {
        if (a.y - b.y).abs() > COORD_EPSILON {
            return false;
        }

        if a.y.abs() >= 90.0 - COORD_EPSILON {
            return true;
        }

        let delta = (a.x - b.x).abs();
        delta <= COORD_EPSILON || (360.0 - delta).abs() <= COORD_EPSILON
    }

    fn on_segment(&self, a: Coord, b: Coord, p: Coord) -> bool {
        if self.equals(a, p) || self.equals(b, p) {
            return true;
        }

        if self.orientation(a, b, p) != Orientation::Collinear {
            return false;
        }

        let va = self.spheroid.to_vector(a);
        let vb = self.spheroid.to_vector(b);
        let vp = self.spheroid.to_vector(p);

        angle_between(&va, &vp) + angle_between(&vp, &vb) - angle_between(&va, &vb) <= SIDE_EPSILON
    }

    /// Area on the auxiliary sphere of the smaller region bounded by the ring, scaled by `a * b` so that it is
    /// expressed in square metres of the ellipsoid. Positive if that region is to the left of the ring.
    fn ring_area_signed(&self, ring: &[Coord]) -> f64 {
        if ring.len() < 3 {
            return 0.0;
        }

        let vectors = self.vectors(ring);
        let winding = frame_winding(&vectors, &Vector3::x(), &Vector3::y(), &Vector3::z());
        winding.smaller_side() * self.spheroid.area_scale
    }

    /// The ring bounds two regions of the sphere, and its interior is the smaller one whatever the ring orientation.
    /// Rings around a pole and rings crossing the antimeridian are handled as any other ring.
    fn locate_in_ring(&self, ring: &[Coord], p: Coord) -> PointLocation {
        let count = ring.len();
        if (0..count).any(|i| self.on_segment(ring[i], ring[(i + 1) % count], p)) {
            return PointLocation::Boundary;
        }
        if count < 3 {
            return PointLocation::Outside;
        }

        let vectors = self.vectors(ring);
        let interior_on_left =
            frame_winding(&vectors, &Vector3::x(), &Vector3::y(), &Vector3::z()).smaller_side() > 0.0;

        // Frame with `p` at its pole: the ring goes around `p` exactly when it winds around the axis.
        let e3 = self.spheroid.to_vector(p);
        let helper: Vector3<f64> = if e3.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let e1 = helper.cross(&e3).normalize();
        let e2 = e3.cross(&e1);
        let around_p = frame_winding(&vectors, &e1, &e2, &e3);

        let p_on_left = if around_p.encircles_pole() {
            around_p.turn > 0.0
        } else {
            around_p.sweep < 0.0
        };

        if p_on_left == interior_on_left {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }
}

/// Segment constructions on the auxiliary sphere.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GeographicIntersection {
    spheroid: Spheroid,
}

impl GeographicIntersection {
    /// Creates constructions on the given sphere.
    pub fn new(spheroid: Spheroid) -> Self {
        Self { spheroid }
    }
}

impl IntersectionStrategy for GeographicIntersection {
    fn crossing_point(&self, a0: Coord, a1: Coord, b0: Coord, b1: Coord) -> Coord {
        let va0 = self.spheroid.to_vector(a0);
        let va1 = self.spheroid.to_vector(a1);
        let normal_a = va0.cross(&va1);
        let normal_b = self
            .spheroid
            .to_vector(b0)
            .cross(&self.spheroid.to_vector(b1));

        let direction = normal_a.cross(&normal_b);
        let norm = direction.norm();
        if norm <= SIDE_EPSILON {
            return a0;
        }

        // The great circles cross at two antipodal points, the one near the segment is needed.
        let mut crossing = direction / norm;
        if crossing.dot(&(va0 + va1)) < 0.0 {
            crossing = -crossing;
        }

        self.spheroid.to_coord(&crossing)
    }

    fn fraction(&self, a: Coord, b: Coord, p: Coord) -> f64 {
        let va = self.spheroid.to_vector(a);
        let total = angle_between(&va, &self.spheroid.to_vector(b));
        if total == 0.0 {
            return 0.0;
        }

        angle_between(&va, &self.spheroid.to_vector(p)) / total
    }

    fn midpoint(&self, a: Coord, b: Coord) -> Coord {
        let sum = self.spheroid.to_vector(a) + self.spheroid.to_vector(b);
        if sum.norm() <= SIDE_EPSILON {
            return a;
        }

        self.spheroid.to_coord(&sum)
    }

    fn direction(&self, a: Coord, b: Coord) -> f64 {
        let beta1 = self.spheroid.reduced_latitude(a.y);
        let beta2 = self.spheroid.reduced_latitude(b.y);
        let delta_lon = wrap_longitude_delta((b.x - a.x).to_radians());

        let azimuth = (delta_lon.sin() * beta2.cos())
            .atan2(beta1.cos() * beta2.sin() - beta1.sin() * beta2.cos() * delta_lon.cos());

        FRAC_PI_2 - azimuth
    }

    /// Longitude range of the segment (the whole range for segments crossing the antimeridian) and the whole latitude
    /// range, since a great circle arc can reach higher latitudes than its endpoints.
    fn envelope(&self, a: Coord, b: Coord) -> Rect<f64> {
        let (min_lon, max_lon) = if (a.x - b.x).abs() > 180.0 {
            (-180.0, 180.0)
        } else {
            (a.x.min(b.x), a.x.max(b.x))
        };

        Rect::new(
            coord! { x: min_lon, y: -90.0 },
            coord! { x: max_lon, y: 90.0 },
        )
    }
}

impl OverlayStrategy for Strategies<GeographicWinding, GeographicIntersection> {
    type Winding = GeographicWinding;
    type Intersection = GeographicIntersection;

    fn winding(&self) -> &GeographicWinding {
        &self.winding
    }

    fn intersection(&self) -> &GeographicIntersection {
        &self.intersection
    }
}

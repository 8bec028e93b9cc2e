//! Set-operation functors.
//!
//! Every functor owns the [`StrategyBundle`] built from the ellipsoid axes it was created with. Evaluation first
//! matches the coordinate systems of both operands, then the kinds of the operands, and calls the routine for that
//! ordered pair of kinds.

use std::slice;

use geo_types::Coord;
use geoset_types::{CoordinateSpace, Geom, Geometry, Linestring, Polygon};

use crate::error::SetOpError;
use crate::normalize::Parts;
use crate::overlay::Overlay;
use crate::strategy::{OverlayStrategy, StrategyBundle};

mod difference;
mod intersection;
mod symdifference;
mod union;

pub use difference::Difference;
pub use intersection::Intersection;
pub use symdifference::Symdifference;
pub use union::Union;

/// Binary set operation on geometries of the same coordinate system.
pub trait SetOperation: Sized {
    /// Name of the operation, used in log records.
    const NAME: &'static str;

    /// Creates the operation for an ellipsoid with the given axes. Cartesian geometries ignore the axes.
    fn new(semi_major: f64, semi_minor: f64) -> Self;

    /// Evaluates the operation.
    ///
    /// Returns [`SetOpError::CoordinateSystemMismatch`] if the geometries are in different coordinate systems.
    fn eval(&self, g1: &Geometry, g2: &Geometry) -> Result<Geometry, SetOpError>;
}

/// Operation on a pair of geometries in one coordinate space, producing flat parts.
pub(crate) trait PairOperation {
    fn apply<St: OverlayStrategy, S: CoordinateSpace>(
        ov: &Overlay<'_, St>,
        g1: &Geom<S>,
        g2: &Geom<S>,
    ) -> Result<Parts, SetOpError>;
}

/// Dispatches the pair by coordinate system and converts the resulting parts into the most specific geometry.
pub(crate) fn eval_pair<Op: PairOperation>(
    strategies: &StrategyBundle,
    g1: &Geometry,
    g2: &Geometry,
) -> Result<Geometry, SetOpError> {
    match (g1, g2) {
        (Geometry::Cartesian(a), Geometry::Cartesian(b)) => {
            let parts = Op::apply(&Overlay::new(strategies.cartesian()), a, b)?;
            Ok(Geometry::Cartesian(parts.into_geom()))
        }
        (Geometry::Geographic(a), Geometry::Geographic(b)) => {
            let parts = Op::apply(&Overlay::new(strategies.geographic()), a, b)?;
            Ok(Geometry::Geographic(parts.into_geom()))
        }
        _ => Err(SetOpError::CoordinateSystemMismatch(
            g1.coordinate_system(),
            g2.coordinate_system(),
        )),
    }
}

/// Geometry seen by its dimension: single and multi geometries of the same dimension are handled alike.
#[derive(Debug)]
pub(crate) enum Operand<'g, S> {
    Points(&'g [Coord]),
    Lines(&'g [Linestring<S>]),
    Areas(&'g [Polygon<S>]),
    Collection(&'g [Geom<S>]),
}

impl<'g, S> Operand<'g, S> {
    pub(crate) fn of(geom: &'g Geom<S>) -> Self {
        match geom {
            Geom::Point(p) => Operand::Points(slice::from_ref(p.as_coord())),
            Geom::Linestring(line) => Operand::Lines(slice::from_ref(line)),
            Geom::Polygon(polygon) => Operand::Areas(slice::from_ref(polygon)),
            Geom::MultiPoint(points) => Operand::Points(points.coords()),
            Geom::MultiLinestring(lines) => Operand::Lines(lines.lines()),
            Geom::MultiPolygon(polygons) => Operand::Areas(polygons.polygons()),
            Geom::GeometryCollection(collection) => Operand::Collection(collection.members()),
        }
    }
}

/// Merges the results of the operation applied to every member of a collection.
pub(crate) fn merge_members<St: OverlayStrategy, S: CoordinateSpace>(
    ov: &Overlay<'_, St>,
    members: &[Geom<S>],
    mut op: impl FnMut(&Geom<S>) -> Result<Parts, SetOpError>,
) -> Result<Parts, SetOpError> {
    let mut result = Parts::default();
    for member in members {
        result = ov.merge(result, op(member)?)?;
    }

    Ok(result)
}

fn log_pair<S>(name: &str, g1: &Geom<S>, g2: &Geom<S>) {
    log::trace!("{name}: {} x {}", g1.geometry_type(), g2.geometry_type());
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoset_types::{CartesianSpace2d, CoordinateSystem, GeoSpace2d, Point};

    use super::*;

    #[test]
    fn mismatched_coordinate_systems() {
        let intersection = Intersection::new(0.0, 0.0);
        let g1 = Geometry::Cartesian(Geom::<CartesianSpace2d>::Point(Point::new(1.0, 1.0)));
        let g2 = Geometry::Geographic(Geom::<GeoSpace2d>::Point(Point::latlon(1.0, 1.0)));

        assert_matches!(
            intersection.eval(&g1, &g2),
            Err(SetOpError::CoordinateSystemMismatch(
                CoordinateSystem::Cartesian,
                CoordinateSystem::Geographic
            ))
        );
    }

    #[test]
    fn functors_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Intersection>();
        assert_send_sync::<Difference>();
        assert_send_sync::<Union>();
        assert_send_sync::<Symdifference>();
    }

    #[test]
    fn operand_views() {
        let point = Geom::<CartesianSpace2d>::Point(Point::new(1.0, 2.0));
        assert_matches!(Operand::of(&point), Operand::Points([c]) if c.x == 1.0 && c.y == 2.0);

        let collection = Geom::<CartesianSpace2d>::empty_collection();
        assert_matches!(Operand::of(&collection), Operand::Collection([]));
    }
}

use geoset_types::{CoordinateSpace, Geom, Geometry};

use super::{eval_pair, log_pair, Operand, PairOperation, SetOperation};
use crate::error::SetOpError;
use crate::normalize::Parts;
use crate::overlay::{Overlay, OverlayOp};
use crate::strategy::{OverlayStrategy, StrategyBundle};

/// Point set union of two geometries.
///
/// Overlapping polygons are dissolved, linework covered by other linework or by polygons is removed, and points
/// covered by anything else are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    strategies: StrategyBundle,
}

impl Union {
    /// Strategies the operation was created with.
    pub fn strategies(&self) -> &StrategyBundle {
        &self.strategies
    }
}

impl SetOperation for Union {
    const NAME: &'static str = "union";

    fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            strategies: StrategyBundle::new(semi_major, semi_minor),
        }
    }

    fn eval(&self, g1: &Geometry, g2: &Geometry) -> Result<Geometry, SetOpError> {
        eval_pair::<Self>(&self.strategies, g1, g2)
    }
}

impl PairOperation for Union {
    fn apply<St: OverlayStrategy, S: CoordinateSpace>(
        ov: &Overlay<'_, St>,
        g1: &Geom<S>,
        g2: &Geom<S>,
    ) -> Result<Parts, SetOpError> {
        log_pair(Self::NAME, g1, g2);

        let parts = match (Operand::of(g1), Operand::of(g2)) {
            (Operand::Collection(_), _) | (_, Operand::Collection(_)) => {
                ov.merge(Parts::from_geom(g1), Parts::from_geom(g2))?
            }

            (Operand::Points(a), Operand::Points(b)) => {
                Parts::from_points(ov.filter_points(&[a, b].concat(), |_| true))
            }
            (Operand::Points(points), Operand::Lines(lines)) => {
                let mut parts = Parts::from_geom(g2);
                parts.points = ov.filter_points(points, |p| !ov.point_on_lines(p, lines));
                parts
            }
            (Operand::Lines(lines), Operand::Points(points)) => {
                let mut parts = Parts::from_geom(g1);
                parts.points = ov.filter_points(points, |p| !ov.point_on_lines(p, lines));
                parts
            }
            (Operand::Points(points), Operand::Areas(areas)) => {
                let mut parts = Parts::from_geom(g2);
                parts.points = ov.filter_points(points, |p| !ov.point_in_areas(p, areas));
                parts
            }
            (Operand::Areas(areas), Operand::Points(points)) => {
                let mut parts = Parts::from_geom(g1);
                parts.points = ov.filter_points(points, |p| !ov.point_in_areas(p, areas));
                parts
            }

            (Operand::Lines(a), Operand::Lines(b)) => {
                let mut parts = Parts::from_geom(g1);
                parts.append(ov.lines_lines(OverlayOp::Difference, b, a));
                parts
            }
            (Operand::Lines(lines), Operand::Areas(areas)) => {
                let mut parts = ov.lines_areas(OverlayOp::Difference, lines, areas);
                parts.polygons = Parts::from_geom(g2).polygons;
                parts
            }
            (Operand::Areas(areas), Operand::Lines(lines)) => {
                let mut parts = ov.lines_areas(OverlayOp::Difference, lines, areas);
                parts.polygons = Parts::from_geom(g1).polygons;
                parts
            }

            (Operand::Areas(a), Operand::Areas(b)) => ov.areas_areas(OverlayOp::Union, a, b)?,
        };

        Ok(parts)
    }
}

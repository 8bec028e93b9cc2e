use geoset_types::{CoordinateSpace, Geom, Geometry};

use super::{eval_pair, log_pair, merge_members, Operand, PairOperation, SetOperation};
use crate::error::SetOpError;
use crate::normalize::Parts;
use crate::overlay::{Overlay, OverlayOp};
use crate::strategy::{OverlayStrategy, StrategyBundle};

/// Point set intersection of two geometries.
///
/// The result contains every part common to both geometries, including lower dimensional contacts: two polygons
/// sharing an edge intersect in a linestring, two crossing linestrings in a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    strategies: StrategyBundle,
}

impl Intersection {
    /// Strategies the operation was created with.
    pub fn strategies(&self) -> &StrategyBundle {
        &self.strategies
    }
}

impl SetOperation for Intersection {
    const NAME: &'static str = "intersection";

    fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            strategies: StrategyBundle::new(semi_major, semi_minor),
        }
    }

    fn eval(&self, g1: &Geometry, g2: &Geometry) -> Result<Geometry, SetOpError> {
        eval_pair::<Self>(&self.strategies, g1, g2)
    }
}

impl PairOperation for Intersection {
    fn apply<St: OverlayStrategy, S: CoordinateSpace>(
        ov: &Overlay<'_, St>,
        g1: &Geom<S>,
        g2: &Geom<S>,
    ) -> Result<Parts, SetOpError> {
        log_pair(Self::NAME, g1, g2);

        let parts = match (Operand::of(g1), Operand::of(g2)) {
            (Operand::Collection(members), _) => {
                return merge_members(ov, members, |m| Self::apply(ov, m, g2))
            }
            (_, Operand::Collection(members)) => {
                return merge_members(ov, members, |m| Self::apply(ov, g1, m))
            }

            (Operand::Points(a), Operand::Points(b)) => {
                Parts::from_points(ov.filter_points(a, |p| ov.point_in_points(p, b)))
            }
            (Operand::Points(points), Operand::Lines(lines))
            | (Operand::Lines(lines), Operand::Points(points)) => {
                Parts::from_points(ov.filter_points(points, |p| ov.point_on_lines(p, lines)))
            }
            (Operand::Points(points), Operand::Areas(areas))
            | (Operand::Areas(areas), Operand::Points(points)) => {
                Parts::from_points(ov.filter_points(points, |p| ov.point_in_areas(p, areas)))
            }

            (Operand::Lines(a), Operand::Lines(b)) => {
                ov.lines_lines(OverlayOp::Intersection, a, b)
            }
            (Operand::Lines(lines), Operand::Areas(areas))
            | (Operand::Areas(areas), Operand::Lines(lines)) => {
                ov.lines_areas(OverlayOp::Intersection, lines, areas)
            }

            (Operand::Areas(a), Operand::Areas(b)) => {
                ov.areas_areas(OverlayOp::Intersection, a, b)?
            }
        };

        Ok(parts)
    }
}

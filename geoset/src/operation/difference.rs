use geoset_types::{CoordinateSpace, Geom, Geometry};

use super::{eval_pair, log_pair, merge_members, Operand, PairOperation, SetOperation};
use crate::error::SetOpError;
use crate::normalize::Parts;
use crate::overlay::{Overlay, OverlayOp};
use crate::strategy::{OverlayStrategy, StrategyBundle};

/// Part of the first geometry not covered by the second one.
///
/// A geometry of lower dimension cannot remove anything from a geometry of higher dimension, so e.g. a polygon minus
/// a linestring is the polygon itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    strategies: StrategyBundle,
}

impl Difference {
    /// Strategies the operation was created with.
    pub fn strategies(&self) -> &StrategyBundle {
        &self.strategies
    }
}

impl SetOperation for Difference {
    const NAME: &'static str = "difference";

    fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            strategies: StrategyBundle::new(semi_major, semi_minor),
        }
    }

    fn eval(&self, g1: &Geometry, g2: &Geometry) -> Result<Geometry, SetOpError> {
        eval_pair::<Self>(&self.strategies, g1, g2)
    }
}

impl PairOperation for Difference {
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
                let mut rest = g1.clone();
                for member in members {
                    if rest.is_empty() {
                        break;
                    }
                    rest = Self::apply(ov, &rest, member)?.into_geom();
                }
                Parts::from_geom(&rest)
            }

            (Operand::Points(a), Operand::Points(b)) => {
                Parts::from_points(ov.filter_points(a, |p| !ov.point_in_points(p, b)))
            }
            (Operand::Points(points), Operand::Lines(lines)) => {
                Parts::from_points(ov.filter_points(points, |p| !ov.point_on_lines(p, lines)))
            }
            (Operand::Points(points), Operand::Areas(areas)) => {
                Parts::from_points(ov.filter_points(points, |p| !ov.point_in_areas(p, areas)))
            }

            (Operand::Lines(_), Operand::Points(_))
            | (Operand::Areas(_), Operand::Points(_))
            | (Operand::Areas(_), Operand::Lines(_)) => Parts::from_geom(g1),

            (Operand::Lines(a), Operand::Lines(b)) => ov.lines_lines(OverlayOp::Difference, a, b),
            (Operand::Lines(lines), Operand::Areas(areas)) => {
                ov.lines_areas(OverlayOp::Difference, lines, areas)
            }

            (Operand::Areas(a), Operand::Areas(b)) => {
                ov.areas_areas(OverlayOp::Difference, a, b)?
            }
        };

        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geo::Area;
    use geoset_types::{
        CartesianSpace2d, GeometryCollection, Linestring, MultiPoint, Point, Polygon, Ring,
    };

    use super::*;

    type G = Geom<CartesianSpace2d>;

    fn eval(g1: &G, g2: &G) -> G {
        let result = Difference::new(0.0, 0.0)
            .eval(&Geometry::Cartesian(g1.clone()), &Geometry::Cartesian(g2.clone()))
            .expect("difference");
        match result {
            Geometry::Cartesian(g) => g,
            Geometry::Geographic(_) => panic!("unexpected coordinate system"),
        }
    }

    fn square(min: f64, max: f64) -> G {
        G::Polygon(Polygon::from(Ring::new([
            (min, min),
            (max, min),
            (max, max),
            (min, max),
        ])))
    }

    fn area(geom: &G) -> f64 {
        geo_types::Geometry::from(geom).unsigned_area()
    }

    #[test]
    fn points() {
        let points = G::MultiPoint(MultiPoint::new([(0.0, 0.0), (1.0, 1.0), (5.0, 5.0)]));

        let result = eval(&points, &square(0.0, 2.0));
        assert_eq!(result, G::Point(Point::new(5.0, 5.0)));

        let result = eval(&points, &G::Linestring(Linestring::new([(0.0, 0.0), (2.0, 2.0)])));
        assert_eq!(result, G::Point(Point::new(5.0, 5.0)));
    }

    #[test]
    fn lower_dimension_removes_nothing() {
        let polygon = square(0.0, 2.0);
        let line = G::Linestring(Linestring::new([(0.0, 0.0), (2.0, 2.0)]));

        assert_eq!(eval(&polygon, &line), polygon);
        assert_eq!(eval(&polygon, &G::Point(Point::new(1.0, 1.0))), polygon);
        assert_eq!(eval(&line, &G::Point(Point::new(1.0, 1.0))), line);
    }

    #[test]
    fn areas() {
        let result = eval(&square(0.0, 2.0), &square(1.0, 3.0));
        assert_matches!(result, G::Polygon(_));
        assert_abs_diff_eq!(area(&result), 3.0, epsilon = 1e-12);

        let result = eval(&square(0.0, 2.0), &square(0.0, 2.0));
        assert_matches!(result, G::GeometryCollection(c) if c.is_empty());
    }

    #[test]
    fn collection_is_subtracted_member_by_member() {
        let collection = G::GeometryCollection(GeometryCollection::new(vec![
            square(0.0, 1.0),
            square(3.0, 4.0),
        ]));

        let result = eval(&square(0.0, 4.0), &collection);
        assert_matches!(result, G::Polygon(_));
        assert_abs_diff_eq!(area(&result), 14.0, epsilon = 1e-12);
    }

    #[test]
    fn collection_minus_geometry() {
        let collection = G::GeometryCollection(GeometryCollection::new(vec![
            square(0.0, 2.0),
            G::Point(Point::new(1.0, 1.0)),
            G::Point(Point::new(9.0, 9.0)),
        ]));

        let result = eval(&collection, &square(1.0, 3.0));
        let G::GeometryCollection(result) = result else {
            panic!("expected a collection");
        };
        assert_eq!(result.len(), 2);
        assert_abs_diff_eq!(area(&result.members()[0]), 3.0, epsilon = 1e-12);
        assert_eq!(result.members()[1], G::Point(Point::new(9.0, 9.0)));
    }
}

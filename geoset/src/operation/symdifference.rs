use geoset_types::{CoordinateSpace, Geom, Geometry};

use super::{eval_pair, log_pair, Difference, PairOperation, SetOperation};
use crate::error::SetOpError;
use crate::normalize::Parts;
use crate::overlay::Overlay;
use crate::strategy::{OverlayStrategy, StrategyBundle};

/// Points belonging to exactly one of the two geometries: the union of both differences.
#[derive(Debug, Clone, PartialEq)]
pub struct Symdifference {
    strategies: StrategyBundle,
}

impl Symdifference {
    /// Strategies the operation was created with.
    pub fn strategies(&self) -> &StrategyBundle {
        &self.strategies
    }
}

impl SetOperation for Symdifference {
    const NAME: &'static str = "symdifference";

    fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            strategies: StrategyBundle::new(semi_major, semi_minor),
        }
    }

    fn eval(&self, g1: &Geometry, g2: &Geometry) -> Result<Geometry, SetOpError> {
        eval_pair::<Self>(&self.strategies, g1, g2)
    }
}

impl PairOperation for Symdifference {
    fn apply<St: OverlayStrategy, S: CoordinateSpace>(
        ov: &Overlay<'_, St>,
        g1: &Geom<S>,
        g2: &Geom<S>,
    ) -> Result<Parts, SetOpError> {
        log_pair(Self::NAME, g1, g2);

        let first = Difference::apply(ov, g1, g2)?;
        let second = Difference::apply(ov, g2, g1)?;
        ov.merge(first, second)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geo::Area;
    use geoset_types::{CartesianSpace2d, GeometryType, Linestring, Point, Polygon, Ring};

    use super::*;

    type G = Geom<CartesianSpace2d>;

    fn eval(g1: &G, g2: &G) -> G {
        let result = Symdifference::new(0.0, 0.0)
            .eval(&Geometry::Cartesian(g1.clone()), &Geometry::Cartesian(g2.clone()))
            .expect("symdifference");
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

    #[test]
    fn overlapping_squares() {
        let result = eval(&square(0.0, 2.0), &square(1.0, 3.0));
        assert_matches!(result, G::MultiPolygon(ref m) if m.polygons().len() == 2);
        assert_abs_diff_eq!(
            geo_types::Geometry::from(&result).unsigned_area(),
            6.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn same_geometry_gives_empty_collection() {
        let result = eval(&square(0.0, 2.0), &square(0.0, 2.0));
        assert_matches!(result, G::GeometryCollection(c) if c.is_empty());
    }

    #[test]
    fn mixed_dimensions() {
        let line = G::Linestring(Linestring::new([(1.0, 1.0), (4.0, 1.0)]));
        let result = eval(&square(0.0, 2.0), &line);

        let G::GeometryCollection(result) = result else {
            panic!("expected a collection");
        };
        let types: Vec<_> = result.members().iter().map(G::geometry_type).collect();
        assert_eq!(types, vec![GeometryType::Polygon, GeometryType::Linestring]);

        let result = eval(&G::Point(Point::new(1.0, 1.0)), &G::Point(Point::new(2.0, 2.0)));
        assert_matches!(result, G::MultiPoint(m) if m.len() == 2);
    }
}

use geo_types::Coord;

use super::{collect_runs, AreaRings, Overlay, OverlayOp, Path};
use crate::normalize::Parts;
use crate::strategy::{OverlayStrategy, PointLocation};

impl<St: OverlayStrategy> Overlay<'_, St> {
    /// Intersection or difference of two sets of lines.
    ///
    /// The lines of `a` are split at every point where they meet `b`, and each piece is kept or dropped depending on
    /// whether its midpoint lies on `b`. Kept consecutive pieces are merged back into linestrings. Intersection also
    /// returns the meeting points that are not covered by the resulting linestrings.
    pub(crate) fn lines_lines<L: AsRef<[Coord]>, M: AsRef<[Coord]>>(
        &self,
        op: OverlayOp,
        a: &[L],
        b: &[M],
    ) -> Parts {
        let noded = self.node(open_paths(a), open_paths(b));
        let b_lines: Vec<&[Coord]> = noded.b.iter().map(|p| p.coords.as_slice()).collect();

        let lines = self.select_pieces(&noded.a, |mid| {
            let on_b = self.point_on_lines(mid, &b_lines);
            match op {
                OverlayOp::Intersection => on_b,
                _ => !on_b,
            }
        });

        let mut parts = Parts::from_lines(lines);
        if op == OverlayOp::Intersection {
            parts.points = self.filter_points(&noded.contacts, |p| {
                !self.point_on_lines(p, &parts.lines)
            });
        }

        parts
    }

    /// Intersection or difference of lines and areas.
    ///
    /// The lines are split at the area boundaries, pieces are kept or dropped by the location of their midpoints.
    /// Intersection also returns isolated points where lines touch the areas.
    pub(crate) fn lines_areas<L: AsRef<[Coord]>, A: AreaRings>(
        &self,
        op: OverlayOp,
        lines: &[L],
        areas: &[A],
    ) -> Parts {
        let boundaries: Vec<Path> = areas
            .iter()
            .flat_map(|area| area.ring_coords().map(Path::ring).collect::<Vec<_>>())
            .collect();
        let noded = self.node(open_paths(lines), boundaries);

        let lines = self.select_pieces(&noded.a, |mid| {
            let location = self.locate_in_areas(mid, areas);
            match op {
                OverlayOp::Intersection => location != PointLocation::Outside,
                _ => location == PointLocation::Outside,
            }
        });

        let mut parts = Parts::from_lines(lines);
        if op == OverlayOp::Intersection {
            parts.points = self.filter_points(&noded.contacts, |p| {
                !self.point_on_lines(p, &parts.lines)
            });
        }

        parts
    }

    fn select_pieces(&self, paths: &[Path], keep: impl Fn(Coord) -> bool) -> Vec<Vec<Coord>> {
        let mut result = vec![];
        for path in paths {
            let edges: Vec<(Coord, Coord)> = path.sub_edges().collect();
            let flags: Vec<bool> = edges
                .iter()
                .map(|(from, to)| keep(self.midpoint(*from, *to)))
                .collect();

            result.extend(collect_runs(&edges, &flags, path.is_loop()));
        }

        result
    }
}

fn open_paths<L: AsRef<[Coord]>>(lines: &[L]) -> Vec<Path> {
    lines.iter().map(|l| Path::open(l.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use geo_types::coord;
    use geoset_types::{CartesianSpace2d, Polygon, Ring};

    use super::*;
    use crate::strategy::CartesianStrategies;

    fn line(coords: &[(f64, f64)]) -> Vec<Coord> {
        coords.iter().map(|(x, y)| coord! { x: *x, y: *y }).collect()
    }

    fn square(min: f64, max: f64) -> Polygon<CartesianSpace2d> {
        Polygon::from(Ring::new([(min, min), (max, min), (max, max), (min, max)]))
    }

    #[test]
    fn collinear_overlap() {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);

        let a = [line(&[(0.0, 0.0), (2.0, 0.0)])];
        let b = [line(&[(1.0, 0.0), (3.0, 0.0)])];

        let result = overlay.lines_lines(OverlayOp::Intersection, &a, &b);
        assert_eq!(result.lines, vec![line(&[(1.0, 0.0), (2.0, 0.0)])]);
        assert!(result.points.is_empty());

        let result = overlay.lines_lines(OverlayOp::Difference, &a, &b);
        assert_eq!(result.lines, vec![line(&[(0.0, 0.0), (1.0, 0.0)])]);
        assert!(result.points.is_empty());
    }

    #[test]
    fn crossing_lines_give_point() {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);

        let a = [line(&[(0.0, 0.0), (2.0, 2.0)])];
        let b = [line(&[(0.0, 2.0), (2.0, 0.0)])];

        let result = overlay.lines_lines(OverlayOp::Intersection, &a, &b);
        assert!(result.lines.is_empty());
        assert_eq!(result.points, vec![coord! { x: 1.0, y: 1.0 }]);

        let result = overlay.lines_lines(OverlayOp::Difference, &a, &b);
        assert_eq!(
            result.lines,
            vec![line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])]
        );
    }

    #[test]
    fn line_through_area() {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);

        let lines = [line(&[(-1.0, 1.0), (3.0, 1.0)])];
        let areas = [square(0.0, 2.0)];

        let inside = overlay.lines_areas(OverlayOp::Intersection, &lines, &areas);
        assert_eq!(inside.lines, vec![line(&[(0.0, 1.0), (2.0, 1.0)])]);
        assert!(inside.points.is_empty());

        let outside = overlay.lines_areas(OverlayOp::Difference, &lines, &areas);
        assert_eq!(
            outside.lines,
            vec![line(&[(-1.0, 1.0), (0.0, 1.0)]), line(&[(2.0, 1.0), (3.0, 1.0)])]
        );
    }

    #[test]
    fn line_touching_area_corner() {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);

        let lines = [line(&[(2.0, 4.0), (4.0, 2.0), (2.0, 2.0)])];
        let areas = [square(0.0, 2.0)];

        let result = overlay.lines_areas(OverlayOp::Intersection, &lines, &areas);
        assert!(result.lines.is_empty());
        assert_eq!(result.points, vec![coord! { x: 2.0, y: 2.0 }]);
    }
}

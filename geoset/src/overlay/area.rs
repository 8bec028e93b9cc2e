use std::f64::consts::TAU;

use ahash::{HashMap, HashMapExt};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

use super::{collect_runs, AreaRings, Overlay, OverlayOp, Path};
use crate::error::SetOpError;
use crate::normalize::{Area, Parts};
use crate::strategy::{
    IntersectionStrategy, OverlayStrategy, PointLocation, WindingStrategy, SIDE_EPSILON,
};

/// Position of a boundary edge of one operand relative to the other operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EdgeClass {
    Inside,
    Outside,
    /// The edge is also an edge of the other operand, with the interiors of both on the same side.
    SharedSame,
    /// The edge is also an edge of the other operand, with the interiors on opposite sides.
    SharedOpposite,
}

type Edge = (Coord, Coord);

type NodeKey = (u64, u64);

fn node_key(c: Coord) -> NodeKey {
    // -0.0 and 0.0 are the same node
    let normalize = |v: f64| if v == 0.0 { 0.0f64 } else { v };
    (normalize(c.x).to_bits(), normalize(c.y).to_bits())
}

/// Boundaries of two operands noded against each other, with the edges of the first one classified relative to the
/// second one.
struct EdgeGraph {
    edges_a: Vec<Vec<Edge>>,
    classes_a: Vec<Vec<EdgeClass>>,
    flat_a: Vec<Edge>,
    flat_b: Vec<Edge>,
    contacts: Vec<Coord>,
}

/// Planar polygons with closed rings, skipping empty areas.
fn to_multi_polygon<A: AreaRings>(areas: &[A]) -> MultiPolygon<f64> {
    let polygons = areas
        .iter()
        .filter_map(|area| {
            let mut rings = area
                .ring_coords()
                .filter(|ring| !ring.is_empty())
                .map(|ring| LineString::from(ring.to_vec()));
            let exterior = rings.next()?;
            Some(Polygon::new(exterior, rings.collect()))
        })
        .collect();

    MultiPolygon::new(polygons)
}

fn open_ring(line: &LineString<f64>) -> Vec<Coord> {
    let mut coords = line.0.clone();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}

impl<St: OverlayStrategy> Overlay<'_, St> {
    /// Polygon overlay of two sets of non-overlapping areas.
    ///
    /// Areas are computed by the polygon kernel of the strategy if it has one, and by [`Self::select_edges`]
    /// otherwise. Intersection also returns the lower dimensional contacts: shared edges with the interiors on opposite
    /// sides become linestrings, isolated touching points become points.
    pub(crate) fn areas_areas<A: AreaRings, B: AreaRings>(
        &self,
        op: OverlayOp,
        a: &[A],
        b: &[B],
    ) -> Result<Parts, SetOpError> {
        let kernel = self
            .st
            .overlay_polygons(op, &to_multi_polygon(a), &to_multi_polygon(b));

        let parts = match kernel {
            None => self.select_edges(op, a, b)?,
            Some(result) => {
                let mut parts = Parts::from_polygons(self.kernel_areas(&result)?);
                if op == OverlayOp::Intersection {
                    let graph = self.edge_graph(a, b);
                    self.add_contacts(&graph, &mut parts);
                }
                parts
            }
        };

        log::trace!(
            "{op:?} overlay: {} areas, {} lines, {} points",
            parts.polygons.len(),
            parts.lines.len(),
            parts.points.len()
        );

        Ok(parts)
    }

    /// Polygon overlay by edge selection.
    ///
    /// Both boundaries are oriented so that the interior is on the left of every edge (exterior rings
    /// counterclockwise, holes clockwise), noded against each other, and every sub-edge is classified by its position
    /// relative to the other operand. The edges selected for the operation are then assembled into rings.
    fn select_edges<A: AreaRings, B: AreaRings>(
        &self,
        op: OverlayOp,
        a: &[A],
        b: &[B],
    ) -> Result<Parts, SetOpError> {
        let graph = self.edge_graph(a, b);

        let mut selected = vec![];
        for (edge, class) in graph.flat_a.iter().zip(graph.classes_a.iter().flatten()) {
            let keep = match op {
                OverlayOp::Intersection => {
                    matches!(class, EdgeClass::Inside | EdgeClass::SharedSame)
                }
                OverlayOp::Union => matches!(class, EdgeClass::Outside | EdgeClass::SharedSame),
                OverlayOp::Difference => {
                    matches!(class, EdgeClass::Outside | EdgeClass::SharedOpposite)
                }
            };
            if keep {
                selected.push(*edge);
            }
        }

        // Shared edges are taken from `a` only.
        for edge in &graph.flat_b {
            let class = self.classify(*edge, a, &graph.flat_a);
            match (op, class) {
                (OverlayOp::Intersection, EdgeClass::Inside) => selected.push(*edge),
                (OverlayOp::Union, EdgeClass::Outside) => selected.push(*edge),
                (OverlayOp::Difference, EdgeClass::Inside) => selected.push((edge.1, edge.0)),
                _ => {}
            }
        }

        let rings = self.assemble_rings(&selected)?;
        let mut parts = Parts::from_polygons(self.build_areas(rings)?);
        if op == OverlayOp::Intersection {
            self.add_contacts(&graph, &mut parts);
        }

        Ok(parts)
    }

    fn edge_graph<A: AreaRings, B: AreaRings>(&self, a: &[A], b: &[B]) -> EdgeGraph {
        let noded = self.node(self.oriented_rings(a), self.oriented_rings(b));

        let edges_a: Vec<Vec<Edge>> = noded.a.iter().map(|p| p.sub_edges().collect()).collect();
        let edges_b: Vec<Vec<Edge>> = noded.b.iter().map(|p| p.sub_edges().collect()).collect();
        let flat_a: Vec<Edge> = edges_a.iter().flatten().copied().collect();
        let flat_b: Vec<Edge> = edges_b.iter().flatten().copied().collect();

        let classes_a = edges_a
            .iter()
            .map(|ring| ring.iter().map(|e| self.classify(*e, b, &flat_b)).collect())
            .collect();

        EdgeGraph {
            edges_a,
            classes_a,
            flat_a,
            flat_b,
            contacts: noded.contacts,
        }
    }

    /// Adds shared edges with the interiors on opposite sides as lines, and touching points not covered by the result
    /// as points.
    fn add_contacts(&self, graph: &EdgeGraph, parts: &mut Parts) {
        for (ring, classes) in graph.edges_a.iter().zip(&graph.classes_a) {
            let flags: Vec<bool> = classes
                .iter()
                .map(|c| *c == EdgeClass::SharedOpposite)
                .collect();
            parts.lines.extend(collect_runs(ring, &flags, true));
        }

        parts.points = self.filter_points(&graph.contacts, |p| {
            !self.point_in_areas(p, &parts.polygons) && !self.point_on_lines(p, &parts.lines)
        });
    }

    /// Brings kernel output to the form produced by edge selection: rings are reoriented, rings touching at a vertex
    /// are traced separately and redundant vertices are removed.
    fn kernel_areas(&self, result: &MultiPolygon<f64>) -> Result<Vec<Area>, SetOpError> {
        let areas: Vec<Area> = result
            .iter()
            .map(|polygon| {
                let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
                Area::new(rings.map(open_ring).filter(|ring| !ring.is_empty()).collect())
            })
            .collect();

        let paths = self.oriented_rings(&areas);
        let edges: Vec<Edge> = paths.iter().flat_map(|path| path.sub_edges()).collect();
        self.build_areas(self.assemble_rings(&edges)?)
    }

    /// Rings of the areas with exterior rings turned counterclockwise and holes clockwise.
    fn oriented_rings<A: AreaRings>(&self, areas: &[A]) -> Vec<Path> {
        let mut paths = vec![];
        for area in areas {
            for (index, ring) in area.ring_coords().enumerate() {
                if ring.is_empty() {
                    continue;
                }

                let area = self.ring_area_signed(ring);
                let reverse = (index == 0 && area < 0.0) || (index > 0 && area > 0.0);
                let mut path = Path::ring(ring);
                if reverse {
                    path.coords.reverse();
                }
                paths.push(path);
            }
        }

        paths
    }

    fn classify<A: AreaRings>(&self, edge: Edge, other: &[A], other_edges: &[Edge]) -> EdgeClass {
        let mid = self.midpoint(edge.0, edge.1);
        match self.locate_in_areas(mid, other) {
            PointLocation::Inside => EdgeClass::Inside,
            PointLocation::Outside => EdgeClass::Outside,
            PointLocation::Boundary => self.classify_shared(edge, mid, other_edges),
        }
    }

    fn classify_shared(&self, edge: Edge, mid: Coord, other_edges: &[Edge]) -> EdgeClass {
        for other in other_edges {
            if self.equals(other.0, edge.0) && self.equals(other.1, edge.1) {
                return EdgeClass::SharedSame;
            }
            if self.equals(other.0, edge.1) && self.equals(other.1, edge.0) {
                return EdgeClass::SharedOpposite;
            }
        }

        // Noding makes shared edges identical, this only handles numerical leftovers.
        let winding = self.st.winding();
        let intersection = self.st.intersection();
        for other in other_edges {
            if winding.on_segment(other.0, other.1, mid) {
                let from = intersection.fraction(other.0, other.1, edge.0);
                let to = intersection.fraction(other.0, other.1, edge.1);
                return if to >= from {
                    EdgeClass::SharedSame
                } else {
                    EdgeClass::SharedOpposite
                };
            }
        }

        EdgeClass::SharedSame
    }

    /// Links directed edges into closed rings. At a node with several outgoing edges the one making the sharpest left
    /// turn is taken, so rings touching at a vertex are traced separately.
    fn assemble_rings(&self, edges: &[Edge]) -> Result<Vec<Vec<Coord>>, SetOpError> {
        let intersection = self.st.intersection();

        let mut outgoing: HashMap<NodeKey, Vec<usize>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            outgoing.entry(node_key(edge.0)).or_default().push(index);
        }

        let mut used = vec![false; edges.len()];
        let mut rings = vec![];

        for start in 0..edges.len() {
            if used[start] {
                continue;
            }

            let mut ring = vec![];
            let mut current = start;
            loop {
                used[current] = true;
                let (from, to) = edges[current];
                ring.push(from);

                let back = intersection.direction(to, from);
                let next = outgoing
                    .get(&node_key(to))
                    .into_iter()
                    .flatten()
                    .copied()
                    .filter(|candidate| !used[*candidate] || *candidate == start)
                    .map(|candidate| {
                        let out = intersection.direction(to, edges[candidate].1);
                        (candidate, left_turn(back, out))
                    })
                    .max_by(|a, b| a.1.total_cmp(&b.1));

                match next {
                    Some((candidate, _)) if candidate == start => break,
                    Some((candidate, _)) => current = candidate,
                    None => {
                        return Err(SetOpError::Overlay(format!(
                            "result ring is not closed at ({}, {})",
                            to.x, to.y
                        )))
                    }
                }
            }

            rings.push(ring);
        }

        Ok(rings)
    }

    /// Removes repeated vertices, spikes and vertices in the middle of straight runs.
    fn simplify_ring(&self, mut ring: Vec<Coord>) -> Vec<Coord> {
        let winding = self.st.winding();
        loop {
            let count = ring.len();
            if count < 3 {
                return ring;
            }

            let redundant = (0..count).find(|&i| {
                let prev = ring[(i + count - 1) % count];
                let current = ring[i];
                let next = ring[(i + 1) % count];

                winding.equals(current, next)
                    || winding.equals(prev, next)
                    || winding.on_segment(prev, next, current)
            });

            match redundant {
                Some(index) => {
                    ring.remove(index);
                }
                None => return ring,
            }
        }
    }

    /// Turns assembled rings into areas: counterclockwise rings are shells, clockwise rings are holes assigned to the
    /// smallest shell containing them.
    fn build_areas(&self, rings: Vec<Vec<Coord>>) -> Result<Vec<Area>, SetOpError> {
        let mut shells: Vec<(Vec<Coord>, f64)> = vec![];
        let mut holes = vec![];

        for ring in rings {
            let ring = self.simplify_ring(ring);
            if ring.len() < 3 {
                continue;
            }

            let area = self.ring_area_signed(&ring);
            if area > 0.0 {
                shells.push((ring, area));
            } else if area < 0.0 {
                holes.push(ring);
            }
        }

        shells.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut areas: Vec<Vec<Vec<Coord>>> = shells.iter().map(|(ring, _)| vec![ring.clone()]).collect();

        for hole in holes {
            let owner = shells
                .iter()
                .position(|(shell, _)| self.ring_contains_ring(shell, &hole));
            match owner {
                Some(index) => areas[index].push(hole),
                None => {
                    return Err(SetOpError::Overlay(format!(
                        "hole starting at ({}, {}) is outside of any shell",
                        hole[0].x, hole[0].y
                    )))
                }
            }
        }

        Ok(areas.into_iter().map(Area::new).collect())
    }

    fn ring_contains_ring(&self, outer: &[Coord], inner: &[Coord]) -> bool {
        let winding = self.st.winding();
        let count = inner.len();
        let vertices = inner.iter().copied();
        let midpoints = (0..count).map(|i| self.midpoint(inner[i], inner[(i + 1) % count]));

        for p in vertices.chain(midpoints) {
            match winding.locate_in_ring(outer, p) {
                PointLocation::Inside => return true,
                PointLocation::Outside => return false,
                PointLocation::Boundary => {}
            }
        }

        false
    }
}

/// Counterclockwise angle from the direction back along the incoming edge to the outgoing direction. Going back along
/// the same edge is the least preferred turn.
fn left_turn(back: f64, out: f64) -> f64 {
    let turn = (out - back).rem_euclid(TAU);
    if turn <= SIDE_EPSILON || TAU - turn <= SIDE_EPSILON {
        0.0
    } else {
        turn
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geo_types::coord;
    use geoset_types::{CartesianSpace2d, Polygon, Ring};

    use super::*;
    use crate::strategy::CartesianStrategies;

    type Square = Polygon<CartesianSpace2d>;

    fn square(min_x: f64, min_y: f64, size: f64) -> Square {
        Polygon::from(Ring::new([
            (min_x, min_y),
            (min_x + size, min_y),
            (min_x + size, min_y + size),
            (min_x, min_y + size),
        ]))
    }

    /// Results of the polygon kernel and of edge selection.
    fn overlays(op: OverlayOp, a: &[Square], b: &[Square]) -> [Parts; 2] {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);
        [
            overlay.areas_areas(op, a, b).expect("kernel overlay"),
            overlay.select_edges(op, a, b).expect("edge selection"),
        ]
    }

    fn total_area(parts: &Parts) -> f64 {
        let st = CartesianStrategies::cartesian();
        parts
            .polygons
            .iter()
            .flat_map(|area| area.rings().iter())
            .map(|ring| st.winding().ring_area_signed(ring))
            .sum()
    }

    #[test]
    fn overlapping_squares() {
        let a = [square(0.0, 0.0, 2.0)];
        let b = [square(1.0, 1.0, 2.0)];

        for intersection in overlays(OverlayOp::Intersection, &a, &b) {
            assert_eq!(intersection.polygons.len(), 1);
            assert_eq!(intersection.polygons[0].rings()[0].len(), 4);
            assert_abs_diff_eq!(total_area(&intersection), 1.0, epsilon = 1e-12);
            assert!(intersection.lines.is_empty());
            assert!(intersection.points.is_empty());
        }

        for union in overlays(OverlayOp::Union, &a, &b) {
            assert_eq!(union.polygons.len(), 1);
            assert_eq!(union.polygons[0].rings()[0].len(), 8);
            assert_abs_diff_eq!(total_area(&union), 7.0, epsilon = 1e-12);
        }

        for difference in overlays(OverlayOp::Difference, &a, &b) {
            assert_eq!(difference.polygons.len(), 1);
            assert_eq!(difference.polygons[0].rings()[0].len(), 6);
            assert_abs_diff_eq!(total_area(&difference), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn difference_creates_hole() {
        let a = [square(0.0, 0.0, 4.0)];
        let b = [square(1.0, 1.0, 2.0)];

        for result in overlays(OverlayOp::Difference, &a, &b) {
            assert_eq!(result.polygons.len(), 1);
            assert_eq!(result.polygons[0].rings().len(), 2);
            assert_abs_diff_eq!(total_area(&result), 12.0, epsilon = 1e-12);
        }

        for result in overlays(OverlayOp::Difference, &b, &a) {
            assert!(result.is_empty());
        }
    }

    #[test]
    fn disjoint_union() {
        let a = [square(0.0, 0.0, 1.0)];
        let b = [square(5.0, 5.0, 1.0)];

        for union in overlays(OverlayOp::Union, &a, &b) {
            assert_eq!(union.polygons.len(), 2);
            assert_abs_diff_eq!(total_area(&union), 2.0, epsilon = 1e-12);
        }

        for intersection in overlays(OverlayOp::Intersection, &a, &b) {
            assert!(intersection.is_empty());
        }
    }

    #[test]
    fn edge_touching_squares() {
        let a = [square(0.0, 0.0, 1.0)];
        let b = [square(1.0, 0.0, 1.0)];

        for intersection in overlays(OverlayOp::Intersection, &a, &b) {
            assert!(intersection.polygons.is_empty());
            assert!(intersection.points.is_empty());
            assert_eq!(intersection.lines.len(), 1);
            let line = &intersection.lines[0];
            assert_eq!(line.len(), 2);
            assert!(line.contains(&coord! { x: 1.0, y: 0.0 }));
            assert!(line.contains(&coord! { x: 1.0, y: 1.0 }));
        }

        for union in overlays(OverlayOp::Union, &a, &b) {
            assert_eq!(union.polygons.len(), 1);
            assert_eq!(union.polygons[0].rings()[0].len(), 4);
            assert_abs_diff_eq!(total_area(&union), 2.0, epsilon = 1e-12);
        }

        for difference in overlays(OverlayOp::Difference, &a, &b) {
            assert_eq!(difference.polygons.len(), 1);
            assert_abs_diff_eq!(total_area(&difference), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn corner_touching_squares() {
        let a = [square(0.0, 0.0, 1.0)];
        let b = [square(1.0, 1.0, 1.0)];

        for intersection in overlays(OverlayOp::Intersection, &a, &b) {
            assert!(intersection.polygons.is_empty());
            assert!(intersection.lines.is_empty());
            assert_eq!(intersection.points, vec![coord! { x: 1.0, y: 1.0 }]);
        }

        for union in overlays(OverlayOp::Union, &a, &b) {
            assert_eq!(union.polygons.len(), 2);
            assert_abs_diff_eq!(total_area(&union), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn identical_squares() {
        let a = [square(0.0, 0.0, 1.0)];

        for intersection in overlays(OverlayOp::Intersection, &a, &a) {
            assert_eq!(intersection.polygons.len(), 1);
            assert_abs_diff_eq!(total_area(&intersection), 1.0, epsilon = 1e-12);
            assert!(intersection.lines.is_empty());
        }

        for difference in overlays(OverlayOp::Difference, &a, &a) {
            assert!(difference.is_empty());
        }
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let cw = Polygon::<CartesianSpace2d>::from(Ring::new([
            (0.0, 0.0),
            (0.0, 2.0),
            (2.0, 2.0),
            (2.0, 0.0),
        ]));
        let b = [square(1.0, 1.0, 2.0)];

        for intersection in overlays(OverlayOp::Intersection, &[cw], &b) {
            assert_abs_diff_eq!(total_area(&intersection), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn kernel_output_is_normalized() {
        let st = CartesianStrategies::cartesian();
        let overlay = Overlay::new(&st);

        // Clockwise shell with a collinear vertex and a counterclockwise hole.
        let raw = MultiPolygon::new(vec![geo_types::Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (0.0, 4.0),
                (4.0, 4.0),
                (4.0, 2.0),
                (4.0, 0.0),
            ]),
            vec![LineString::from(vec![
                (1.0, 1.0),
                (2.0, 1.0),
                (2.0, 2.0),
                (1.0, 2.0),
            ])],
        )]);

        let areas = overlay.kernel_areas(&raw).expect("areas");
        assert_eq!(areas.len(), 1);
        let rings = areas[0].rings();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 4);
        assert!(st.winding().ring_area_signed(&rings[0]) > 0.0);
        assert!(st.winding().ring_area_signed(&rings[1]) < 0.0);
    }

    #[test]
    fn left_turn_prefers_sharpest_left() {
        use std::f64::consts::{FRAC_PI_2, PI};

        // Arriving northwards, the way back points south.
        let back = -FRAC_PI_2;
        assert!(left_turn(back, PI) > left_turn(back, FRAC_PI_2));
        assert!(left_turn(back, FRAC_PI_2) > left_turn(back, 0.0));
        assert_eq!(left_turn(back, back), 0.0);
    }
}

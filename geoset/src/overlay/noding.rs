use geo_types::{Coord, Rect};

use super::Overlay;
use crate::strategy::{
    envelopes_intersect, IntersectionStrategy, OverlayStrategy, SegmentIntersection,
    WindingStrategy,
};

/// Sequence of vertices. A closed path (ring) has an implicit segment from the last vertex to the first one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Path {
    pub coords: Vec<Coord>,
    pub closed: bool,
}

impl Path {
    pub fn open(coords: &[Coord]) -> Self {
        Self {
            coords: coords.to_vec(),
            closed: false,
        }
    }

    pub fn ring(coords: &[Coord]) -> Self {
        Self {
            coords: coords.to_vec(),
            closed: true,
        }
    }

    pub fn segment_count(&self) -> usize {
        match self.coords.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    pub fn segment(&self, index: usize) -> (Coord, Coord) {
        let next = (index + 1) % self.coords.len();
        (self.coords[index], self.coords[next])
    }

    pub fn sub_edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        (0..self.segment_count()).map(|i| self.segment(i))
    }

    /// True for rings, and for open paths ending where they start.
    pub fn is_loop(&self) -> bool {
        self.closed || (self.coords.len() > 2 && self.coords.first() == self.coords.last())
    }
}

/// Nodes of the overlay graph. New points equal to an existing node are replaced by that node, so every point of the
/// graph has exactly one representation.
struct NodeSet<'a, W> {
    winding: &'a W,
    nodes: Vec<Coord>,
}

impl<'a, W: WindingStrategy> NodeSet<'a, W> {
    fn new(winding: &'a W) -> Self {
        Self {
            winding,
            nodes: vec![],
        }
    }

    fn snap(&mut self, c: Coord) -> Coord {
        if let Some(node) = self.nodes.iter().find(|n| self.winding.equals(**n, c)) {
            return *node;
        }

        self.nodes.push(c);
        c
    }

    fn snap_path(&mut self, path: Path) -> Path {
        let mut coords: Vec<Coord> = Vec::with_capacity(path.coords.len());
        for c in path.coords {
            let c = self.snap(c);
            if coords.last() != Some(&c) {
                coords.push(c);
            }
        }

        if path.closed && coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }

        Path {
            coords,
            closed: path.closed,
        }
    }
}

/// Two groups of paths split at all their mutual intersection points.
#[derive(Debug)]
pub(crate) struct Noded {
    pub a: Vec<Path>,
    pub b: Vec<Path>,
    /// Distinct points where paths of `a` meet paths of `b`.
    pub contacts: Vec<Coord>,
}

impl<St: OverlayStrategy> Overlay<'_, St> {
    /// Inserts the intersection points of every segment of `a` with every segment of `b` into both of them.
    ///
    /// All vertices and intersection points are snapped to common nodes first. Self-intersections inside one group are
    /// not computed.
    pub(crate) fn node(&self, a: Vec<Path>, b: Vec<Path>) -> Noded {
        let mut nodes = NodeSet::new(self.st.winding());
        let a: Vec<Path> = a.into_iter().map(|p| nodes.snap_path(p)).collect();
        let b: Vec<Path> = b.into_iter().map(|p| nodes.snap_path(p)).collect();

        let mut splits_a = empty_splits(&a);
        let mut splits_b = empty_splits(&b);
        let envelopes_b: Vec<Vec<Rect<f64>>> = b
            .iter()
            .map(|path| {
                path.sub_edges()
                    .map(|(from, to)| self.st.intersection().envelope(from, to))
                    .collect()
            })
            .collect();

        let mut contacts = vec![];
        for (path_a_idx, path_a) in a.iter().enumerate() {
            for segment_a_idx in 0..path_a.segment_count() {
                let (a0, a1) = path_a.segment(segment_a_idx);
                let envelope_a = self.st.intersection().envelope(a0, a1);

                for (path_b_idx, path_b) in b.iter().enumerate() {
                    for segment_b_idx in 0..path_b.segment_count() {
                        if !envelopes_intersect(&envelope_a, &envelopes_b[path_b_idx][segment_b_idx]) {
                            continue;
                        }

                        let (b0, b1) = path_b.segment(segment_b_idx);
                        let points = match self.st.intersect(a0, a1, b0, b1) {
                            SegmentIntersection::None => continue,
                            SegmentIntersection::Point(p) => vec![p],
                            SegmentIntersection::Overlap(p, q) => vec![p, q],
                        };

                        for p in points {
                            let p = nodes.snap(p);
                            splits_a[path_a_idx][segment_a_idx].push(p);
                            splits_b[path_b_idx][segment_b_idx].push(p);
                            self.push_unique(&mut contacts, p);
                        }
                    }
                }
            }
        }

        log::trace!(
            "noded {} and {} paths, {} contact points",
            a.len(),
            b.len(),
            contacts.len()
        );

        Noded {
            a: self.split_paths(a, splits_a),
            b: self.split_paths(b, splits_b),
            contacts,
        }
    }

    fn split_paths(&self, paths: Vec<Path>, splits: Vec<Vec<Vec<Coord>>>) -> Vec<Path> {
        paths
            .into_iter()
            .zip(splits)
            .map(|(path, splits)| self.split_path(path, splits))
            .collect()
    }

    fn split_path(&self, path: Path, splits: Vec<Vec<Coord>>) -> Path {
        let intersection = self.st.intersection();
        let mut coords = Vec::with_capacity(path.coords.len() + splits.len());

        for (index, mut points) in splits.into_iter().enumerate() {
            let (from, to) = path.segment(index);
            points.sort_by(|p, q| {
                intersection
                    .fraction(from, to, *p)
                    .total_cmp(&intersection.fraction(from, to, *q))
            });

            self.push_distinct(&mut coords, from);
            for p in points {
                self.push_distinct(&mut coords, p);
            }
        }

        if path.closed {
            if coords.len() > 1 && coords.first() == coords.last() {
                coords.pop();
            }
        } else if let Some(last) = path.coords.last() {
            self.push_distinct(&mut coords, *last);
        }

        Path {
            coords,
            closed: path.closed,
        }
    }
}

fn empty_splits(paths: &[Path]) -> Vec<Vec<Vec<Coord>>> {
    paths
        .iter()
        .map(|path| vec![vec![]; path.segment_count()])
        .collect()
}

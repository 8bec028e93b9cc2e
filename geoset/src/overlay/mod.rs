//! Overlay engine: noding of linework, point location, polygon overlay and linework set operations.
//!
//! All computations are generic over [`OverlayStrategy`], so the same code runs on the plane and on the ellipsoid.
//! Polygon overlay is delegated to the polygon kernel of the strategy when it has one.
//! Results are accumulated into [`Parts`](crate::normalize::Parts).

use geo_types::Coord;

use crate::strategy::{IntersectionStrategy, OverlayStrategy, WindingStrategy};

mod area;
mod linework;
mod location;
mod merge;
mod noding;

pub(crate) use crate::strategy::OverlayOp;
pub(crate) use location::AreaRings;
pub(crate) use noding::Path;

/// Overlay kernels bound to the strategies of one coordinate system.
#[derive(Debug)]
pub(crate) struct Overlay<'a, St> {
    st: &'a St,
}

impl<'a, St: OverlayStrategy> Overlay<'a, St> {
    pub(crate) fn new(st: &'a St) -> Self {
        Self { st }
    }

    pub(crate) fn equals(&self, a: Coord, b: Coord) -> bool {
        self.st.winding().equals(a, b)
    }

    fn midpoint(&self, a: Coord, b: Coord) -> Coord {
        self.st.intersection().midpoint(a, b)
    }

    fn ring_area_signed(&self, ring: &[Coord]) -> f64 {
        self.st.winding().ring_area_signed(ring)
    }

    /// Appends the coordinate unless it is equal to one already in the list.
    fn push_unique(&self, coords: &mut Vec<Coord>, c: Coord) {
        if !coords.iter().any(|existing| self.equals(*existing, c)) {
            coords.push(c);
        }
    }

    /// Appends the coordinate unless it is equal to the last one in the list.
    fn push_distinct(&self, coords: &mut Vec<Coord>, c: Coord) {
        match coords.last() {
            Some(last) if self.equals(*last, c) => {}
            _ => coords.push(c),
        }
    }

    /// Keeps the points satisfying the predicate, dropping duplicates.
    pub(crate) fn filter_points(
        &self,
        points: &[Coord],
        predicate: impl Fn(Coord) -> bool,
    ) -> Vec<Coord> {
        let mut result = vec![];
        for p in points {
            if predicate(*p) {
                self.push_unique(&mut result, *p);
            }
        }

        result
    }
}

/// Splits a sequence of consecutive edges into runs of kept edges, each run becoming a linestring.
///
/// For closed sequences a run going through the end of the sequence continues with the run at its start.
fn collect_runs(edges: &[(Coord, Coord)], keep: &[bool], closed: bool) -> Vec<Vec<Coord>> {
    let mut runs: Vec<Vec<Coord>> = vec![];
    let mut current: Option<Vec<Coord>> = None;

    for (edge, kept) in edges.iter().zip(keep) {
        if *kept {
            match &mut current {
                Some(run) => run.push(edge.1),
                None => current = Some(vec![edge.0, edge.1]),
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }

    if let Some(run) = current {
        runs.push(run);
    }

    let wraps = closed
        && runs.len() > 1
        && keep.first().copied().unwrap_or(false)
        && keep.last().copied().unwrap_or(false);
    if wraps {
        if let Some(mut last) = runs.pop() {
            let first = runs.remove(0);
            last.extend(first.into_iter().skip(1));
            runs.insert(0, last);
        }
    }

    runs
}

use geo_types::Coord;

use super::{Overlay, OverlayOp};
use crate::error::SetOpError;
use crate::normalize::{Area, Parts};
use crate::strategy::OverlayStrategy;

impl<St: OverlayStrategy> Overlay<'_, St> {
    /// Union of two partial results, with every point covered by at most one part of the output.
    ///
    /// Areas are dissolved together, linework covered by other linework or by areas is removed, and points covered by
    /// anything of higher dimension are dropped.
    pub(crate) fn merge(&self, a: Parts, b: Parts) -> Result<Parts, SetOpError> {
        if a.is_empty() {
            return Ok(b);
        }
        if b.is_empty() {
            return Ok(a);
        }

        let mut polygons: Vec<Area> = vec![];
        for area in a.polygons.into_iter().chain(b.polygons) {
            if polygons.is_empty() {
                polygons.push(area);
            } else {
                polygons = self
                    .areas_areas(OverlayOp::Union, &polygons, &[area])?
                    .polygons;
            }
        }

        let mut lines: Vec<Vec<Coord>> = vec![];
        for line in a.lines.into_iter().chain(b.lines) {
            let rest = self.lines_lines(OverlayOp::Difference, &[line], &lines);
            lines.extend(rest.lines);
        }
        if !polygons.is_empty() && !lines.is_empty() {
            lines = self
                .lines_areas(OverlayOp::Difference, &lines, &polygons)
                .lines;
        }

        let candidates = [a.points, b.points].concat();
        let points = self.filter_points(&candidates, |p| {
            !self.point_on_lines(p, &lines) && !self.point_in_areas(p, &polygons)
        });

        Ok(Parts {
            points,
            lines,
            polygons,
        })
    }
}

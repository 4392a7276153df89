//! Per-shape geometry: flatten and measure, then place, triangulate and
//! extrude.

use super::report::ConversionReport;
use crate::geometry::Bounds2D;
use crate::ops::{extrude_into, triangulate, ExtrudeParams};
use crate::path::{flatten, Path};
use crate::polygon::{build_polygons, Polygon};
use crate::solid::Facet;
use glam::DVec2;
use tracing::{debug, warn};

/// A flattened shape with its bounds, not yet placed.
#[derive(Debug, Clone)]
pub(crate) struct PreparedShape {
    polygons: Vec<Polygon>,
    bounds: Bounds2D,
}

/// Facets of one placed shape.
#[derive(Debug, Clone, Default)]
pub(crate) struct ShapeMesh {
    pub(crate) facets: Vec<Facet>,
    pub(crate) report: ConversionReport,
}

impl PreparedShape {
    /// Flattens `path` and cuts it into polygons.
    ///
    /// Bounds cover every flattened point, including polygons too short to
    /// triangulate. A shape without points measures as the empty box.
    pub(crate) fn new(path: &Path, tolerance: f64) -> Self {
        let polygons = build_polygons(&flatten(path, tolerance));
        let bounds =
            Bounds2D::from_points(polygons.iter().flat_map(|p| p.points())).unwrap_or_default();
        Self { polygons, bounds }
    }

    #[inline]
    pub(crate) fn bounds(&self) -> &Bounds2D {
        &self.bounds
    }

    /// Moves the shape by `offset` and extrudes each of its polygons.
    pub(crate) fn build(self, index: usize, offset: DVec2, params: &ExtrudeParams) -> ShapeMesh {
        let mut report = ConversionReport {
            shapes: 1,
            ..Default::default()
        };
        let mut facets = Vec::new();

        debug!(
            shape = index,
            polygons = self.polygons.len(),
            offset_x = offset.x,
            offset_y = offset.y,
            "placing shape"
        );

        for (polygon_index, mut polygon) in self.polygons.into_iter().enumerate() {
            report.polygons += 1;

            if !polygon.is_triangulable() {
                report.skipped_polygons += 1;
                debug!(
                    shape = index,
                    polygon = polygon_index,
                    points = polygon.len(),
                    "skipping polygon with fewer than 3 points"
                );
                continue;
            }

            polygon.translate(offset);
            let caps = triangulate(&polygon);
            if !caps.is_complete() {
                report.incomplete_polygons += 1;
                report.unclipped_vertices += caps.unclipped;
                warn!(
                    shape = index,
                    polygon = polygon_index,
                    unclipped = caps.unclipped,
                    "no ear found, polygon is only partially capped"
                );
            }

            extrude_into(&polygon, &caps.triangles, params, &mut facets);
        }

        report.facets = facets.len();
        ShapeMesh { facets, report }
    }
}

//! Conversion diagnostics.

use serde::{Deserialize, Serialize};

/// Counters describing how faithfully a conversion went.
///
/// A conversion never fails on bad geometry; this report is how callers
/// tell a clean result from a degraded one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Shapes (glyphs, rectangles) processed.
    pub shapes: usize,
    /// Subpath polygons built from the flattened outlines.
    pub polygons: usize,
    /// Polygons skipped for having fewer than three points.
    pub skipped_polygons: usize,
    /// Polygons whose triangulation stopped before completion.
    pub incomplete_polygons: usize,
    /// Vertices left over across all incomplete triangulations.
    pub unclipped_vertices: usize,
    /// Facets emitted.
    pub facets: usize,
}

impl ConversionReport {
    /// Returns true if any polygon was only partially capped.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.incomplete_polygons > 0
    }

    /// Adds the counters of `other` to this report.
    pub fn merge(&mut self, other: &ConversionReport) {
        self.shapes += other.shapes;
        self.polygons += other.polygons;
        self.skipped_polygons += other.skipped_polygons;
        self.incomplete_polygons += other.incomplete_polygons;
        self.unclipped_vertices += other.unclipped_vertices;
        self.facets += other.facets;
    }
}

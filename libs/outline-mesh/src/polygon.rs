//! # Polygons
//!
//! Implicitly closed point loops, and the builder that cuts a flattened
//! command stream into one polygon per subpath.

use crate::geometry::Point2D;
use crate::path::FlatCommand;
use serde::{Deserialize, Serialize};

/// An implicitly closed loop of points.
///
/// `points[i]` connects to `points[(i + 1) % n]`; the last point is not a
/// repeat of the first. Insertion order defines the winding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point2D>,
}

impl Polygon {
    /// Creates a polygon from points in boundary order.
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the polygon has enough points to triangulate.
    #[inline]
    pub fn is_triangulable(&self) -> bool {
        self.points.len() >= 3
    }

    /// Boundary edges in source order, including the wrap-around edge.
    ///
    /// Yields nothing for fewer than two points.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        let count = if n >= 2 { n } else { 0 };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(p1, p2)| p1.perp_dot(p2)).sum::<f64>() / 2.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Moves every point by `offset`.
    pub fn translate(&mut self, offset: Point2D) {
        for point in &mut self.points {
            *point += offset;
        }
    }
}

impl From<Vec<Point2D>> for Polygon {
    fn from(points: Vec<Point2D>) -> Self {
        Self::new(points)
    }
}

/// Cuts a flattened command stream into polygons, one per subpath.
///
/// - `MoveTo` flushes a non-empty current loop and starts a new one at the
///   move target.
/// - `LineTo` appends its point.
/// - `Close` flushes the current loop unconditionally.
/// - A non-empty loop left at the end of the stream is flushed as well, so
///   an unclosed subpath still yields a polygon.
///
/// Coincident points are kept.
pub fn build_polygons(commands: &[FlatCommand]) -> Vec<Polygon> {
    let mut polygons = Vec::new();
    let mut current: Vec<Point2D> = Vec::new();

    for command in commands {
        match *command {
            FlatCommand::MoveTo(p) => {
                if !current.is_empty() {
                    polygons.push(Polygon::new(std::mem::take(&mut current)));
                }
                current.push(p);
            }
            FlatCommand::LineTo(p) => current.push(p),
            FlatCommand::Close => {
                polygons.push(Polygon::new(std::mem::take(&mut current)));
            }
        }
    }

    if !current.is_empty() {
        polygons.push(Polygon::new(current));
    }

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn square() -> Polygon {
        Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let ccw = square();
        assert_eq!(ccw.signed_area(), 100.0);

        let cw = Polygon::new(ccw.points().iter().rev().copied().collect());
        assert_eq!(cw.signed_area(), -100.0);
        assert_eq!(cw.area(), 100.0);
    }

    #[test]
    fn test_edges_wrap_around() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (DVec2::new(0.0, 10.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_edges_of_short_polygons() {
        assert_eq!(Polygon::new(vec![DVec2::ONE]).edges().count(), 0);
        assert_eq!(Polygon::new(vec![DVec2::ZERO, DVec2::ONE]).edges().count(), 2);
    }

    #[test]
    fn test_translate() {
        let mut poly = square();
        poly.translate(DVec2::new(5.0, -1.0));
        assert_eq!(poly.points()[0], DVec2::new(5.0, -1.0));
        assert_eq!(poly.points()[2], DVec2::new(15.0, 9.0));
    }

    #[test]
    fn test_build_closed_subpaths() {
        let commands = [
            FlatCommand::MoveTo(DVec2::new(0.0, 0.0)),
            FlatCommand::LineTo(DVec2::new(1.0, 0.0)),
            FlatCommand::LineTo(DVec2::new(1.0, 1.0)),
            FlatCommand::Close,
            FlatCommand::MoveTo(DVec2::new(5.0, 5.0)),
            FlatCommand::LineTo(DVec2::new(6.0, 5.0)),
            FlatCommand::LineTo(DVec2::new(6.0, 6.0)),
            FlatCommand::Close,
        ];
        let polygons = build_polygons(&commands);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 3);
        assert_eq!(polygons[1].points()[0], DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_move_flushes_open_subpath() {
        let commands = [
            FlatCommand::MoveTo(DVec2::new(0.0, 0.0)),
            FlatCommand::LineTo(DVec2::new(1.0, 0.0)),
            FlatCommand::MoveTo(DVec2::new(2.0, 2.0)),
            FlatCommand::LineTo(DVec2::new(3.0, 2.0)),
        ];
        let polygons = build_polygons(&commands);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 2);
        // Flushed at end of stream without a close.
        assert_eq!(polygons[1].len(), 2);
    }

    #[test]
    fn test_close_flushes_even_when_empty() {
        let commands = [
            FlatCommand::MoveTo(DVec2::ZERO),
            FlatCommand::LineTo(DVec2::X),
            FlatCommand::LineTo(DVec2::ONE),
            FlatCommand::Close,
            FlatCommand::Close,
        ];
        let polygons = build_polygons(&commands);
        assert_eq!(polygons.len(), 2);
        assert!(polygons[1].is_empty());
        assert!(!polygons[1].is_triangulable());
    }

    #[test]
    fn test_coincident_points_are_kept() {
        let commands = [
            FlatCommand::MoveTo(DVec2::ZERO),
            FlatCommand::LineTo(DVec2::X),
            FlatCommand::LineTo(DVec2::X),
            FlatCommand::LineTo(DVec2::ONE),
            FlatCommand::LineTo(DVec2::ZERO),
            FlatCommand::Close,
        ];
        let polygons = build_polygons(&commands);
        assert_eq!(polygons[0].len(), 5);
    }

    #[test]
    fn test_empty_stream() {
        assert!(build_polygons(&[]).is_empty());
    }
}

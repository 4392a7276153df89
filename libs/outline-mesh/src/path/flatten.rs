//! # Path Flattening
//!
//! Replaces curve segments with line segments by recursive de Casteljau
//! halving. A cubic is flat once both control points lie within the
//! tolerance of its chord; since the curve stays inside the hull of its
//! control points, the chord then deviates from the curve by no more than
//! the tolerance.
//!
//! Quadratics are degree-elevated to cubics first.

use super::{FlatCommand, Path, PathCommand};
use crate::geometry::Point2D;
use config::constants::{approx_zero, FLATTEN_RECURSION_LIMIT};

/// Flattens `path` so that no emitted line deviates from the original
/// curve by more than `tolerance`.
///
/// Moves, lines and closes pass through unchanged. A curve with no current
/// point starts at the origin.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{flatten, FlatCommand, Path};
/// use glam::DVec2;
///
/// let mut path = Path::new();
/// path.move_to(DVec2::ZERO)
///     .cubic_to(DVec2::new(0.0, 50.0), DVec2::new(50.0, 50.0), DVec2::new(50.0, 0.0))
///     .close();
///
/// let flat = flatten(&path, 0.5);
/// assert!(flat.len() > 3);
/// assert_eq!(flat.last(), Some(&FlatCommand::Close));
/// ```
pub fn flatten(path: &Path, tolerance: f64) -> Vec<FlatCommand> {
    let mut out = Vec::with_capacity(path.len());
    let mut current = Point2D::ZERO;
    let mut subpath_start = Point2D::ZERO;

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(to) => {
                out.push(FlatCommand::MoveTo(to));
                current = to;
                subpath_start = to;
            }
            PathCommand::LineTo(to) => {
                out.push(FlatCommand::LineTo(to));
                current = to;
            }
            PathCommand::QuadTo { ctrl, to } => {
                Cubic::from_quad(current, ctrl, to).flatten_into(tolerance, 0, &mut out);
                current = to;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                Cubic::new(current, ctrl1, ctrl2, to).flatten_into(tolerance, 0, &mut out);
                current = to;
            }
            PathCommand::Close => {
                out.push(FlatCommand::Close);
                current = subpath_start;
            }
        }
    }

    out
}

/// A cubic Bezier segment.
#[derive(Debug, Clone, Copy)]
struct Cubic {
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
}

impl Cubic {
    fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Degree elevation of a quadratic; traces the same curve.
    fn from_quad(p0: Point2D, ctrl: Point2D, p2: Point2D) -> Self {
        let q1 = p0 * (1.0 / 3.0) + ctrl * (2.0 / 3.0);
        let q2 = ctrl * (2.0 / 3.0) + p2 * (1.0 / 3.0);
        Self::new(p0, q1, q2, p2)
    }

    fn is_flat(&self, tolerance: f64) -> bool {
        distance_to_segment(self.p1, self.p0, self.p3) <= tolerance
            && distance_to_segment(self.p2, self.p0, self.p3) <= tolerance
    }

    /// Splits at t = 0.5.
    fn halve(&self) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, 0.5);
        let p12 = self.p1.lerp(self.p2, 0.5);
        let p23 = self.p2.lerp(self.p3, 0.5);
        let p012 = p01.lerp(p12, 0.5);
        let p123 = p12.lerp(p23, 0.5);
        let mid = p012.lerp(p123, 0.5);

        (
            Self::new(self.p0, p01, p012, mid),
            Self::new(mid, p123, p23, self.p3),
        )
    }

    fn flatten_into(&self, tolerance: f64, depth: u32, out: &mut Vec<FlatCommand>) {
        if depth >= FLATTEN_RECURSION_LIMIT || self.is_flat(tolerance) {
            out.push(FlatCommand::LineTo(self.p3));
            return;
        }
        let (left, right) = self.halve();
        left.flatten_into(tolerance, depth + 1, out);
        right.flatten_into(tolerance, depth + 1, out);
    }
}

fn distance_to_segment(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if approx_zero(len_sq) {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

//! # 2D Geometry Primitives
//!
//! Points, triangles and bounding boxes shared by the triangulator,
//! the extruder and the placement pass.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in the outline plane.
///
/// Equality is exact coordinate equality; no epsilon merging is applied
/// anywhere in the pipeline.
pub type Point2D = DVec2;

/// Signed turn of the path `a → b → c`.
///
/// Cross product of `(a→b)` and `(b→c)`: positive for a counter-clockwise
/// (left) turn, negative for a clockwise turn, zero when collinear.
#[inline]
pub fn cross(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b - a).perp_dot(c - b)
}

/// An ordered triangle in the outline plane.
///
/// Triangles cut from a polygon by the ear clipper are counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle {
    /// Creates a triangle from its three corners.
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area; positive for counter-clockwise order.
    #[inline]
    pub fn doubled_signed_area(&self) -> f64 {
        cross(self.a, self.b, self.c)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.doubled_signed_area().abs() / 2.0
    }

    /// Returns true if `p` lies strictly inside the triangle.
    ///
    /// Uses the signs of the three sub-triangle areas. Points on an edge or
    /// on a corner are outside. Degenerate triangles contain nothing.
    pub fn contains_strictly(&self, p: Point2D) -> bool {
        let area = cross(self.a, self.b, self.c);
        let area1 = cross(p, self.b, self.c);
        let area2 = cross(self.a, p, self.c);
        let area3 = cross(self.a, self.b, p);

        if area > 0.0 {
            area1 > 0.0 && area2 > 0.0 && area3 > 0.0
        } else if area < 0.0 {
            area1 < 0.0 && area2 < 0.0 && area3 < 0.0
        } else {
            false
        }
    }
}

/// Axis-aligned bounding box in the outline plane.
///
/// The default value is the empty box at the origin, which is also what an
/// outline without any points measures as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Computes the bounds of a point set, or `None` when it is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

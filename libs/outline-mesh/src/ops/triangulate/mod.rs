//! # Ear-Clipping Triangulation
//!
//! Triangulates a simple polygon by repeatedly cutting off ears.
//!
//! ## Algorithm
//!
//! Until fewer than three vertices remain:
//! 1. Scan the remaining vertices in order. A vertex whose turn
//!    `prev → curr → next` is strictly counter-clockwise is an ear
//!    candidate; all others are reflex and skipped.
//! 2. The first candidate whose triangle strictly contains no other
//!    remaining vertex is clipped: its triangle is emitted and the vertex
//!    removed.
//! 3. If a full scan finds no ear the polygon is not simple (or is
//!    degenerate); clipping stops and the rest is left untriangulated.
//!
//! Always taking the first ear in scan order keeps the output deterministic.
//! Every iteration either removes a vertex or stops, so the loop terminates.


use crate::geometry::{cross, Triangle};
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Result of triangulating one polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangulation {
    /// Clipped ears in clipping order.
    pub triangles: Vec<Triangle>,
    /// Vertices still present when clipping stopped early; zero when the
    /// polygon was fully triangulated.
    pub unclipped: usize,
}

impl Triangulation {
    /// Returns true if clipping ran to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unclipped == 0
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

/// Triangulates `polygon` by ear clipping.
///
/// A simple counter-clockwise polygon with `n` vertices yields `n - 2`
/// triangles covering it exactly. Polygons with fewer than three points
/// yield no triangles. A non-simple polygon yields the ears found before
/// clipping got stuck, with [`Triangulation::unclipped`] set.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{triangulate, Polygon};
/// use glam::DVec2;
///
/// let square = Polygon::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ]);
/// let result = triangulate(&square);
/// assert_eq!(result.triangles.len(), 2);
/// assert!(result.is_complete());
/// ```
pub fn triangulate(polygon: &Polygon) -> Triangulation {
    let points = polygon.points();
    if points.len() < 3 {
        return Triangulation::default();
    }

    // Indices into `points` of the shrinking vertex chain.
    let mut chain: Vec<usize> = (0..points.len()).collect();
    let mut triangles = Vec::with_capacity(points.len() - 2);

    while chain.len() >= 3 {
        let Some(i) = find_ear(polygon, &chain) else {
            return Triangulation {
                triangles,
                unclipped: chain.len(),
            };
        };
        triangles.push(corner_triangle(polygon, &chain, i));
        chain.remove(i);
    }

    Triangulation {
        triangles,
        unclipped: 0,
    }
}

/// Triangle `(prev, curr, next)` around position `i` of the chain.
fn corner_triangle(polygon: &Polygon, chain: &[usize], i: usize) -> Triangle {
    let points = polygon.points();
    let n = chain.len();
    Triangle::new(
        points[chain[(i + n - 1) % n]],
        points[chain[i]],
        points[chain[(i + 1) % n]],
    )
}

/// Position in the chain of the first clippable ear.
fn find_ear(polygon: &Polygon, chain: &[usize]) -> Option<usize> {
    let points = polygon.points();
    let n = chain.len();

    (0..n).find(|&i| {
        let ear = corner_triangle(polygon, chain, i);
        if cross(ear.a, ear.b, ear.c) <= 0.0 {
            return false;
        }

        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        !chain
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != prev && j != i && j != next)
            .any(|(_, &index)| ear.contains_strictly(points[index]))
    })
}

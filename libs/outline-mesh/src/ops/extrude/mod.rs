//! # Prism Extrusion
//!
//! Lifts a triangulated polygon into a capped prism between `z = 0` and
//! `z = depth`.
//!
//! ## Facet Layout
//!
//! For each cap triangle `(a, b, c)`, in triangulation order:
//! - bottom facet at `z = 0`, normal `(0, 0, -1)`, order `(a, b, c)`
//! - top facet at `z = depth`, normal `(0, 0, 1)`, order `(a, c, b)`
//!
//! Then for each boundary edge `p1 → p2`, wrap-around edge included, two
//! side facets splitting the quad along `p1@0 – p2@depth`:
//! - `(p1@0, p2@0, p2@depth)`
//! - `(p1@0, p2@depth, p1@depth)`
//!
//! A fully triangulated polygon with `n` vertices yields
//! `2 * (n - 2) + 2 * n` facets.


use crate::geometry::{Point2D, Triangle};
use crate::polygon::Polygon;
use crate::solid::Facet;
use config::constants::DEFAULT_DEPTH;
use glam::DVec3;

/// Normal assigned to side-wall facets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SideNormals {
    /// Zero vector, as consumed by tools that recompute normals.
    #[default]
    Placeholder,
    /// `normalize(cross(p2 - p1, (0, 0, depth)))`; outward for
    /// counter-clockwise polygons, zero for degenerate edges.
    Outward,
}

/// Parameters for prism extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Extrusion distance along +Z.
    pub depth: f64,
    /// Normal policy for side walls.
    pub side_normals: SideNormals,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            side_normals: SideNormals::Placeholder,
        }
    }
}

/// Extrudes `polygon` with cap triangles `triangles` into prism facets.
///
/// No validation is performed: a zero or negative depth produces flat or
/// inverted geometry. Side walls are emitted for every edge of a polygon
/// with at least two points, even when there are no cap triangles.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{extrude, triangulate, ExtrudeParams, Polygon};
/// use glam::DVec2;
///
/// let square = Polygon::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ]);
/// let caps = triangulate(&square);
/// let facets = extrude(&square, &caps.triangles, &ExtrudeParams::default());
/// assert_eq!(facets.len(), 12);
/// ```
pub fn extrude(polygon: &Polygon, triangles: &[Triangle], params: &ExtrudeParams) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(2 * triangles.len() + 2 * polygon.len());
    extrude_into(polygon, triangles, params, &mut facets);
    facets
}

/// Same as [`extrude`], appending to an existing facet buffer.
pub fn extrude_into(
    polygon: &Polygon,
    triangles: &[Triangle],
    params: &ExtrudeParams,
    out: &mut Vec<Facet>,
) {
    let depth = params.depth;

    for tri in triangles {
        out.push(Facet::new(
            DVec3::NEG_Z,
            [at(tri.a, 0.0), at(tri.b, 0.0), at(tri.c, 0.0)],
        ));
        out.push(Facet::new(
            DVec3::Z,
            [at(tri.a, depth), at(tri.c, depth), at(tri.b, depth)],
        ));
    }

    for (p1, p2) in polygon.edges() {
        let normal = match params.side_normals {
            SideNormals::Placeholder => DVec3::ZERO,
            SideNormals::Outward => outward_normal(p1, p2, depth),
        };
        out.push(Facet::new(
            normal,
            [at(p1, 0.0), at(p2, 0.0), at(p2, depth)],
        ));
        out.push(Facet::new(
            normal,
            [at(p1, 0.0), at(p2, depth), at(p1, depth)],
        ));
    }
}

#[inline]
fn at(p: Point2D, z: f64) -> DVec3 {
    p.extend(z)
}

fn outward_normal(p1: Point2D, p2: Point2D, depth: f64) -> DVec3 {
    (p2 - p1)
        .extend(0.0)
        .cross(DVec3::new(0.0, 0.0, depth))
        .normalize_or_zero()
}

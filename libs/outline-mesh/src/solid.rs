//! # Solid Data Structure
//!
//! A named, ordered collection of triangular facets, each carrying the
//! normal assigned to it by the extruder.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One triangular face with its assigned normal.
///
/// The normal is not derived from the vertices. Side-wall facets carry a
/// zero normal unless outward normals were requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub normal: DVec3,
    pub vertices: [DVec3; 3],
}

impl Facet {
    /// Creates a facet.
    pub fn new(normal: DVec3, vertices: [DVec3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Area computed from the vertices.
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).length() / 2.0
    }
}

/// A named solid: facets in emission order.
///
/// Facet order has no geometric meaning but is preserved so identical
/// input always serializes to identical bytes.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{Facet, Solid};
/// use glam::DVec3;
///
/// let mut solid = Solid::new("demo");
/// solid.push(Facet::new(DVec3::Z, [DVec3::ZERO, DVec3::X, DVec3::Y]));
/// assert_eq!(solid.facet_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    name: String,
    facets: Vec<Facet>,
}

impl Solid {
    /// Creates an empty solid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Vec::new(),
        }
    }

    /// Creates a solid from facets already in emission order.
    pub fn with_facets(name: impl Into<String>, facets: Vec<Facet>) -> Self {
        Self {
            name: name.into(),
            facets,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Appends a facet.
    pub fn push(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Appends facets, keeping their order.
    pub fn extend(&mut self, facets: impl IntoIterator<Item = Facet>) {
        self.facets.extend(facets);
    }

    /// Axis-aligned bounding box over all facet vertices, or `None` for an
    /// empty solid.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut vertices = self.facets.iter().flat_map(|f| f.vertices.iter());
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))))
    }
}

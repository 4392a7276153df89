//! # Mesh Operations
//!
//! Polygon triangulation and prism extrusion.

pub mod extrude;
pub mod triangulate;

pub use extrude::{extrude, extrude_into, ExtrudeParams, SideNormals};
pub use triangulate::{triangulate, Triangulation};

//! # Outline Mesh
//!
//! Turns 2D outlines (glyph contours, rectangles) into one extruded,
//! triangulated solid and writes it as an ASCII solid document.
//!
//! ## Architecture
//!
//! ```text
//! OutlineSource → Path → flatten → build_polygons → triangulate → extrude → Solid → stl
//! ```
//!
//! ## Algorithms
//!
//! - **Flattening**: recursive De Casteljau subdivision with a flatness
//!   tolerance and a depth limit
//! - **Triangulation**: ear clipping, first ear in scan order
//! - **Extrusion**: bottom and top caps plus two facets per boundary edge
//!
//! Bad geometry never fails a conversion. Partially triangulated polygons
//! are counted in a [`ConversionReport`].
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::{convert, to_ascii, Path, Shapes};
//!
//! let shapes = Shapes::new("font", vec![Path::rectangle(0.0, 0.0, 10.0, 10.0)]);
//! let solid = convert(&shapes, 5.0).unwrap();
//! let text = to_ascii(&solid);
//! assert_eq!(text.matches("facet normal").count(), 12);
//! ```

pub mod error;
pub mod geometry;
pub mod ops;
pub mod path;
pub mod pipeline;
pub mod polygon;
pub mod solid;
pub mod stl;

pub use error::{MeshError, MeshResult};
pub use geometry::{Bounds2D, Point2D, Triangle};
pub use ops::{extrude, extrude_into, triangulate, ExtrudeParams, SideNormals, Triangulation};
pub use path::{flatten, FlatCommand, Path, PathCommand};
pub use pipeline::{
    convert, convert_parallel, convert_to_ascii, convert_with_report, ConversionReport,
    ConvertOptions, Cursor, OutlineSource, Shapes,
};
pub use polygon::{build_polygons, Polygon};
pub use solid::{Facet, Solid};
pub use stl::{to_ascii, write_ascii};

//! # Outline Sources
//!
//! [`OutlineSource`](outline_mesh::OutlineSource) implementations that feed
//! the conversion pipeline.
//!
//! - [`FontSource`]: one shape per glyph of a font, via `ttf-parser`
//! - [`RectangleSource`]: the first `<rect>` of a vector drawing
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::convert;
//! use outline_source::RectangleSource;
//!
//! let source = RectangleSource::parse(r#"<svg><rect width="4" height="2"/></svg>"#).unwrap();
//! let solid = convert(&source, 1.0).unwrap();
//! assert_eq!(solid.name(), "rectangle");
//! ```

pub mod error;
pub mod font;
pub mod svg;

pub use error::{SourceError, SourceResult};
pub use font::FontSource;
pub use svg::{Rect, RectangleSource};

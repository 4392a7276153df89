//! # Conversion Pipeline
//!
//! Drives an [`OutlineSource`] through flattening, polygon building,
//! triangulation and extrusion, placing shapes left to right.
//!
//! ## Placement
//!
//! Each shape is shifted so its bounding box starts at the cursor on X and
//! at zero on Y. The cursor then advances by the shape width plus the gap:
//!
//! ```text
//! cursor.x ──► [ shape 0 ]  gap  [ shape 1 ]  gap  [ shape 2 ]
//! ```
//!
//! Shapes with no points have empty bounds and still advance by the gap.

mod parallel;
mod report;
mod shape;

#[cfg(test)]
mod tests;

pub use parallel::convert_parallel;
pub use report::ConversionReport;

use crate::error::{MeshError, MeshResult};
use crate::geometry::Bounds2D;
use crate::ops::{ExtrudeParams, SideNormals};
use crate::path::Path;
use crate::solid::Solid;
use crate::stl;
use config::constants::{ConfigError, ConversionConfig};
use glam::DVec2;
use shape::{PreparedShape, ShapeMesh};
use std::convert::Infallible;
use tracing::info;

/// Supplies the outlines to convert, one [`Path`] per shape.
pub trait OutlineSource {
    /// Error produced when outlines cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name written into the solid header.
    fn name(&self) -> &str;

    /// Returns the shapes in placement order.
    fn outlines(&self) -> Result<Vec<Path>, Self::Error>;
}

/// In-memory outline source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shapes {
    name: String,
    paths: Vec<Path>,
}

impl Shapes {
    pub fn new(name: impl Into<String>, paths: Vec<Path>) -> Self {
        Self {
            name: name.into(),
            paths,
        }
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}

impl OutlineSource for Shapes {
    type Error = Infallible;

    fn name(&self) -> &str {
        &self.name
    }

    fn outlines(&self) -> Result<Vec<Path>, Infallible> {
        Ok(self.paths.clone())
    }
}

/// Horizontal placement cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub x: f64,
}

impl Cursor {
    /// Returns the offset that moves `bounds` to this cursor, and the cursor
    /// for the next shape.
    pub fn place(self, bounds: &Bounds2D, gap: f64) -> (DVec2, Cursor) {
        let offset = DVec2::new(self.x - bounds.min.x, -bounds.min.y);
        let next = Cursor {
            x: self.x + (bounds.width() + gap),
        };
        (offset, next)
    }
}

/// Options for [`convert_with_report`] and [`convert_parallel`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    pub config: ConversionConfig,
    pub side_normals: SideNormals,
}

impl ConvertOptions {
    /// Default options with the given depth.
    pub fn with_depth(depth: f64) -> MeshResult<Self> {
        let config = ConversionConfig::default()
            .with_depth(depth)
            .map_err(config_error)?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Revalidates the configuration; fields are public and may have been
    /// set directly.
    pub(crate) fn validated(&self) -> MeshResult<ConversionConfig> {
        let c = self.config;
        ConversionConfig::new(c.depth, c.tolerance, c.gap).map_err(config_error)
    }

    pub(crate) fn extrude_params(&self, config: &ConversionConfig) -> ExtrudeParams {
        ExtrudeParams {
            depth: config.depth,
            side_normals: self.side_normals,
        }
    }
}

fn config_error(err: ConfigError) -> MeshError {
    match err {
        ConfigError::InvalidDepth(depth) => MeshError::InvalidDepth { depth },
        other => MeshError::Config(other),
    }
}

/// Converts every shape of `source` into one solid extruded by `depth`.
///
/// # Errors
///
/// [`MeshError::InvalidDepth`] for a zero, negative or non-finite depth,
/// [`MeshError::Source`] if the source fails. Degenerate geometry is not an
/// error; use [`convert_with_report`] to detect it.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{convert, Path, Shapes};
///
/// let shapes = Shapes::new("font", vec![Path::rectangle(0.0, 0.0, 10.0, 10.0)]);
/// let solid = convert(&shapes, 5.0).unwrap();
/// assert_eq!(solid.facet_count(), 12);
/// ```
pub fn convert<S: OutlineSource + ?Sized>(source: &S, depth: f64) -> MeshResult<Solid> {
    let options = ConvertOptions::with_depth(depth)?;
    convert_with_report(source, &options).map(|(solid, _)| solid)
}

/// Converts `source` and renders the solid as an ASCII document.
pub fn convert_to_ascii<S: OutlineSource + ?Sized>(source: &S, depth: f64) -> MeshResult<Vec<u8>> {
    let solid = convert(source, depth)?;
    Ok(stl::to_ascii(&solid).into_bytes())
}

/// Like [`convert`], returning diagnostics alongside the solid.
pub fn convert_with_report<S: OutlineSource + ?Sized>(
    source: &S,
    options: &ConvertOptions,
) -> MeshResult<(Solid, ConversionReport)> {
    let config = options.validated()?;
    let paths = source.outlines().map_err(MeshError::source_failed)?;
    let params = options.extrude_params(&config);

    let mut cursor = Cursor::default();
    let mut meshes = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let shape = PreparedShape::new(path, config.tolerance);
        let (offset, next) = cursor.place(shape.bounds(), config.gap);
        cursor = next;
        meshes.push(shape.build(index, offset, &params));
    }

    Ok(assemble(source.name(), meshes))
}

/// Concatenates shape meshes in order.
pub(crate) fn assemble(name: &str, meshes: Vec<ShapeMesh>) -> (Solid, ConversionReport) {
    let total = meshes.iter().map(|m| m.facets.len()).sum();
    let mut solid = Solid::with_facets(name, Vec::with_capacity(total));
    let mut report = ConversionReport::default();

    for mesh in meshes {
        report.merge(&mesh.report);
        solid.extend(mesh.facets);
    }

    info!(
        name,
        shapes = report.shapes,
        polygons = report.polygons,
        facets = report.facets,
        degraded = report.is_degraded(),
        "conversion finished"
    );
    (solid, report)
}

//! Shape-parallel conversion.
//!
//! Flattening and extrusion run per shape on the rayon pool. Placement is a
//! prefix sum over shape widths and stays sequential, so the output is the
//! same as the serial pipeline's.

use super::shape::PreparedShape;
use super::{assemble, ConversionReport, ConvertOptions, Cursor, OutlineSource};
use crate::error::{MeshError, MeshResult};
use crate::solid::Solid;
use rayon::prelude::*;
use tracing::debug;

/// Parallel [`convert_with_report`](super::convert_with_report).
///
/// Produces a solid identical to the serial conversion.
pub fn convert_parallel<S: OutlineSource + ?Sized>(
    source: &S,
    options: &ConvertOptions,
) -> MeshResult<(Solid, ConversionReport)> {
    let config = options.validated()?;
    let paths = source.outlines().map_err(MeshError::source_failed)?;
    let params = options.extrude_params(&config);

    debug!(shapes = paths.len(), "converting shapes in parallel");

    let prepared: Vec<PreparedShape> = paths
        .par_iter()
        .map(|path| PreparedShape::new(path, config.tolerance))
        .collect();

    let mut cursor = Cursor::default();
    let placed: Vec<_> = prepared
        .into_iter()
        .map(|shape| {
            let (offset, next) = cursor.place(shape.bounds(), config.gap);
            cursor = next;
            (shape, offset)
        })
        .collect();

    let meshes = placed
        .into_par_iter()
        .enumerate()
        .map(|(index, (shape, offset))| shape.build(index, offset, &params))
        .collect();

    Ok(assemble(source.name(), meshes))
}

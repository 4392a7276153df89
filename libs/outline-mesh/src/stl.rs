//! # ASCII Solid Serialization
//!
//! Writes a [`Solid`] in the text variant of the triangulated-solid
//! exchange format:
//!
//! ```text
//! solid <name>
//!   facet normal <nx> <ny> <nz>
//!     outer loop
//!       vertex <x1> <y1> <z1>
//!       vertex <x2> <y2> <z2>
//!       vertex <x3> <y3> <z3>
//!     endloop
//!   endfacet
//! endsolid <name>
//! ```
//!
//! Numbers use the shortest representation that reads back to the same
//! `f64`, always with a fractional part (`5.0`, `-0.5`, `1e-7`), so output
//! is byte-identical for identical input.

use crate::error::MeshResult;
use crate::solid::{Facet, Solid};
use glam::DVec3;
use std::fmt;
use std::io::Write;

/// Display adapter rendering a solid as an ASCII document.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{stl::AsciiStl, Solid};
///
/// let solid = Solid::new("empty");
/// assert_eq!(AsciiStl(&solid).to_string(), "solid empty\nendsolid empty\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AsciiStl<'a>(pub &'a Solid);

impl fmt::Display for AsciiStl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solid = self.0;
        writeln!(f, "solid {}", solid.name())?;
        for facet in solid.facets() {
            write_facet(f, facet)?;
        }
        writeln!(f, "endsolid {}", solid.name())
    }
}

fn write_facet(f: &mut fmt::Formatter<'_>, facet: &Facet) -> fmt::Result {
    writeln!(f, "  facet normal {}", Coords(facet.normal))?;
    writeln!(f, "    outer loop")?;
    for vertex in &facet.vertices {
        writeln!(f, "      vertex {}", Coords(*vertex))?;
    }
    writeln!(f, "    endloop")?;
    writeln!(f, "  endfacet")
}

/// Three space-separated coordinates.
struct Coords(DVec3);

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.0.x, self.0.y, self.0.z)
    }
}

/// Renders `solid` as an ASCII document.
pub fn to_ascii(solid: &Solid) -> String {
    AsciiStl(solid).to_string()
}

/// Streams `solid` as an ASCII document into `writer`.
///
/// Produces exactly the bytes of [`to_ascii`].
///
/// # Errors
///
/// [`MeshError::Io`](crate::MeshError::Io) if writing or flushing fails.
pub fn write_ascii<W: Write>(solid: &Solid, mut writer: W) -> MeshResult<()> {
    write!(writer, "{}", AsciiStl(solid))?;
    writer.flush()?;
    Ok(())
}

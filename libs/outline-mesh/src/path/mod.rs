//! # Outline Paths
//!
//! Drawing commands as delivered by an outline source, and the flattened
//! form consumed by the polygon builder.
//!
//! - [`Path`]: move / line / quadratic / cubic / close, absolute coordinates
//! - [`FlatCommand`]: move / line / close only, produced by [`flatten`]

mod flatten;

pub use flatten::flatten;

use crate::geometry::Point2D;
use glam::DVec2;

/// One drawing command in absolute outline coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point2D),
    /// Straight segment from the current point.
    LineTo(Point2D),
    /// Quadratic Bezier segment from the current point.
    QuadTo { ctrl: Point2D, to: Point2D },
    /// Cubic Bezier segment from the current point.
    CubicTo {
        ctrl1: Point2D,
        ctrl2: Point2D,
        to: Point2D,
    },
    /// Close the current subpath.
    Close,
}

/// A flattened drawing command: curves have been replaced by lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatCommand {
    MoveTo(Point2D),
    LineTo(Point2D),
    Close,
}

/// An outline made of one or more subpaths.
///
/// # Example
///
/// ```rust
/// use outline_mesh::Path;
/// use glam::DVec2;
///
/// let mut path = Path::new();
/// path.move_to(DVec2::new(0.0, 0.0))
///     .line_to(DVec2::new(10.0, 0.0))
///     .cubic_to(DVec2::new(12.0, 4.0), DVec2::new(8.0, 8.0), DVec2::new(10.0, 10.0))
///     .close();
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from an existing command list.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Creates the closed, counter-clockwise outline of an axis-aligned
    /// rectangle with its corner at `(x, y)`.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut path = Self::new();
        path.move_to(DVec2::new(x, y))
            .line_to(DVec2::new(x + width, y))
            .line_to(DVec2::new(x + width, y + height))
            .line_to(DVec2::new(x, y + height))
            .close();
        path
    }

    pub fn move_to(&mut self, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn quad_to(&mut self, ctrl: Point2D, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Point2D, ctrl2: Point2D, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self::from_commands(commands)
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Self {
        Self::from_commands(iter.into_iter().collect())
    }
}

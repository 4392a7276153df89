//! # Font Outlines
//!
//! Every glyph of a font becomes one shape, in glyph-index order starting
//! after `.notdef`. Coordinates are scaled from font units to `size` per em
//! and Y is flipped, so outlines arrive with a top-left origin and Y down.
//! In that frame the outer contours of TrueType glyphs run counter-clockwise.

use crate::error::{SourceError, SourceResult};
use config::constants::{DEFAULT_GLYPH_SIZE, FIRST_GLYPH_INDEX, FONT_SOLID_NAME};
use glam::DVec2;
use outline_mesh::{OutlineSource, Path, PathCommand};
use tracing::{debug, trace};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Outline source over the glyphs of a font file.
#[derive(Debug, Clone)]
pub struct FontSource {
    data: Vec<u8>,
    size: f64,
    name: String,
}

impl FontSource {
    /// Wraps font bytes, checking that they parse.
    pub fn from_bytes(data: Vec<u8>) -> SourceResult<Self> {
        Face::parse(&data, 0)?;
        Ok(Self {
            data,
            size: DEFAULT_GLYPH_SIZE,
            name: FONT_SOLID_NAME.to_string(),
        })
    }

    /// Reads and checks a font file.
    pub fn open(path: impl AsRef<std::path::Path>) -> SourceResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Sets the em size in output units.
    pub fn with_size(mut self, size: f64) -> SourceResult<Self> {
        self.size = checked_size(size)?;
        Ok(self)
    }

    /// Sets the solid name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Number of glyphs in the font, `.notdef` included.
    pub fn glyph_count(&self) -> SourceResult<u16> {
        Ok(self.face()?.number_of_glyphs())
    }

    fn face(&self) -> SourceResult<Face<'_>> {
        Ok(Face::parse(&self.data, 0)?)
    }
}

impl OutlineSource for FontSource {
    type Error = SourceError;

    fn name(&self) -> &str {
        &self.name
    }

    fn outlines(&self) -> SourceResult<Vec<Path>> {
        let face = self.face()?;
        let scale = self.size / f64::from(face.units_per_em());
        let count = face.number_of_glyphs();

        debug!(glyphs = count, scale, "reading glyph outlines");

        let paths = (FIRST_GLYPH_INDEX..count)
            .map(|index| {
                let mut recorder = PathRecorder::new(scale);
                match face.outline_glyph(GlyphId(index), &mut recorder) {
                    Some(_) => recorder.finish(),
                    None => {
                        trace!(glyph = index, "glyph has no outline");
                        Path::new()
                    }
                }
            })
            .collect();
        Ok(paths)
    }
}

fn checked_size(size: f64) -> SourceResult<f64> {
    if !size.is_finite() || size <= 0.0 {
        return Err(SourceError::InvalidSize(size));
    }
    Ok(size)
}

/// Records outline callbacks as a [`Path`] in output units.
///
/// Font outlines end each contour with a line back to its first point
/// before closing it. That line is dropped so the closed polygon does not
/// repeat its first point.
pub(crate) struct PathRecorder {
    commands: Vec<PathCommand>,
    start: Option<DVec2>,
    scale: f64,
}

impl PathRecorder {
    pub(crate) fn new(scale: f64) -> Self {
        Self {
            commands: Vec::new(),
            start: None,
            scale,
        }
    }

    pub(crate) fn finish(self) -> Path {
        Path::from_commands(self.commands)
    }

    fn point(&self, x: f32, y: f32) -> DVec2 {
        DVec2::new(f64::from(x) * self.scale, -f64::from(y) * self.scale)
    }
}

impl OutlineBuilder for PathRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        let to = self.point(x, y);
        self.start = Some(to);
        self.commands.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = self.point(x, y);
        self.commands.push(PathCommand::LineTo(to));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let ctrl = self.point(x1, y1);
        let to = self.point(x, y);
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let ctrl1 = self.point(x1, y1);
        let ctrl2 = self.point(x2, y2);
        let to = self.point(x, y);
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    fn close(&mut self) {
        if let (Some(PathCommand::LineTo(last)), Some(start)) = (self.commands.last(), self.start) {
            if *last == start {
                self.commands.pop();
            }
        }
        self.commands.push(PathCommand::Close);
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_mesh::{convert_with_report, ConvertOptions};

    const SYSTEM_FONTS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    fn system_font() -> Option<FontSource> {
        SYSTEM_FONTS
            .iter()
            .find_map(|path| FontSource::open(path).ok())
    }

    #[test]
    fn test_recorder_scales_and_flips() {
        let mut recorder = PathRecorder::new(0.5);
        recorder.move_to(10.0, 20.0);
        recorder.line_to(30.0, 20.0);
        recorder.quad_to(40.0, 0.0, 30.0, -20.0);
        recorder.close();

        let path = recorder.finish();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(DVec2::new(5.0, -10.0)),
                PathCommand::LineTo(DVec2::new(15.0, -10.0)),
                PathCommand::QuadTo {
                    ctrl: DVec2::new(20.0, 0.0),
                    to: DVec2::new(15.0, 10.0),
                },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_flip_turns_clockwise_contour_counter_clockwise() {
        // Clockwise in font units (Y up), as TrueType outer contours are.
        let mut recorder = PathRecorder::new(1.0);
        recorder.move_to(0.0, 0.0);
        recorder.line_to(0.0, 10.0);
        recorder.line_to(10.0, 10.0);
        recorder.line_to(10.0, 0.0);
        recorder.close();

        let shapes = outline_mesh::Shapes::new("font", vec![recorder.finish()]);
        let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
        assert!(!report.is_degraded());
        assert_eq!(solid.facet_count(), 12);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = FontSource::from_bytes(b"not a font".to_vec()).unwrap_err();
        assert!(matches!(err, SourceError::Font(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FontSource::open("/nonexistent/font.ttf").unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn test_system_font_converts() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let count = font.glyph_count().unwrap();
        let outlines = font.outlines().unwrap();
        assert_eq!(outlines.len(), usize::from(count.saturating_sub(FIRST_GLYPH_INDEX)));

        let (solid, report) = convert_with_report(&font, &ConvertOptions::default()).unwrap();
        assert_eq!(solid.name(), "font");
        assert!(solid.facet_count() > 0);
        assert_eq!(report.shapes, outlines.len());
    }

    #[test]
    fn test_size_scales_outlines() {
        let Some(font) = system_font() else {
            return;
        };
        let small = font.clone().outlines().unwrap();
        let large = font.with_size(10.0).unwrap().outlines().unwrap();
        let first_point = |paths: &[Path]| {
            paths.iter().find_map(|p| match p.commands().first() {
                Some(PathCommand::MoveTo(to)) => Some(*to),
                _ => None,
            })
        };
        let (a, b) = (first_point(&small).unwrap(), first_point(&large).unwrap());
        approx::assert_relative_eq!(a.x * 10.0, b.x, epsilon = 1e-9);
        approx::assert_relative_eq!(a.y * 10.0, b.y, epsilon = 1e-9);
    }

    #[test]
    fn test_size_must_be_positive_and_finite() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                checked_size(size),
                Err(SourceError::InvalidSize(_))
            ));
        }
        assert_eq!(checked_size(12.0).unwrap(), 12.0);
        assert_eq!(checked_size(DEFAULT_GLYPH_SIZE).unwrap(), DEFAULT_GLYPH_SIZE);
    }

    #[test]
    fn test_closing_line_to_start_is_dropped() {
        // Contour as a font delivers it: explicit line back to the start.
        let mut recorder = PathRecorder::new(1.0);
        recorder.move_to(0.0, 0.0);
        recorder.line_to(0.0, 10.0);
        recorder.line_to(10.0, 10.0);
        recorder.line_to(10.0, 0.0);
        recorder.line_to(0.0, 0.0);
        recorder.close();

        let path = recorder.finish();
        assert_eq!(path.len(), 5);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));

        let shapes = outline_mesh::Shapes::new("font", vec![path]);
        let (solid, report) = convert_with_report(&shapes, &ConvertOptions::default()).unwrap();
        assert!(!report.is_degraded());
        assert_eq!(report.unclipped_vertices, 0);
        assert_eq!(solid.facet_count(), 12);
    }

    #[test]
    fn test_closing_line_elsewhere_is_kept() {
        let mut recorder = PathRecorder::new(1.0);
        recorder.move_to(0.0, 0.0);
        recorder.line_to(10.0, 0.0);
        recorder.line_to(10.0, 10.0);
        recorder.close();
        // Second contour starts where the first one did.
        recorder.move_to(20.0, 0.0);
        recorder.line_to(0.0, 0.0);
        recorder.close();

        let path = recorder.finish();
        assert_eq!(
            path.commands()[4..],
            [
                PathCommand::MoveTo(DVec2::new(20.0, 0.0)),
                PathCommand::LineTo(DVec2::new(0.0, 0.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_curve_ending_at_start_is_kept() {
        let mut recorder = PathRecorder::new(1.0);
        recorder.move_to(0.0, 0.0);
        recorder.line_to(10.0, 0.0);
        recorder.quad_to(5.0, 10.0, 0.0, 0.0);
        recorder.close();

        let path = recorder.finish();
        assert!(matches!(
            path.commands()[2],
            PathCommand::QuadTo { .. }
        ));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_system_font_contours_are_clean() {
        let Some(font) = system_font() else {
            return;
        };
        for path in font.outlines().unwrap() {
            let mut start = None;
            let mut previous = None;
            for command in path.commands() {
                match *command {
                    PathCommand::MoveTo(p) => start = Some(p),
                    PathCommand::Close => {
                        if let (Some(PathCommand::LineTo(last)), Some(first)) = (previous, start) {
                            assert_ne!(last, first);
                        }
                    }
                    _ => {}
                }
                previous = Some(*command);
            }
        }
    }
}

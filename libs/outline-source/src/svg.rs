//! # Drawing Rectangles
//!
//! Reads the first `<rect>` of a vector drawing. Only `x`, `y`, `width` and
//! `height` are used; a missing or empty attribute reads as `0`. Everything
//! else in the document is ignored.

use crate::error::{SourceError, SourceResult};
use config::constants::RECTANGLE_SOLID_NAME;
use outline_mesh::{OutlineSource, Path};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::convert::Infallible;
use tracing::debug;

/// Axis-aligned rectangle read from a drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Closed path `(x,y) → (x+w,y) → (x+w,y+h) → (x,y+h)`.
    pub fn to_path(&self) -> Path {
        Path::rectangle(self.x, self.y, self.width, self.height)
    }
}

/// Outline source holding the first rectangle of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSource {
    rect: Rect,
    name: String,
}

impl RectangleSource {
    /// Parses `markup` and keeps its first `<rect>`.
    ///
    /// # Errors
    ///
    /// [`SourceError::Xml`] for malformed markup, [`SourceError::MissingRectangle`]
    /// if there is no `<rect>`, [`SourceError::InvalidAttribute`] for a
    /// geometry attribute that is not a number.
    pub fn parse(markup: &str) -> SourceResult<Self> {
        let rect = first_rect(markup)?;
        debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "found rectangle"
        );
        Ok(Self {
            rect,
            name: RECTANGLE_SOLID_NAME.to_string(),
        })
    }

    /// Reads and parses a drawing file.
    pub fn open(path: impl AsRef<std::path::Path>) -> SourceResult<Self> {
        let markup = std::fs::read_to_string(path)?;
        Self::parse(&markup)
    }

    /// Sets the solid name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl OutlineSource for RectangleSource {
    type Error = Infallible;

    fn name(&self) -> &str {
        &self.name
    }

    fn outlines(&self) -> Result<Vec<Path>, Infallible> {
        Ok(vec![self.rect.to_path()])
    }
}

fn first_rect(markup: &str) -> SourceResult<Rect> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"rect" => {
                return parse_rect(e);
            }
            Event::Eof => return Err(SourceError::MissingRectangle),
            _ => {}
        }
    }
}

fn parse_rect(e: &BytesStart) -> SourceResult<Rect> {
    Ok(Rect {
        x: number_attr(e, "x")?,
        y: number_attr(e, "y")?,
        width: number_attr(e, "width")?,
        height: number_attr(e, "height")?,
    })
}

/// Numeric attribute; absent or blank reads as `0`.
fn number_attr(e: &BytesStart, name: &str) -> SourceResult<f64> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() != name.as_bytes() {
            continue;
        }
        let value = attr.unescape_value()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        return trimmed
            .parse()
            .map_err(|_| SourceError::InvalidAttribute {
                name: name.to_string(),
                value: value.to_string(),
            });
    }
    Ok(0.0)
}

//! # Configuration Constants
//!
//! Centralized constants for the outline-to-solid pipeline. Curve flattening,
//! extrusion, shape placement and naming defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Flattening**: Curve approximation parameters
//! - **Extrusion & Placement**: Depth and spacing of generated solids
//! - **Sources**: Glyph iteration and solid naming

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for degenerate-geometry checks (zero-length edges, zero-area
/// triangles) and in tests comparing computed areas.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// FLATTENING CONSTANTS
// =============================================================================

/// Maximum deviation between a curve and its flattened polyline.
///
/// Every line segment produced by the flattener stays within this distance
/// of the curve it replaces.
///
/// # Example
///
/// ```rust
/// use config::constants::FLATTEN_TOLERANCE;
///
/// assert_eq!(FLATTEN_TOLERANCE, 0.5);
/// ```
pub const FLATTEN_TOLERANCE: f64 = 0.5;

/// Maximum number of halvings applied to a single curve segment.
///
/// A segment that is still not flat at this depth is emitted as its chord.
/// Bounds the work spent on degenerate or enormous curves.
///
/// # Example
///
/// ```rust
/// use config::constants::FLATTEN_RECURSION_LIMIT;
///
/// // At most 2^limit line segments per curve segment.
/// let max_segments = 1u32 << FLATTEN_RECURSION_LIMIT;
/// assert_eq!(max_segments, 1024);
/// ```
pub const FLATTEN_RECURSION_LIMIT: u32 = 10;

// =============================================================================
// EXTRUSION & PLACEMENT CONSTANTS
// =============================================================================

/// Extrusion depth used when the caller supplies none.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DEPTH;
///
/// let requested: Option<f64> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_DEPTH), 5.0);
/// ```
pub const DEFAULT_DEPTH: f64 = 5.0;

/// Horizontal gap inserted after each placed shape.
///
/// The placement cursor advances by `width + SHAPE_GAP` per shape.
///
/// # Example
///
/// ```rust
/// use config::constants::SHAPE_GAP;
///
/// let widths = [10.0, 4.0];
/// let second_offset = widths[0] + SHAPE_GAP;
/// assert_eq!(second_offset, 15.0);
/// ```
pub const SHAPE_GAP: f64 = 5.0;

// =============================================================================
// SOURCE CONSTANTS
// =============================================================================

/// Em size, in output units, at which glyph outlines are extracted.
///
/// Font units are scaled by `DEFAULT_GLYPH_SIZE / units_per_em`.
pub const DEFAULT_GLYPH_SIZE: f64 = 1.0;

/// First glyph index converted from a font.
///
/// Glyph 0 is `.notdef` and is never part of the output.
pub const FIRST_GLYPH_INDEX: u16 = 1;

/// Solid name used for font conversions.
pub const FONT_SOLID_NAME: &str = "font";

/// Solid name used for rectangle conversions.
pub const RECTANGLE_SOLID_NAME: &str = "rectangle";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// CONVERSION CONFIG
// =============================================================================

/// Parameters of a single conversion, validated on construction.
///
/// # Examples
/// ```
/// use config::constants::ConversionConfig;
/// let config = ConversionConfig::default();
/// assert!(config.depth > 0.0);
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConfig {
    /// Extrusion depth along +Z.
    pub depth: f64,
    /// Maximum curve flattening deviation.
    pub tolerance: f64,
    /// Gap between consecutively placed shapes.
    pub gap: f64,
}

impl ConversionConfig {
    /// Builds a configuration, rejecting values that cannot produce a solid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConversionConfig;
    /// let cfg = ConversionConfig::new(2.0, 0.25, 1.0).expect("valid config");
    /// assert_eq!(cfg.depth, 2.0);
    /// assert!(ConversionConfig::new(0.0, 0.25, 1.0).is_err());
    /// ```
    pub fn new(depth: f64, tolerance: f64, gap: f64) -> Result<Self, ConfigError> {
        if !depth.is_finite() || depth <= 0.0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(ConfigError::InvalidGap(gap));
        }
        Ok(Self {
            depth,
            tolerance,
            gap,
        })
    }

    /// Returns a copy with a different depth.
    pub fn with_depth(self, depth: f64) -> Result<Self, ConfigError> {
        Self::new(depth, self.tolerance, self.gap)
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            tolerance: FLATTEN_TOLERANCE,
            gap: SHAPE_GAP,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when depth is zero, negative or not finite.
    InvalidDepth(f64),
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the placement gap is negative or not finite.
    InvalidGap(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(value) => {
                write!(f, "depth must be positive: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidGap(value) => {
                write!(f, "gap must not be negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

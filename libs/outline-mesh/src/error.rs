//! # Mesh Errors
//!
//! Error types for outline conversion.
//!
//! Only a failing outline source and an unusable configuration are errors.
//! Degenerate or non-simple geometry degrades the output instead; see
//! [`ConversionReport`](crate::ConversionReport).

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Depth is zero, negative or not finite.
    #[error("Invalid depth: {depth} (must be positive and finite)")]
    InvalidDepth { depth: f64 },

    /// Any other rejected conversion parameter.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The outline source could not produce outlines.
    #[error("Outline source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Writing the serialized document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Wraps an outline-source error.
    pub fn source_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}

/// Result type alias for conversion operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidDepth { depth: -1.0 };
        assert!(err.to_string().contains("-1"));

        let err = MeshError::from(ConfigError::InvalidTolerance(0.0));
        assert!(err.to_string().contains("tolerance"));
    }

    #[test]
    fn test_source_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad font");
        let err = MeshError::source_failed(io);
        assert!(err.to_string().contains("bad font"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

//! # Config Crate
//!
//! Centralized configuration constants for the outline-to-solid pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! flattener, the orchestrator, the outline sources and the CLI agree on
//! the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ConversionConfig, DEFAULT_DEPTH, FLATTEN_TOLERANCE};
//!
//! let config = ConversionConfig::default();
//! assert_eq!(config.depth, DEFAULT_DEPTH);
//! assert_eq!(config.tolerance, FLATTEN_TOLERANCE);
//!
//! let deeper = config.with_depth(12.5).unwrap();
//! assert_eq!(deeper.depth, 12.5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Stable Output**: Changing a default changes every generated solid
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

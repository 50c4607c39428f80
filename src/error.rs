//! Error types for edge-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building edge matrices or rasterizing.
///
/// Out-of-bounds pixels are never errors: the rasterizer clips them silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid dimensions for a screen or display configuration.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },

    /// A loosely-typed parameter list had the wrong number of values.
    #[error("Invalid parameter count: expected {expected} values, found {found}")]
    InvalidParameterCount {
        /// Number of values the operation requires.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// Matrix shapes are incompatible for the requested operation.
    #[error("Dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Shape (rows, cols) of the left operand.
        left: (usize, usize),
        /// Shape (rows, cols) of the right operand.
        right: (usize, usize),
    },

    /// Circle radius is negative or not finite.
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    /// Curve parameter step is not a finite positive number.
    #[error("Invalid curve step: {0} (must be finite and > 0)")]
    InvalidStep(f64),

    /// Curve family name is neither "hermite" nor "bezier".
    #[error("Unsupported curve type: {0:?} (expected \"hermite\" or \"bezier\")")]
    UnsupportedCurveType(String),
}

//! # Edge-Raster
//!
//! A minimal software rasterizer for the 2D end of a 3D rendering pipeline.
//!
//! Callers collect already-projected points in an [`EdgeMatrix`](edge_matrix::EdgeMatrix)
//! (single points, edges, tessellated circles and cubic curves), then draw the
//! matrix onto a [`Screen`](framebuffer::Screen) with an octant-aware
//! Bresenham-style line rasterizer.
//!
//! ## Quick Start
//!
//! ```rust
//! use edge_raster::prelude::*;
//!
//! let mut edges = EdgeMatrix::new();
//! edges.add_edge(Point3::new(10.0, 10.0, 0.0), Point3::new(90.0, 40.0, 0.0));
//! add_circle(&mut edges, &CircleSpec::new(Point3::new(50.0, 50.0, 0.0), 20.0)?);
//!
//! let mut screen = Screen::new(100, 100)?;
//! draw_lines(&edges, &mut screen, DEFAULT_DRAW_COLOR);
//! assert!(screen.count_color(DEFAULT_DRAW_COLOR) > 0);
//! # Ok::<(), edge_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for colors, points and [`DisplayConfig`](display::DisplayConfig)
//!
//! ## Coordinates
//!
//! Drawing coordinates are bottom-up: y = 0 is the bottom row. The screen is
//! stored top-down, so [`plot`](render::plot) writes `(x, y)` into
//! `screen[height - y - 1][x]`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel color values.
pub mod color;

/// Display resolution and configuration.
pub mod display;

/// Framebuffer the rasterizer writes into.
pub mod framebuffer;

/// Typed geometric inputs.
pub mod geometry;

/// Dense matrices and cubic basis matrices.
pub mod matrix;

// ============================================================================
// Geometry Builders
// ============================================================================

/// Homogeneous point collections.
pub mod edge_matrix;

/// Circle and cubic-curve tessellation.
pub mod curves;

// ============================================================================
// Rendering
// ============================================================================

/// Line rasterization and edge-list drawing.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for edge-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use edge_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, DEFAULT_DRAW_COLOR};
    pub use crate::curves::{add_circle, add_curve, add_curve_named, cubic_eval, CurveKind};
    pub use crate::display::{DisplayConfig, XRES, YRES};
    pub use crate::edge_matrix::EdgeMatrix;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Screen;
    pub use crate::geometry::{CircleSpec, CubicCurve, Line, Point, Point3};
    pub use crate::render::{draw_edge_pairs, draw_line, draw_lines, plot, Drawable};
}

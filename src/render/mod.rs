//! Rasterization of segments and edge matrices.
//!
//! # Algorithms
//!
//! - **Octant line**: decision-variable rasterization with per-octant sign rules
//! - **Edge-list drawing**: consecutive column pairs of an [`EdgeMatrix`](crate::edge_matrix::EdgeMatrix)
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod edges;
mod line;

pub use edges::{draw_edge_pairs, draw_lines};
pub use line::{draw_line, draw_line_from_params, plot, round_half_up, Drawable, Octant};

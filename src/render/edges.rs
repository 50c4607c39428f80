//! Drawing whole edge matrices.

use log::trace;

use super::line::{draw_line, Drawable};
use crate::color::Rgb;
use crate::edge_matrix::EdgeMatrix;
use crate::framebuffer::Screen;

/// Draw an edge matrix as one continuous polyline.
///
/// Column `i` is joined to column `i + 1` for every `i`, so a matrix built
/// from several [`add_edge`](EdgeMatrix::add_edge) calls also gets the
/// segment from the end of each edge to the start of the next. Use
/// [`draw_edge_pairs`] to draw edges independently. Fewer than two points
/// draw nothing.
pub fn draw_lines(edges: &EdgeMatrix, screen: &mut Screen, color: Rgb) {
    let mut points = edges.points();
    let Some(mut point) = points.next() else {
        return;
    };

    for next in points {
        draw_line(screen, point[0], point[1], next[0], next[1], color);
        point = next;
    }

    trace!("drew {} segments", edges.len().saturating_sub(1));
}

/// Draw an edge matrix as independent segments `(0, 1)`, `(2, 3)`, ….
///
/// A trailing unpaired point is ignored.
pub fn draw_edge_pairs(edges: &EdgeMatrix, screen: &mut Screen, color: Rgb) {
    let points: Vec<[f64; 4]> = edges.points().collect();
    for pair in points.chunks_exact(2) {
        let (p, q) = (pair[0], pair[1]);
        draw_line(screen, p[0], p[1], q[0], q[1], color);
    }

    trace!("drew {} edges", edges.len() / 2);
}

impl Drawable for EdgeMatrix {
    fn draw(&self, screen: &mut Screen, color: Rgb) {
        draw_lines(self, screen, color);
    }
}

//! Homogeneous point collections.
//!
//! An [`EdgeMatrix`] is a 4×N matrix whose columns are points `(x, y, z, 1)`
//! in insertion order. Edges are stored as two adjacent columns, and curves
//! and circles as runs of sampled points, so the drawer can treat every
//! collection the same way: as a sequence of consecutive column pairs.

use crate::error::Result;
use crate::geometry::{expect_params, Point3};
use crate::matrix::Matrix;

/// Rows of an edge matrix: x, y, z, w.
const HOMOGENEOUS_ROWS: usize = 4;

/// Ordered collection of homogeneous points.
///
/// Columns are only ever appended, and always with `w = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMatrix {
    matrix: Matrix,
}

impl Default for EdgeMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeMatrix {
    /// Create an empty edge matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty edge matrix with room for `points` columns.
    #[must_use]
    pub fn with_capacity(points: usize) -> Self {
        Self { matrix: Matrix::with_capacity(HOMOGENEOUS_ROWS, points) }
    }

    /// Number of points (columns).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.matrix.cols()
    }

    /// Whether the matrix holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the point `(x, y, z, 1)`.
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        self.push([x, y, z, 1.0]);
    }

    /// Append a typed point.
    pub fn add_point3(&mut self, point: Point3) {
        self.push(point.to_homogeneous());
    }

    /// Append an edge as two adjacent columns, `p0` then `p1`.
    pub fn add_edge(&mut self, p0: Point3, p1: Point3) {
        self.add_point3(p0);
        self.add_point3(p1);
    }

    /// Append an edge from exactly six values `x0 y0 z0 x1 y1 z1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameterCount`](crate::Error::InvalidParameterCount)
    /// for any other count; nothing is appended in that case.
    pub fn add_edge_from_params(&mut self, params: &[f64]) -> Result<()> {
        expect_params(params, 6)?;
        self.add_edge(
            Point3::new(params[0], params[1], params[2]),
            Point3::new(params[3], params[4], params[5]),
        );
        Ok(())
    }

    /// Column `index` as `[x, y, z, w]`.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<[f64; 4]> {
        self.matrix.column(index).map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Iterate over the points as `[x, y, z, w]` in insertion order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        self.matrix.columns().map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Read-only view of the underlying 4×N matrix.
    #[must_use]
    pub const fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    // Every constructor builds a HOMOGENEOUS_ROWS-row matrix, so a 4-value
    // column always fits.
    fn push(&mut self, column: [f64; HOMOGENEOUS_ROWS]) {
        self.matrix.append_column(&column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_is_empty() {
        let edges = EdgeMatrix::new();
        assert!(edges.is_empty());
        assert_eq!(edges.as_matrix().shape(), (4, 0));
    }

    #[test]
    fn test_add_point() {
        let mut edges = EdgeMatrix::new();
        edges.add_point(1.0, 2.0, 3.0);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges.point(0), Some([1.0, 2.0, 3.0, 1.0]));
        assert_eq!(edges.point(1), None);
    }

    #[test]
    fn test_add_edge_appends_adjacent_columns() {
        let mut edges = EdgeMatrix::new();
        edges.add_edge(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 6.0, 7.0));
        edges.add_edge(Point3::new(8.0, 9.0, 1.0), Point3::new(2.0, 3.0, 4.0));

        let points: Vec<_> = edges.points().collect();
        assert_eq!(
            points,
            vec![
                [0.0, 0.0, 0.0, 1.0],
                [5.0, 6.0, 7.0, 1.0],
                [8.0, 9.0, 1.0, 1.0],
                [2.0, 3.0, 4.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_every_column_is_affine() {
        let mut edges = EdgeMatrix::with_capacity(3);
        edges.add_point(-1.0, 0.5, 9.0);
        edges.add_edge(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0));
        assert!(edges.points().all(|p| p[3] == 1.0));
    }

    #[test]
    fn test_backing_matrix_keeps_four_rows() {
        let mut edges = EdgeMatrix::default();
        for i in 0..250 {
            edges.add_point(f64::from(i), 0.0, 0.0);
        }
        assert_eq!(edges.as_matrix().shape(), (4, 250));
        assert_eq!(edges.as_matrix().row(3), Some(vec![1.0; 250]));
        assert_eq!(edges.point(249), Some([249.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_add_edge_from_params_arity() {
        let mut edges = EdgeMatrix::new();
        edges.add_edge_from_params(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(edges.len(), 2);

        let err = edges.add_edge_from_params(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert_eq!(err, Error::InvalidParameterCount { expected: 6, found: 5 });
        assert!(edges.add_edge_from_params(&[0.0; 7]).is_err());
        assert_eq!(edges.len(), 2);
    }
}

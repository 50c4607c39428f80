//! Dense `f64` matrices.
//!
//! Storage is column-major so that appending a column (the only way an edge
//! matrix grows) is a plain `extend`.
//!
//! The cubic basis matrices follow the row-vector convention: a 1×4 row of
//! control values multiplied by [`Matrix::bezier`] or [`Matrix::hermite`]
//! yields the polynomial coefficients `[a, b, c, d]` of
//! `a·t³ + b·t² + c·t + d`, highest degree first.

use crate::error::{Error, Result};

/// An M×N matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Column-major cells: `(r, c)` lives at `c * rows + r`.
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-initialized `rows x cols` matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// An empty matrix with `rows` rows and room for `col_capacity` columns.
    #[must_use]
    pub fn with_capacity(rows: usize, col_capacity: usize) -> Self {
        Self { rows, cols: 0, data: Vec::with_capacity(rows * col_capacity) }
    }

    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build a matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameterCount`] if `values.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(Error::InvalidParameterCount {
                expected: rows * cols,
                found: values.len(),
            });
        }

        let mut m = Self::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                m.data[c * rows + r] = values[r * cols + c];
            }
        }
        Ok(m)
    }

    /// Bezier basis, row-vector convention.
    ///
    /// `[p0 p1 p2 p3] · B = [-p0+3p1-3p2+p3, 3p0-6p1+3p2, -3p0+3p1, p0]`
    #[must_use]
    pub fn bezier() -> Self {
        Self::from_rows4([
            [-1.0, 3.0, -3.0, 1.0],
            [3.0, -6.0, 3.0, 0.0],
            [-3.0, 3.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
        ])
    }

    /// Hermite basis, row-vector convention.
    ///
    /// The input row is `[p0 p1 r0 r1]` (two endpoints, then the tangents at
    /// each of them):
    /// `[p0 p1 r0 r1] · H = [2p0-2p1+r0+r1, -3p0+3p1-2r0-r1, r0, p0]`
    #[must_use]
    pub fn hermite() -> Self {
        Self::from_rows4([
            [2.0, -3.0, 0.0, 1.0],
            [-2.0, 3.0, 0.0, 0.0],
            [1.0, -2.0, 1.0, 0.0],
            [1.0, -1.0, 0.0, 0.0],
        ])
    }

    fn from_rows4(rows: [[f64; 4]; 4]) -> Self {
        let mut m = Self::zeros(4, 4);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m.data[c * 4 + r] = v;
            }
        }
        m
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[col * self.rows + row])
    }

    /// Extract one column as a point vector.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<&[f64]> {
        if col >= self.cols {
            return None;
        }
        let start = col * self.rows;
        Some(&self.data[start..start + self.rows])
    }

    /// Iterate over columns left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.rows.max(1))
    }

    /// Copy one row out.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows {
            return None;
        }
        Some((0..self.cols).map(|c| self.data[c * self.rows + row]).collect())
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `values.len()` differs from the
    /// row count. The matrix is left unchanged.
    pub fn push_column(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.rows {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: (values.len(), 1),
            });
        }
        self.append_column(values);
        Ok(())
    }

    /// Append a column whose length is already known to equal `rows`.
    pub(crate) fn append_column(&mut self, values: &[f64]) {
        debug_assert_eq!(values.len(), self.rows);
        self.data.extend_from_slice(values);
        self.cols += 1;
    }

    /// Matrix product `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch { left: self.shape(), right: rhs.shape() });
        }

        let mut out = Self::zeros(self.rows, rhs.cols);
        for c in 0..rhs.cols {
            for r in 0..self.rows {
                out.data[c * self.rows + r] = (0..self.cols)
                    .map(|k| self.data[k * self.rows + r] * rhs.data[c * rhs.rows + k])
                    .sum();
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.columns().all(|c| c.iter().all(|&v| v == 0.0)));
    }

    #[test]
    fn test_from_row_major_layout() {
        let m = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 2), Some(3.0));
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.column(1), Some(&[2.0, 5.0][..]));
        assert_eq!(m.row(1), Some(vec![4.0, 5.0, 6.0]));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_row_major_wrong_len() {
        let err = Matrix::from_row_major(2, 2, &[1.0]).unwrap_err();
        assert_eq!(err, Error::InvalidParameterCount { expected: 4, found: 1 });
    }

    #[test]
    fn test_push_column() {
        let mut m = Matrix::with_capacity(4, 2);
        assert_eq!(m.cols(), 0);
        m.push_column(&[1.0, 2.0, 3.0, 1.0]).unwrap();
        assert_eq!(m.cols(), 1);
        assert!(m.push_column(&[1.0, 2.0]).is_err());
        assert_eq!(m.cols(), 1);
    }

    #[test]
    fn test_multiply_identity() {
        let m = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.multiply(&Matrix::identity(2)).unwrap(), m);
    }

    #[test]
    fn test_multiply_row_by_square() {
        let row = Matrix::from_row_major(1, 2, &[1.0, 2.0]).unwrap();
        let sq = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let out = row.multiply(&sq).unwrap();
        assert_eq!(out.shape(), (1, 2));
        assert_eq!(out.row(0), Some(vec![7.0, 10.0]));
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert_eq!(
            a.multiply(&b),
            Err(Error::DimensionMismatch { left: (2, 3), right: (2, 3) })
        );
    }

    #[test]
    fn test_bezier_coefficients() {
        let row = Matrix::from_row_major(1, 4, &[0.0, 1.0, 2.0, 3.0]).unwrap();
        let coefs = row.multiply(&Matrix::bezier()).unwrap().row(0).unwrap();
        // Evenly spaced control points make a straight line: 3t.
        assert_eq!(coefs, vec![0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_hermite_coefficients() {
        // p0 = 0, p1 = 1, r0 = 1, r1 = 1 is the straight line t.
        let row = Matrix::from_row_major(1, 4, &[0.0, 1.0, 1.0, 1.0]).unwrap();
        let coefs = row.multiply(&Matrix::hermite()).unwrap().row(0).unwrap();
        assert_eq!(coefs, vec![0.0, 0.0, 1.0, 0.0]);
    }
}

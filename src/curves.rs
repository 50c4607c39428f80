//! Curve tessellation.
//!
//! Circles and cubic curves are sampled into ordered point runs appended to an
//! [`EdgeMatrix`]. Drawing the matrix with
//! [`draw_lines`](crate::render::draw_lines) then connects consecutive samples
//! into a polyline.
//!
//! Cubic curves go through a basis matrix: for each axis the four control
//! values form a 1×4 row, and `row · basis` yields the coefficients of
//! `a·t³ + b·t² + c·t + d`, which [`cubic_eval`] evaluates by Horner's rule.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use log::{trace, warn};

use crate::edge_matrix::EdgeMatrix;
use crate::error::{Error, Result};
use crate::geometry::{CircleSpec, CubicCurve};
use crate::matrix::Matrix;

/// Number of points sampled around a circle.
pub const CIRCLE_SAMPLES: usize = 100;

/// Most samples a single cubic curve may produce; smaller steps are rejected.
pub const MAX_CURVE_SAMPLES: usize = 1 << 20;

/// Parameter values closer than this to 1.0 count as 1.0 and are not sampled.
const T_EPSILON: f64 = 1e-9;

/// Cubic curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Endpoints plus tangents.
    Hermite,
    /// Four control points.
    Bezier,
}

impl CurveKind {
    /// The 4×4 basis-coefficient matrix for this family.
    #[must_use]
    pub fn basis(self) -> Matrix {
        match self {
            Self::Hermite => Matrix::hermite(),
            Self::Bezier => Matrix::bezier(),
        }
    }

    /// Lowercase family name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hermite => "hermite",
            Self::Bezier => "bezier",
        }
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hermite" => Ok(Self::Hermite),
            "bezier" => Ok(Self::Bezier),
            other => Err(Error::UnsupportedCurveType(other.to_string())),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Append [`CIRCLE_SAMPLES`] points around `circle`, starting at angle 0 and
/// going counter-clockwise.
///
/// The center's z is ignored; every sample has z = 0.
pub fn add_circle(edges: &mut EdgeMatrix, circle: &CircleSpec) {
    let center = circle.center().xy();
    let r = circle.radius();

    for i in 0..CIRCLE_SAMPLES {
        let theta = TAU * (i as f64 / CIRCLE_SAMPLES as f64);
        edges.add_point(r * theta.cos() + center.x, r * theta.sin() + center.y, 0.0);
    }

    trace!("circle r={r} at ({}, {}): {CIRCLE_SAMPLES} points", center.x, center.y);
}

/// Append samples of a cubic curve at `t = 0, step, 2·step, …` while `t < 1`.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] unless `step` is finite and positive, or if
/// it would produce more than [`MAX_CURVE_SAMPLES`] points. The matrix is
/// unchanged on error.
///
/// # Example
///
/// ```
/// use edge_raster::curves::{add_curve, CurveKind};
/// use edge_raster::edge_matrix::EdgeMatrix;
/// use edge_raster::geometry::CubicCurve;
///
/// let curve = CubicCurve::from_params(&[0.0, 0.0, 10.0, 20.0, 30.0, 20.0, 40.0, 0.0]).unwrap();
/// let mut edges = EdgeMatrix::new();
/// add_curve(&mut edges, &curve, 0.25, CurveKind::Bezier).unwrap();
/// assert_eq!(edges.len(), 4);
/// ```
pub fn add_curve(
    edges: &mut EdgeMatrix,
    curve: &CubicCurve,
    step: f64,
    kind: CurveKind,
) -> Result<()> {
    if !step.is_finite() || step <= 0.0 || step.recip() > MAX_CURVE_SAMPLES as f64 {
        return Err(Error::InvalidStep(step));
    }

    let basis = kind.basis();
    let x_coefs = coefficients(curve.xs(), &basis)?;
    let y_coefs = coefficients(curve.ys(), &basis)?;

    let before = edges.len();
    for t in parameter_steps(step) {
        edges.add_point(cubic_eval(t, &x_coefs), cubic_eval(t, &y_coefs), 0.0);
    }

    trace!("{kind} curve step={step}: {} points", edges.len() - before);
    Ok(())
}

/// Like [`add_curve`], selecting the family by name.
///
/// An unsupported name is not an error: a warning is logged and nothing is
/// appended.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] for a supported family with a bad step.
pub fn add_curve_named(
    edges: &mut EdgeMatrix,
    curve: &CubicCurve,
    step: f64,
    name: &str,
) -> Result<()> {
    match name.parse::<CurveKind>() {
        Ok(kind) => add_curve(edges, curve, step, kind),
        Err(err) => {
            warn!("{err}; no points added");
            Ok(())
        }
    }
}

/// Evaluate `c0·t³ + c1·t² + c2·t + c3`.
#[must_use]
pub fn cubic_eval(t: f64, coefficients: &[f64; 4]) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * t + c)
}

/// Parameter values `0, step, 2·step, …` strictly below 1.
///
/// Each value is computed as `i · step` rather than by repeated addition, so
/// rounding drift cannot add or drop a final sample.
fn parameter_steps(step: f64) -> impl Iterator<Item = f64> {
    (0_u64..)
        .map(move |i| i as f64 * step)
        .take_while(|&t| t < 1.0 - T_EPSILON)
}

/// `[v0 v1 v2 v3] · basis`, as highest-degree-first coefficients.
fn coefficients(values: [f64; 4], basis: &Matrix) -> Result<[f64; 4]> {
    let row = Matrix::from_row_major(1, 4, &values)?;
    let product = row.multiply(basis)?;

    match product.row(0).as_deref() {
        Some(&[a, b, c, d]) => Ok([a, b, c, d]),
        _ => Err(Error::DimensionMismatch { left: product.shape(), right: (1, 4) }),
    }
}

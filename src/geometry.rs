//! Typed geometric inputs.
//!
//! Builders take these instead of loose parameter lists. Each type that can be
//! built from a raw `&[f64]` checks the value count up front and reports
//! [`Error::InvalidParameterCount`] rather than indexing past the end.

use crate::error::{Error, Result};

/// Check that a raw parameter list has exactly `expected` values.
pub(crate) fn expect_params(params: &[f64], expected: usize) -> Result<()> {
    if params.len() != expected {
        return Err(Error::InvalidParameterCount { expected, found: params.len() });
    }
    Ok(())
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 3D point. Stored in an edge matrix as the column `(x, y, z, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build from exactly three values `x y z`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameterCount`] for any other count.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_params(params, 3)?;
        Ok(Self::new(params[0], params[1], params[2]))
    }

    /// Drop the z coordinate.
    #[must_use]
    pub const fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Homogeneous column `[x, y, z, 1]`.
    #[must_use]
    pub const fn to_homogeneous(self) -> [f64; 4] {
        [self.x, self.y, self.z, 1.0]
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle to tessellate.
///
/// Only the x and y of the center are sampled; the circle is always emitted
/// in the z = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    center: Point3,
    radius: f64,
}

impl CircleSpec {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if the radius is negative or not finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Build from exactly four values `cx cy cz r`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameterCount`] for any other count, or
    /// [`Error::InvalidRadius`] for a bad radius.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_params(params, 4)?;
        Self::new(Point3::new(params[0], params[1], params[2]), params[3])
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Point3 {
        self.center
    }

    /// Circle radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

/// Four 2D control values of a cubic curve.
///
/// For Bezier curves these are the control points `p0..p3`. For Hermite
/// curves `p0` and `p1` are the endpoints and `p2`, `p3` are the tangent
/// vectors at `p0` and `p1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubicCurve {
    /// Control values in order.
    pub points: [Point; 4],
}

impl CubicCurve {
    /// Create a curve from four control values.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { points: [p0, p1, p2, p3] }
    }

    /// Build from exactly eight values `x0 y0 x1 y1 x2 y2 x3 y3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameterCount`] for any other count.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        expect_params(params, 8)?;
        Ok(Self::new(
            Point::new(params[0], params[1]),
            Point::new(params[2], params[3]),
            Point::new(params[4], params[5]),
            Point::new(params[6], params[7]),
        ))
    }

    /// The four x values.
    #[must_use]
    pub fn xs(&self) -> [f64; 4] {
        self.points.map(|p| p.x)
    }

    /// The four y values.
    #[must_use]
    pub fn ys(&self) -> [f64; 4] {
        self.points.map(|p| p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        assert!((Point::new(3.0, 4.0).distance(Point::ORIGIN) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point3_from_params() {
        assert_eq!(Point3::from_params(&[1.0, 2.0, 3.0]), Ok(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            Point3::from_params(&[1.0, 2.0]),
            Err(Error::InvalidParameterCount { expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_point3_xy_drops_z() {
        assert_eq!(Point3::new(4.0, 5.0, 6.0).xy(), Point::new(4.0, 5.0));
    }

    #[test]
    fn test_homogeneous_w_is_one() {
        assert_eq!(Point3::new(4.0, 5.0, 6.0).to_homogeneous(), [4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn test_line_length() {
        assert!((Line::from_coords(0.0, 0.0, 0.0, 7.0).length() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_validation() {
        assert!(CircleSpec::new(Point3::default(), 0.0).is_ok());
        assert_eq!(
            CircleSpec::new(Point3::default(), -1.0),
            Err(Error::InvalidRadius(-1.0))
        );
        assert!(CircleSpec::new(Point3::default(), f64::INFINITY).is_err());
        assert!(CircleSpec::new(Point3::default(), f64::NAN).is_err());
    }

    #[test]
    fn test_circle_from_params() {
        let c = CircleSpec::from_params(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(c.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(c.radius(), 4.0);
        assert!(CircleSpec::from_params(&[1.0, 2.0, 3.0]).is_err());
        assert!(CircleSpec::from_params(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
    }

    #[test]
    fn test_curve_from_params() {
        let curve = CubicCurve::from_params(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(curve.xs(), [0.0, 2.0, 4.0, 6.0]);
        assert_eq!(curve.ys(), [1.0, 3.0, 5.0, 7.0]);
        assert_eq!(
            CubicCurve::from_params(&[0.0; 9]),
            Err(Error::InvalidParameterCount { expected: 8, found: 9 })
        );
    }
}

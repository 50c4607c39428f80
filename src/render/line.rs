//! Line rasterization.
//!
//! A decision-variable (midpoint/Bresenham) rasterizer generalized to every
//! slope by octant classification. Endpoints are swapped so x never decreases,
//! which leaves four cases plus vertical:
//!
//! | case     | slope          | major axis | minor step |
//! |----------|----------------|------------|------------|
//! | vertical | B = 0          | y          | none       |
//! | one      | 0 ≤ s ≤ 1      | +x         | +y         |
//! | two      | s > 1          | +y         | +x         |
//! | eight    | -1 ≤ s < 0     | +x         | -y         |
//! | seven    | s < -1         | -y         | +x         |
//!
//! with `A = y1 - y0` and `B = x0 - x1` (the negated run).
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use log::debug;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::Screen;
use crate::geometry::{Line, Point};

/// Magnitude past which adding 1.0 to an `f64` no longer changes it.
const MAX_STEPPABLE: f64 = 9_007_199_254_740_992.0;

/// Trait for things that can be rasterized onto a screen.
pub trait Drawable {
    /// Draw this primitive onto `screen` in `color`.
    fn draw(&self, screen: &mut Screen, color: Rgb);
}

/// Slope class selecting the rasterization variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    /// Zero run: step y only.
    Vertical,
    /// `0 ≤ slope ≤ 1`.
    One,
    /// `slope > 1`.
    Two,
    /// `slope < -1`.
    Seven,
    /// `-1 ≤ slope < 0`.
    Eight,
}

impl Octant {
    /// Classify a segment by `a = y1 - y0` and `b = x0 - x1`, where the
    /// endpoints are already ordered so `b ≤ 0`.
    ///
    /// Returns `None` when the slope is NaN.
    #[must_use]
    pub fn classify(a: f64, b: f64) -> Option<Self> {
        if b == 0.0 {
            return Some(Self::Vertical);
        }

        let slope = a / -b;
        if (0.0..=1.0).contains(&slope) {
            Some(Self::One)
        } else if slope > 1.0 {
            Some(Self::Two)
        } else if (-1.0..0.0).contains(&slope) {
            Some(Self::Eight)
        } else if slope < -1.0 {
            Some(Self::Seven)
        } else {
            None
        }
    }
}

/// Draw the segment `(x0, y0) → (x1, y1)`.
///
/// Coordinates are bottom-up; [`plot`] flips them into screen rows. Pixels
/// outside the screen are dropped. A segment with a coordinate that is not
/// finite, or too large to step by 1, is skipped.
///
/// # Example
///
/// ```
/// use edge_raster::color::Rgb;
/// use edge_raster::framebuffer::Screen;
/// use edge_raster::render::draw_line;
///
/// let mut screen = Screen::new(10, 10).unwrap();
/// draw_line(&mut screen, 0.0, 0.0, 5.0, 0.0, Rgb::BLACK);
/// assert_eq!(screen.count_color(Rgb::BLACK), 6);
/// ```
pub fn draw_line(screen: &mut Screen, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb) {
    walk_line(x0, y0, x1, y1, |x, y| {
        plot(screen, x, y, color);
    });
}

/// Draw a segment from a raw `x0 y0 x1 y1` parameter list.
///
/// # Errors
///
/// Returns [`Error::InvalidParameterCount`] unless exactly four values are
/// given; nothing is drawn in that case.
pub fn draw_line_from_params(screen: &mut Screen, params: &[f64], color: Rgb) -> Result<()> {
    match *params {
        [x0, y0, x1, y1] => {
            draw_line(screen, x0, y0, x1, y1, color);
            Ok(())
        }
        _ => Err(Error::InvalidParameterCount { expected: 4, found: params.len() }),
    }
}

/// Write one pixel.
///
/// Column is `round_half_up(x)`, row is `height - round_half_up(y) - 1`.
/// Returns `false`, without touching the screen, when that cell lies outside
/// `[0, width) × [0, height)` or a coordinate is not finite.
pub fn plot(screen: &mut Screen, x: f64, y: f64, color: Rgb) -> bool {
    if !Point::new(x, y).is_finite() {
        return false;
    }

    let col = round_half_up(x);
    let row = (screen.height() as i64).saturating_sub(round_half_up(y)).saturating_sub(1);

    let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
        return false;
    };
    if col >= screen.width() || row >= screen.height() {
        return false;
    }

    screen[row][col] = color;
    true
}

/// Round to an integer pixel coordinate: add one when the fractional part is
/// at least 0.5, otherwise truncate.
///
/// Negative inputs have a non-positive fractional part and always truncate
/// toward zero, so `-0.5` becomes `0` and `-1.7` becomes `-1`.
#[must_use]
pub fn round_half_up(f: f64) -> i64 {
    let whole = f.trunc();
    if f - whole < 0.5 {
        whole as i64
    } else {
        (f + 1.0) as i64
    }
}

/// Visit every pixel position of the segment, in rasterization order.
pub(crate) fn walk_line<F>(x0: f64, y0: f64, x1: f64, y1: f64, mut visit: F)
where
    F: FnMut(f64, f64),
{
    if ![x0, y0, x1, y1].iter().all(|v| v.is_finite() && v.abs() < MAX_STEPPABLE) {
        debug!("skipping unsteppable segment ({x0}, {y0}) -> ({x1}, {y1})");
        return;
    }

    let (x0, y0, x1, y1) = if x1 < x0 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let a = y1 - y0;
    let b = x0 - x1;
    let Some(octant) = Octant::classify(a, b) else {
        return;
    };

    let mut x = x0;
    let mut y = y0;

    match octant {
        Octant::Vertical => {
            let (lo, hi) = if y1 < y0 { (y1, y0) } else { (y0, y1) };
            y = lo;
            while y <= hi {
                visit(x, y);
                y += 1.0;
            }
        }
        Octant::One => {
            let mut d = 2.0 * a + b;
            while x <= x1 && y <= y1 {
                visit(x, y);
                if d > 0.0 {
                    y += 1.0;
                    d += 2.0 * b;
                }
                x += 1.0;
                d += 2.0 * a;
            }
        }
        Octant::Two => {
            let mut d = a + 2.0 * b;
            while x <= x1 && y <= y1 {
                visit(x, y);
                if d < 0.0 {
                    x += 1.0;
                    d += 2.0 * a;
                }
                y += 1.0;
                d += 2.0 * b;
            }
        }
        Octant::Eight => {
            let mut d = 2.0 * a - b;
            while x <= x1 && y >= y1 {
                visit(x, y);
                if d < 0.0 {
                    y -= 1.0;
                    d -= 2.0 * b;
                }
                x += 1.0;
                d += 2.0 * a;
            }
        }
        Octant::Seven => {
            let mut d = a - 2.0 * b;
            while x <= x1 && y >= y1 {
                visit(x, y);
                if d > 0.0 {
                    x += 1.0;
                    d += 2.0 * a;
                }
                y -= 1.0;
                d -= 2.0 * b;
            }
        }
    }
}

impl Drawable for Line {
    fn draw(&self, screen: &mut Screen, color: Rgb) {
        draw_line(screen, self.start.x, self.start.y, self.end.x, self.end.y, color);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn walked(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        walk_line(f64::from(x0), f64::from(y0), f64::from(x1), f64::from(y1), |x, y| {
            out.push((x, y));
        });
        out
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_one_pixel_per_major_step(
            x0 in -200i32..200, y0 in -200i32..200, x1 in -200i32..200, y1 in -200i32..200
        ) {
            let pts = walked(x0, y0, x1, y1);
            let expected = (x1 - x0).unsigned_abs().max((y1 - y0).unsigned_abs()) as usize + 1;
            prop_assert_eq!(pts.len(), expected);
        }

        #[test]
        fn prop_no_gaps(
            x0 in -200i32..200, y0 in -200i32..200, x1 in -200i32..200, y1 in -200i32..200
        ) {
            let pts = walked(x0, y0, x1, y1);
            for w in pts.windows(2) {
                prop_assert!((w[0].0 - w[1].0).abs() <= 1.0);
                prop_assert!((w[0].1 - w[1].1).abs() <= 1.0);
            }
        }

        #[test]
        fn prop_hits_both_endpoints(
            x0 in -200i32..200, y0 in -200i32..200, x1 in -200i32..200, y1 in -200i32..200
        ) {
            let pts = walked(x0, y0, x1, y1);
            let a = (f64::from(x0), f64::from(y0));
            let b = (f64::from(x1), f64::from(y1));
            prop_assert!(pts.contains(&a));
            prop_assert!(pts.contains(&b));
        }

        #[test]
        fn prop_coincident_endpoints_plot_once(x in 0i32..50, y in 0i32..50) {
            let mut screen = Screen::new(50, 50).expect("screen creation should succeed");
            draw_line(&mut screen, f64::from(x), f64::from(y), f64::from(x), f64::from(y), Rgb::BLACK);
            prop_assert_eq!(screen.count_color(Rgb::BLACK), 1);
            prop_assert_eq!(screen[(49 - y) as usize][x as usize], Rgb::BLACK);
        }

        #[test]
        fn prop_plot_never_panics(x in proptest::num::f64::ANY, y in proptest::num::f64::ANY) {
            let mut screen = Screen::new(8, 8).expect("screen creation should succeed");
            let wrote = plot(&mut screen, x, y, Rgb::RED);
            prop_assert_eq!(screen.count_color(Rgb::RED), usize::from(wrote));
        }
    }
}

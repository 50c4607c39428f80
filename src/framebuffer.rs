//! Framebuffer the rasterizer writes into.
//!
//! A [`Screen`] is a row-major grid of [`Rgb`] cells. Row 0 is the top of the
//! image; the rasterizer flips its bottom-up y coordinates before writing.

use std::ops::{Index, IndexMut};

use crate::color::Rgb;
use crate::display::DisplayConfig;
use crate::error::{Error, Result};

/// Row-major pixel grid indexed `[row][col]`.
///
/// The screen is owned by the caller. Drawing functions only write single
/// cells; nothing in this crate resizes or reallocates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Width in pixels.
    width: usize,
    /// Height in pixels.
    height: usize,
    /// Cells in row-major order.
    pixels: Vec<Rgb>,
}

impl Screen {
    /// Create a screen with the given dimensions, filled with white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use edge_raster::framebuffer::Screen;
    ///
    /// let screen = Screen::new(80, 60).unwrap();
    /// assert_eq!(screen.width(), 80);
    /// assert_eq!(screen.height(), 60);
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self { width, height, pixels: vec![Rgb::WHITE; width * height] })
    }

    /// Create a screen sized by a display configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has a zero dimension.
    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.width(), config.height())
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Get all cells in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Rgb]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [Rgb]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&mut self.pixels[start..start + self.width])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Set every cell to one color.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Get the color at `(col, row)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.pixels[row * self.width + col])
    }

    /// Set the color at `(col, row)`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, col: usize, row: usize, color: Rgb) {
        if col >= self.width || row >= self.height {
            return;
        }
        self.pixels[row * self.width + col] = color;
    }

    /// Count cells holding exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Coordinates `(col, row)` of every cell holding `color`, row-major order.
    #[must_use]
    pub fn positions_of(&self, color: Rgb) -> Vec<(usize, usize)> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == color)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }
}

impl Default for Screen {
    /// An `XRES x YRES` white screen.
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self {
            width: config.width(),
            height: config.height(),
            pixels: vec![Rgb::WHITE; config.width() * config.height()],
        }
    }
}

impl Index<usize> for Screen {
    type Output = [Rgb];

    /// Row access, so cells read as `screen[row][col]`.
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }
}

impl IndexMut<usize> for Screen {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.width;
        &mut self.pixels[start..start + self.width]
    }
}

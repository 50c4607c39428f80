//! Display resolution and configuration.
//!
//! The rasterizer works against a fixed-size screen. [`XRES`] and [`YRES`] are
//! the stock resolution; [`DisplayConfig`] lets a caller choose another one
//! before allocating a [`Screen`](crate::framebuffer::Screen).

use crate::error::{Error, Result};

/// Default horizontal resolution in pixels.
pub const XRES: usize = 500;

/// Default vertical resolution in pixels.
pub const YRES: usize = 500;

/// Screen resolution settings.
///
/// # Example
///
/// ```
/// use edge_raster::display::DisplayConfig;
///
/// let config = DisplayConfig::new().dimensions(320, 200);
/// assert_eq!(config.width(), 320);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Horizontal resolution.
    width: usize,
    /// Vertical resolution.
    height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: XRES, height: YRES }
    }
}

impl DisplayConfig {
    /// Create a configuration at the default `XRES x YRES` resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution.
    #[must_use]
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Horizontal resolution.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Vertical resolution.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check that both dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        Ok(())
    }
}

impl batuta_common::display::WithDimensions for DisplayConfig {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width as usize;
        self.height = height as usize;
    }
}

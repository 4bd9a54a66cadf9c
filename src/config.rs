//! Canvas configuration types and builder

use crate::color::{Color, ColorMode};
pub use crate::error::BuilderError;

/// Canvas dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Calculate required buffer size in bytes for `mode`
    ///
    /// Sub-byte modes round up to a whole byte.
    ///
    /// ```
    /// use fbgfx::{ColorMode, Dimensions};
    ///
    /// let dims = match Dimensions::new(10, 3) {
    ///     Ok(dims) => dims,
    ///     Err(_) => return,
    /// };
    /// assert_eq!(dims.buffer_size(ColorMode::Mono), 4);
    /// assert_eq!(dims.buffer_size(ColorMode::Rgb888), 90);
    /// ```
    pub fn buffer_size(&self, mode: ColorMode) -> usize {
        (self.pixel_count() * mode.bits_per_pixel()).div_ceil(8)
    }
}

/// Mirroring applied to coordinates before they are addressed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mirror {
    /// No mirroring
    #[default]
    None,
    /// Flip left-to-right
    Horizontal,
    /// Flip top-to-bottom
    Vertical,
    /// Flip on both axes
    Both,
}

impl Mirror {
    /// Whether x coordinates are reflected
    pub const fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether y coordinates are reflected
    pub const fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Canvas configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Canvas dimensions
    pub dimensions: Dimensions,
    /// Pixel encoding of the canvas
    pub mode: ColorMode,
    /// Coordinate mirroring
    pub mirror: Mirror,
    /// Initial pen stroke width
    pub stroke: u32,
    /// Initial pen color (converted to `mode` when the canvas is created)
    pub pen: Color,
}

/// Builder for constructing canvas configuration
///
/// # Example
///
/// ```
/// use fbgfx::{Builder, ColorMode, Dimensions, Mirror};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .mode(ColorMode::Rgb565)
///     .mirror(Mirror::Horizontal)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.stroke, 1);
/// ```
#[must_use]
pub struct Builder {
    /// Canvas dimensions (required)
    dimensions: Option<Dimensions>,
    /// Pixel encoding
    mode: ColorMode,
    /// Coordinate mirroring
    mirror: Mirror,
    /// Pen stroke width
    stroke: u32,
    /// Pen color
    pen: Color,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            mode: ColorMode::Mono,
            mirror: Mirror::None,
            stroke: 1,
            pen: Color::WHITE,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set canvas dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the pixel encoding
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set coordinate mirroring
    pub fn mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }

    /// Set the initial pen stroke width
    pub fn stroke(mut self, stroke: u32) -> Self {
        self.stroke = stroke;
        self
    }

    /// Set the initial pen color
    pub fn pen(mut self, color: Color) -> Self {
        self.pen = color;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            mode: self.mode,
            mirror: self.mirror,
            stroke: self.stroke,
            pen: self.pen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_zero() {
        assert!(matches!(
            Dimensions::new(0, 10),
            Err(BuilderError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
        assert!(Dimensions::new(10, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_buffer_size_per_mode() {
        let dims = Dimensions::new(4, 4).unwrap();
        assert_eq!(dims.buffer_size(ColorMode::Mono), 2);
        assert_eq!(dims.buffer_size(ColorMode::Rgb565), 32);
        assert_eq!(dims.buffer_size(ColorMode::Rgb888), 48);
        assert_eq!(dims.buffer_size(ColorMode::Argb8888), 64);

        let odd = Dimensions::new(3, 3).unwrap();
        assert_eq!(odd.buffer_size(ColorMode::Mono), 2);
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(8, 8).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.mode, ColorMode::Mono);
        assert_eq!(config.mirror, Mirror::None);
        assert_eq!(config.stroke, 1);
        assert_eq!(config.pen, Color::WHITE);
    }

    #[test]
    fn test_mirror_axes() {
        assert!(!Mirror::None.horizontal() && !Mirror::None.vertical());
        assert!(Mirror::Horizontal.horizontal() && !Mirror::Horizontal.vertical());
        assert!(!Mirror::Vertical.horizontal() && Mirror::Vertical.vertical());
        assert!(Mirror::Both.horizontal() && Mirror::Both.vertical());
    }
}

//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for every [`Canvas`], so embedded-graphics
//! primitives, images and fonts can be drawn next to the native raster
//! operations. Pixels drawn this way go through [`Canvas::write_pixel`] and are
//! clipped, mirrored and converted the same way.
//!
//! embedded-graphics colors convert into [`Color`] with `From`:
//!
//! - `Rgb888` becomes [`Color::Rgb888`]
//! - `Rgb565` becomes [`Color::Rgb565`] with the same raw bits
//! - `BinaryColor` becomes [`Color::Mono`]
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use fbgfx::{Builder, Canvas, Color, ColorMode};
//!
//! let dims = match fbgfx::Dimensions::new(32, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mode(ColorMode::Rgb565).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::new(config);
//!
//! let _ = Rectangle::new(Point::new(4, 4), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_fill(Color::RED))
//!     .draw(&mut canvas);
//!
//! assert_eq!(canvas.read_pixel(4, 4), Some(Color::rgb565(255, 0, 0)));
//! assert_eq!(canvas.read_pixel(12, 12), Some(Color::Rgb565(0)));
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{BinaryColor, Rgb565, Rgb888, RgbColor, raw::RawU32},
    prelude::{Pixel, PixelColor},
};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Error;
use crate::sink::PixelSink;

impl PixelColor for Color {
    type Raw = RawU32;
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::rgb(color.r(), color.g(), color.b())
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        let (r, g, b) = (u16::from(color.r()), u16::from(color.g()), u16::from(color.b()));
        Color::Rgb565((r << 11) | (g << 5) | b)
    }
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        Color::Mono(color.is_on())
    }
}

impl<T> DrawTarget for Canvas<'_, T>
where
    T: PixelSink,
{
    type Color = Color;
    type Error = Error<T::Error>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.write_pixel(x, y, color)?;
        }
        Ok(())
    }
}

impl<T> OriginDimensions for Canvas<'_, T>
where
    T: PixelSink,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

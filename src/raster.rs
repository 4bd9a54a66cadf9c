//! Rasterization: lines, rectangles and bitmap blits
//!
//! Every operation here is expressed in terms of [`Canvas::write_pixel`], so
//! shapes that extend past the canvas edge are clipped per pixel.
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Bitmap, Builder, Canvas, Color, ColorMode, Dimensions};
//!
//! let dims = match Dimensions::new(16, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mode(ColorMode::Mono).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::new(config);
//! let pen = canvas.pen().color;
//!
//! let _ = canvas.draw_line(0, 0, 15, 15, pen);
//! let _ = canvas.draw_rect(4, 4, 8, 8, pen, false);
//!
//! // 2x2 checker: set bits draw, clear bits are transparent
//! let checker = Bitmap::new(&[0b1001_0000], 2, 2, ColorMode::Mono);
//! let _ = canvas.draw_bmp(0, 14, &checker, pen);
//! assert_eq!(canvas.read_pixel(0, 14), Some(Color::Mono(true)));
//! assert_eq!(canvas.read_pixel(1, 14), Some(Color::Mono(false)));
//! ```

use core::ops::Range;

use crate::canvas::{Canvas, CanvasResult};
use crate::color::{Color, ColorMode};
use crate::error::Error;
use crate::sink::PixelSink;

/// Borrowed bitmap image
///
/// Mono data is packed 1 bit per pixel, MSB first, row-major, with no padding
/// between rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    /// Packed pixel data
    pub data: &'a [u8],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Encoding of `data`
    pub mode: ColorMode,
}

impl<'a> Bitmap<'a> {
    /// Describe `data` as a `width` x `height` image in `mode`
    pub const fn new(data: &'a [u8], width: u16, height: u16, mode: ColorMode) -> Self {
        Self {
            data,
            width,
            height,
            mode,
        }
    }

    /// Whether the Mono pixel at (col, row) is set
    ///
    /// Pixels past the end of `data` read as clear.
    pub fn is_set(&self, col: u16, row: u16) -> bool {
        let bit = usize::from(row) * usize::from(self.width) + usize::from(col);
        self.data
            .get(bit / 8)
            .is_some_and(|byte| byte & (0x80 >> (bit % 8)) != 0)
    }
}

impl<T> Canvas<'_, T>
where
    T: PixelSink,
{
    /// Draw a line from (x0, y0) to (x1, y1), endpoints included
    ///
    /// Integer Bresenham; steep lines are traced with the axes swapped. The
    /// color is converted to the canvas mode once, before tracing. Only the
    /// stretch of the major axis that crosses the canvas is walked, so
    /// endpoints anywhere in the `i32` range are fine.
    ///
    /// # Errors
    ///
    /// Returns `Error::Sink` if the sink rejects a write.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> CanvasResult<T::Error> {
        let color = color.convert(self.mode());
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };

        let limit = i64::from(if steep { self.height() } else { self.width() });
        let first = (-x0).max(0);
        let last = dx.min(limit - 1 - x0);
        if first > last {
            return Ok(());
        }

        let (skipped, mut err) = bresenham_state(dx, dy, first);
        let mut y = y0 + ystep * skipped;

        for step in first..=last {
            let x = x0 + step;
            let (px, py) = if steep { (y, x) } else { (x, y) };
            if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                self.write_pixel(px, py, color)?;
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
        Ok(())
    }

    /// Draw a `w` x `h` rectangle with its top-left corner at (x, y)
    ///
    /// Filled rectangles cover every pixel of the region. Outlines are four
    /// bands as wide as the pen stroke, drawn inside the region; a stroke wide
    /// enough to meet in the middle fills the rectangle. Non-positive sizes
    /// draw nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Sink` if the sink rejects a write.
    pub fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        filled: bool,
    ) -> CanvasResult<T::Error> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let color = color.convert(self.mode());
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        let stroke = i64::from(self.pen().stroke.max(1));

        if filled || stroke * 2 >= w || stroke * 2 >= h {
            return self.fill_region(x, y, w, h, color);
        }

        self.fill_region(x, y, w, stroke, color)?;
        self.fill_region(x, y + h - stroke, w, stroke, color)?;
        self.fill_region(x, y + stroke, stroke, h - 2 * stroke, color)?;
        self.fill_region(x + w - stroke, y + stroke, stroke, h - 2 * stroke, color)
    }

    /// Draw a circle
    ///
    /// # Errors
    ///
    /// Circle rasterization is not supported; always returns
    /// `Error::NotImplemented`.
    pub fn draw_circle(
        &mut self,
        _x: i32,
        _y: i32,
        _radius: i32,
        _color: Color,
        _filled: bool,
    ) -> CanvasResult<T::Error> {
        log::debug!("circle rasterization is not implemented");
        Err(Error::NotImplemented)
    }

    /// Blit `bitmap` with its top-left corner at (x, y)
    ///
    /// Set bits are drawn in `color`, converted to the canvas mode once;
    /// clear bits leave the canvas untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotImplemented` for non-Mono bitmaps, or `Error::Sink`
    /// if the sink rejects a write.
    pub fn draw_bmp(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &Bitmap<'_>,
        color: Color,
    ) -> CanvasResult<T::Error> {
        if bitmap.mode != ColorMode::Mono {
            log::debug!("{:?} bitmap blit is not implemented", bitmap.mode);
            return Err(Error::NotImplemented);
        }
        let color = color.convert(self.mode());
        for row in 0..bitmap.height {
            // Rows past i32::MAX are off the canvas, as are all after them
            let Some(py) = y.checked_add(i32::from(row)) else {
                break;
            };
            for col in 0..bitmap.width {
                let Some(px) = x.checked_add(i32::from(col)) else {
                    break;
                };
                if bitmap.is_set(col, row) {
                    self.write_pixel(px, py, color)?;
                }
            }
        }
        Ok(())
    }

    /// Fill the part of a region that lies on the canvas
    fn fill_region(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) -> CanvasResult<T::Error> {
        for row in clip_span(y, h, self.height()) {
            for col in clip_span(x, w, self.width()) {
                self.write_pixel(col, row, color)?;
            }
        }
        Ok(())
    }
}

/// Intersect `start..start + len` with `0..limit`
fn clip_span(start: i64, len: i64, limit: u16) -> Range<i32> {
    let limit = i64::from(limit);
    let lo = start.clamp(0, limit);
    let hi = start.saturating_add(len.max(0)).clamp(lo, limit);
    lo as i32..hi as i32
}

/// Bresenham state after `steps` steps along the major axis
///
/// Returns the number of minor-axis steps taken and the error term, the same
/// values the incremental loop reaches. Requires `0 <= dy <= dx`.
fn bresenham_state(dx: i64, dy: i64, steps: i64) -> (i64, i64) {
    let (dx, dy, steps) = (i128::from(dx), i128::from(dy), i128::from(steps));
    let start = dx / 2;
    let owed = steps * dy - start;
    let minor = if owed > 0 { (owed + dx - 1) / dx } else { 0 };
    let err = start - steps * dy + minor * dx;
    (
        i64::try_from(minor).unwrap_or(i64::MAX),
        i64::try_from(err).unwrap_or(0),
    )
}

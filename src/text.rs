//! Bitmap fonts and text layout
//!
//! A [`Font`] is a table of [`Glyph`]s indexed by character code minus
//! [`Font::first`], each pointing into one shared bitmap blob. Glyph bitmaps are
//! monochrome, packed MSB first, row-major, with no padding between rows.
//!
//! Font data is read-only and owned by the caller; a canvas only borrows it.
//!
//! ## Layout rules
//!
//! - Each character in the font advances the cursor by `x_offset + x_advance`.
//! - `'\n'` returns the cursor to the starting x and moves down by
//!   [`Font::y_advance`].
//! - Characters outside `first..=last` are skipped without advancing.
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Builder, Canvas, Color, ColorMode, Dimensions, Font, Glyph};
//!
//! // One 2x2 glyph for 'A': a filled square
//! static BITMAP: [u8; 1] = [0xF0];
//! static GLYPHS: [Glyph; 1] = [Glyph::new(0, 2, 2, 3, 0, 0)];
//! static FONT: Font<'static> = Font::new(&BITMAP, &GLYPHS, b'A', b'A', 4);
//!
//! let dims = match Dimensions::new(8, 8) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mode(ColorMode::Mono).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::new(config);
//! canvas.set_font(&FONT);
//!
//! let size = canvas.measure("AA\nA");
//! assert_eq!((size.width, size.height), (6, 8));
//!
//! let _ = canvas.print(0, 0, "AA", Color::WHITE);
//! assert_eq!(canvas.read_pixel(3, 1), Some(Color::Mono(true)));
//! assert_eq!(canvas.read_pixel(2, 1), Some(Color::Mono(false)));
//! ```

use crate::canvas::{Canvas, CanvasResult};
use crate::color::{Color, ColorMode};
use crate::error::Error;
use crate::raster::Bitmap;
use crate::sink::PixelSink;

/// Metrics and bitmap location of one character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset of the glyph bitmap in [`Font::bitmap`]
    pub offset: usize,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Distance to advance the cursor after the glyph
    pub x_advance: u8,
    /// Horizontal distance from the cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical distance from the cursor to the bitmap's top edge
    pub y_offset: i8,
}

impl Glyph {
    /// Create a glyph
    pub const fn new(
        offset: usize,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Cursor advance for this glyph, `x_offset + x_advance`
    pub fn advance(&self) -> i32 {
        i32::from(self.x_offset) + i32::from(self.x_advance)
    }
}

/// Bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    /// Concatenated glyph bitmaps
    pub bitmap: &'a [u8],
    /// Glyph table, indexed by character code minus `first`
    pub glyphs: &'a [Glyph],
    /// First character code in the font
    pub first: u8,
    /// Last character code in the font
    pub last: u8,
    /// Line spacing in pixels
    pub y_advance: u8,
}

/// Measured extent of a block of text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextSize {
    /// Width of the widest line in pixels
    pub width: u32,
    /// Number of lines times the font line spacing
    pub height: u32,
}

impl<'a> Font<'a> {
    /// Create a font
    pub const fn new(
        bitmap: &'a [u8],
        glyphs: &'a [Glyph],
        first: u8,
        last: u8,
        y_advance: u8,
    ) -> Self {
        Self {
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
        }
    }

    /// Look up the glyph for `c`
    ///
    /// Returns `None` for characters outside `first..=last` or missing from
    /// the glyph table.
    pub fn glyph(&self, c: char) -> Option<&'a Glyph> {
        let code = u32::from(c);
        if code < u32::from(self.first) || code > u32::from(self.last) {
            return None;
        }
        let index = usize::try_from(code - u32::from(self.first)).ok()?;
        self.glyphs.get(index)
    }

    /// Monochrome bitmap of `glyph`
    ///
    /// Returns `None` if the glyph offset lies outside the font bitmap.
    pub fn glyph_bitmap(&self, glyph: &Glyph) -> Option<Bitmap<'a>> {
        let data = self.bitmap.get(glyph.offset..)?;
        Some(Bitmap::new(
            data,
            u16::from(glyph.width),
            u16::from(glyph.height),
            ColorMode::Mono,
        ))
    }

    /// Measure `text` as [`Canvas::print`] would lay it out
    ///
    /// Text that advances the cursor nowhere measures as zero.
    pub fn measure(&self, text: &str) -> TextSize {
        let mut lines: u32 = 1;
        let mut cursor: i32 = 0;
        let mut widest: i32 = 0;

        for c in text.chars() {
            if c == '\n' {
                lines = lines.saturating_add(1);
                cursor = 0;
            } else if let Some(glyph) = self.glyph(c) {
                cursor = cursor.saturating_add(glyph.advance());
                widest = widest.max(cursor);
            }
        }

        match u32::try_from(widest) {
            Ok(width) if width > 0 => TextSize {
                width,
                height: lines.saturating_mul(u32::from(self.y_advance)),
            },
            _ => TextSize::default(),
        }
    }
}

impl<T> Canvas<'_, T>
where
    T: PixelSink,
{
    /// Measure `text` in the bound font
    ///
    /// Returns a zero size when no font is bound.
    pub fn measure(&self, text: &str) -> TextSize {
        self.font()
            .map_or_else(TextSize::default, |font| font.measure(text))
    }

    /// Print `text` with the cursor starting at (x, y)
    ///
    /// Each glyph is blitted at the cursor plus its offsets; clear glyph bits
    /// are transparent.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoFontSet` if no font is bound, or `Error::Sink` if the
    /// sink rejects a write.
    pub fn print(&mut self, x: i32, y: i32, text: &str, color: Color) -> CanvasResult<T::Error> {
        let font = self.font().ok_or(Error::NoFontSet)?;
        let color = color.convert(self.mode());
        let (mut cursor_x, mut cursor_y) = (x, y);

        for c in text.chars() {
            if c == '\n' {
                cursor_x = x;
                cursor_y = cursor_y.saturating_add(i32::from(font.y_advance));
                continue;
            }
            let Some(glyph) = font.glyph(c) else {
                continue;
            };
            if let Some(bitmap) = font.glyph_bitmap(glyph) {
                self.draw_bmp(
                    cursor_x.saturating_add(i32::from(glyph.x_offset)),
                    cursor_y.saturating_add(i32::from(glyph.y_offset)),
                    &bitmap,
                    color,
                )?;
            }
            cursor_x = cursor_x.saturating_add(glyph.advance());
        }
        Ok(())
    }
}

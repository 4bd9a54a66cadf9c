//! Color test pattern

use crate::canvas::{Canvas, CanvasResult};
use crate::color::Color;
use crate::sink::PixelSink;

/// Bar colors, left to right on the upper row
const BARS: [Color; 7] = [
    Color::WHITE,
    Color::YELLOW,
    Color::CYAN,
    Color::GREEN,
    Color::FUCHSIA,
    Color::RED,
    Color::BLUE,
];

const LABEL: &str = "Test";

impl<T> Canvas<'_, T>
where
    T: PixelSink,
{
    /// Draw a color test pattern over the whole canvas
    ///
    /// Black background with a white border and a grid every eighth of the
    /// height, two rows of seven color bars (the lower row reversed), and
    /// "Test" centered in white if a font is bound. Leaves the pen at stroke 1,
    /// white.
    ///
    /// # Errors
    ///
    /// Returns `Error::Sink` if the sink rejects a write.
    pub fn test_pattern(&mut self) -> CanvasResult<T::Error> {
        let width = i32::from(self.width());
        let height = i32::from(self.height());
        let grid = (height / 8).max(1);

        self.fill(Color::BLACK)?;
        self.set_pen(1, Color::WHITE);
        let pen = self.pen().color;

        self.draw_line(0, 0, 0, height - 1, pen)?;
        self.draw_line(0, 0, width - 1, 0, pen)?;
        self.draw_line(0, height - 1, width - 1, height - 1, pen)?;
        self.draw_line(width - 1, 0, width - 1, height - 1, pen)?;

        for y in (grid..height).step_by(grid as usize) {
            self.draw_line(0, y, width, y, pen)?;
        }
        for x in (grid..width).step_by(grid as usize) {
            self.draw_line(x, 0, x, height, pen)?;
        }

        let bar_width = width / 14 + 1;
        let left = (width - bar_width * 7) / 2;
        let top = height * 3 / 10;
        let upper_len = height * 3 / 10;
        let lower_len = height / 10;

        let mut x = left;
        for color in BARS {
            self.draw_rect(x, top, bar_width, upper_len, color, true)?;
            x += bar_width;
        }
        let mut x = left;
        for color in BARS.iter().rev() {
            self.draw_rect(x, top + upper_len, bar_width, lower_len, *color, true)?;
            x += bar_width;
        }

        if self.font().is_some() {
            let size = self.measure(LABEL);
            let x = (width - i32::try_from(size.width).unwrap_or(0)) / 2;
            let y = (height - i32::try_from(size.height).unwrap_or(0)) / 2;
            self.print(x, y, LABEL, pen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::Canvas;
    use crate::color::{Color, ColorMode};
    use crate::config::{Builder, Dimensions};
    use crate::framebuffer::FrameBuffer;
    use crate::text::{Font, Glyph};
    use alloc::vec;
    use alloc::vec::Vec;

    fn canvas(width: u16, height: u16, mode: ColorMode) -> Canvas<'static, FrameBuffer<Vec<u8>>> {
        let config = Builder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .mode(mode)
            .build()
            .unwrap();
        let size = config.dimensions.buffer_size(mode);
        Canvas::with_buffer(config, vec![0u8; size]).unwrap()
    }

    #[test]
    fn test_pattern_layout() {
        let mut canvas = canvas(40, 40, ColorMode::Rgb888);
        canvas.fill(Color::RED).unwrap();
        canvas.test_pattern().unwrap();

        // border and grid (every 5 px)
        assert_eq!(canvas.read_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.read_pixel(39, 39), Some(Color::WHITE));
        assert_eq!(canvas.read_pixel(5, 1), Some(Color::WHITE));
        assert_eq!(canvas.read_pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.read_pixel(11, 11), Some(Color::BLACK));

        // bars are 3 px wide starting at x = 9; upper row y 12..24, lower 24..28
        assert_eq!(canvas.read_pixel(10, 20), Some(Color::WHITE));
        assert_eq!(canvas.read_pixel(13, 13), Some(Color::YELLOW));
        assert_eq!(canvas.read_pixel(28, 23), Some(Color::BLUE));
        assert_eq!(canvas.read_pixel(10, 26), Some(Color::BLUE));
        assert_eq!(canvas.read_pixel(25, 25), Some(Color::YELLOW));
        assert_eq!(canvas.read_pixel(11, 29), Some(Color::BLACK));

        assert_eq!(canvas.pen().color, Color::WHITE);
    }

    #[test]
    fn test_pattern_tiny_canvas() {
        let mut canvas = canvas(3, 2, ColorMode::Mono);
        canvas.test_pattern().unwrap();
        assert_eq!(canvas.read_pixel(0, 0), Some(Color::Mono(true)));
        assert_eq!(canvas.read_pixel(2, 1), Some(Color::Mono(true)));
    }

    #[test]
    fn test_pattern_centers_label() {
        // Every character of "Test" as a 1x1 dot with advance 1
        static BITMAP: [u8; 1] = [0x80];
        static GLYPHS: [Glyph; 1] = [Glyph::new(0, 1, 1, 1, 0, 0)];
        static DOTS: Font<'static> = Font::new(&BITMAP, &GLYPHS, b'T', b'T', 2);

        let mut canvas = canvas(40, 40, ColorMode::Rgb888);
        canvas.set_font(&DOTS);
        canvas.test_pattern().unwrap();

        // Only 'T' is in the font: width 1, height 2, drawn at (19, 19)
        assert_eq!(canvas.read_pixel(19, 19), Some(Color::WHITE));
        assert_eq!(canvas.read_pixel(18, 19), Some(Color::GREEN));
    }
}

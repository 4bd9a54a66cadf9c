//! Drawing surface
//!
//! A [`Canvas`] pairs a pixel sink with the canvas geometry, color mode,
//! mirroring and the active [`Pen`]. Drawing operations are implemented in
//! [`raster`](crate::raster) and [`text`](crate::text); all of them end in
//! [`Canvas::write_pixel`].
//!
//! ## Buffered and device-backed canvases
//!
//! - [`Canvas::new`] allocates a zero-filled frame (requires `alloc`).
//! - [`Canvas::with_buffer`] uses caller-provided storage.
//! - [`Canvas::with_sink`] sends every pixel straight to a [`PixelSink`], with
//!   no frame kept in memory.
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Builder, Canvas, Color, ColorMode, Dimensions};
//!
//! let dims = match Dimensions::new(4, 4) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mode(ColorMode::Rgb888).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::new(config);
//! let _ = canvas.fill(Color::RED);
//! assert_eq!(canvas.read_pixel(3, 3), Some(Color::RED));
//! assert_eq!(canvas.buffer().len(), 4 * 4 * 3);
//! ```

use crate::addressing::reflect;
use crate::color::{Color, ColorMode};
use crate::config::{Config, Dimensions, Mirror};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::sink::{BufferSink, PixelSink};
use crate::text::Font;

/// Result of a canvas operation with sink error `E`
pub type CanvasResult<E> = core::result::Result<(), Error<E>>;

/// Active drawing pen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    /// Stroke width in pixels, used by outline shapes
    pub stroke: u32,
    /// Draw color, always in the canvas mode
    pub color: Color,
}

/// Addressable pixel surface
///
/// ## Type Parameters
///
/// * `'f` - Lifetime of the bound [`Font`]
/// * `T` - Pixel sink receiving every write ([`FrameBuffer`] for buffered canvases)
pub struct Canvas<'f, T> {
    /// Canvas dimensions
    dimensions: Dimensions,
    /// Pixel encoding
    mode: ColorMode,
    /// Coordinate mirroring
    mirror: Mirror,
    /// Active pen
    pen: Pen,
    /// Font used by text operations
    font: Option<&'f Font<'f>>,
    /// Pixel sink
    sink: T,
}

#[cfg(feature = "alloc")]
impl<'f> Canvas<'f, FrameBuffer<alloc::vec::Vec<u8>>> {
    /// Create a canvas that owns a zero-filled frame buffer
    ///
    /// The buffer is `config.dimensions.buffer_size(config.mode)` bytes and is
    /// freed when the canvas is dropped.
    pub fn new(config: Config) -> Self {
        let size = config.dimensions.buffer_size(config.mode);
        let buffer = alloc::vec![0u8; size];
        let frame = FrameBuffer::from_parts(buffer, config.dimensions, config.mode);
        Self::with_sink(config, frame)
    }
}

impl<'f, B> Canvas<'f, FrameBuffer<B>>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a canvas drawing into caller-provided storage
    ///
    /// The storage contents are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` is shorter than
    /// `config.dimensions.buffer_size(config.mode)`.
    pub fn with_buffer(
        config: Config,
        buffer: B,
    ) -> Result<Self, Error<core::convert::Infallible>> {
        let frame = FrameBuffer::try_new(buffer, config.dimensions, config.mode)?;
        Ok(Self::with_sink(config, frame))
    }

    /// Packed frame contents
    pub fn buffer(&self) -> &[u8] {
        self.sink.as_bytes()
    }

    /// Read back the pixel at (x, y), as stored
    ///
    /// Mirroring is applied the same way as for writes. Returns `None` outside
    /// the canvas.
    pub fn read_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.map_point(x, y)?;
        self.sink.read_pixel(x, y)
    }
}

impl<'f, T> Canvas<'f, T>
where
    T: PixelSink,
{
    /// Create a canvas that sends every pixel write to `sink`
    ///
    /// The pen is set from the configuration and converted to the canvas mode.
    pub fn with_sink(config: Config, sink: T) -> Self {
        let Config {
            dimensions,
            mode,
            mirror,
            stroke,
            pen,
        } = config;
        log::debug!(
            "canvas {}x{} {:?}, buffered: {}",
            dimensions.width,
            dimensions.height,
            mode,
            sink.buffer().is_some()
        );
        Self {
            dimensions,
            mode,
            mirror,
            pen: Pen {
                stroke,
                color: pen.convert(mode),
            },
            font: None,
            sink,
        }
    }

    /// Canvas dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    /// Pixel encoding
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Active pen
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Set the active pen
    ///
    /// The color is converted to the canvas mode once, here.
    pub fn set_pen(&mut self, stroke: u32, color: Color) {
        self.pen = Pen {
            stroke,
            color: color.convert(self.mode),
        };
    }

    /// Coordinate mirroring
    pub fn mirror(&self) -> Mirror {
        self.mirror
    }

    /// Set coordinate mirroring
    pub fn set_mirror(&mut self, mirror: Mirror) {
        self.mirror = mirror;
    }

    /// Bound font, if any
    pub fn font(&self) -> Option<&'f Font<'f>> {
        self.font
    }

    /// Bind the font used by [`print`](Self::print) and [`measure`](Self::measure)
    pub fn set_font(&mut self, font: &'f Font<'f>) {
        log::trace!("font bound: {:?}..={:?}", font.first, font.last);
        self.font = Some(font);
    }

    /// Unbind the font
    pub fn clear_font(&mut self) {
        self.font = None;
    }

    /// Access the pixel sink
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Access the pixel sink mutably
    pub fn sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }

    /// Tear down the canvas, giving back its sink
    ///
    /// For a buffered canvas this hands back the [`FrameBuffer`] and through it
    /// the storage; an owned buffer is freed when the result is dropped.
    pub fn release(self) -> T {
        self.sink
    }

    /// Write one pixel
    ///
    /// Coordinates outside the canvas are ignored and return `Ok`. Mirroring is
    /// applied after the bounds check. The color is converted to the canvas
    /// mode if it is not already.
    ///
    /// # Errors
    ///
    /// Returns `Error::Sink` if the sink rejects the write.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> CanvasResult<T::Error> {
        let Some((x, y)) = self.map_point(x, y) else {
            return Ok(());
        };
        self.sink
            .write_pixel(x, y, color.convert(self.mode))
            .map_err(Error::Sink)
    }

    /// Bulk write of raw bytes into the canvas
    ///
    /// # Errors
    ///
    /// Always returns `Error::NotImplemented`; draw with pixel operations or
    /// push whole frames with [`refresh`](Self::refresh).
    pub fn write_buffer(
        &mut self,
        _x: i32,
        _y: i32,
        _data: &[u8],
        _wrap: bool,
    ) -> CanvasResult<T::Error> {
        log::debug!("bulk buffer write is not implemented");
        Err(Error::NotImplemented)
    }

    /// Push the whole frame to `device`
    ///
    /// # Errors
    ///
    /// Returns `Error::NotImplemented` for a canvas without a frame buffer, or
    /// `Error::Sink` if the device rejects the write.
    pub fn refresh<S: BufferSink>(&self, device: &mut S) -> CanvasResult<S::Error> {
        let Some(frame) = self.sink.buffer() else {
            log::debug!("refresh requested on an unbuffered canvas");
            return Err(Error::NotImplemented);
        };
        log::debug!("refresh: {} bytes", frame.len());
        device.write_buffer(0, 0, frame, true).map_err(Error::Sink)
    }

    /// Fill the whole canvas with `color`
    ///
    /// # Errors
    ///
    /// Returns `Error::Sink` if the sink rejects a write.
    pub fn fill(&mut self, color: Color) -> CanvasResult<T::Error> {
        let color = color.convert(self.mode);
        for y in 0..i32::from(self.dimensions.height) {
            for x in 0..i32::from(self.dimensions.width) {
                self.write_pixel(x, y, color)?;
            }
        }
        Ok(())
    }

    /// Bounds-check and mirror a canvas coordinate
    fn map_point(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let width = u32::from(self.dimensions.width);
        let height = u32::from(self.dimensions.height);
        if x >= width || y >= height {
            return None;
        }
        Some(reflect(x, y, width, height, self.mirror))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    fn config(width: u16, height: u16, mode: ColorMode) -> Config {
        Builder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .mode(mode)
            .build()
            .unwrap()
    }

    fn canvas(width: u16, height: u16, mode: ColorMode) -> Canvas<'static, FrameBuffer<Vec<u8>>> {
        let config = config(width, height, mode);
        let size = config.dimensions.buffer_size(mode);
        Canvas::with_buffer(config, vec![0u8; size]).unwrap()
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        pixels: Vec<(u32, u32, Color)>,
    }

    impl PixelSink for RecordingSink {
        type Error = Infallible;

        fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), Self::Error> {
            self.pixels.push((x, y, color));
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct RecordingBus {
        frames: Vec<Vec<u8>>,
    }

    impl BufferSink for RecordingBus {
        type Error = Infallible;

        fn write_buffer(&mut self, _x: u32, _y: u32, data: &[u8], wrap: bool) -> Result<(), Self::Error> {
            assert!(wrap);
            self.frames.push(data.to_vec());
            Ok(())
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_new_allocates_zeroed_buffer() {
        let canvas = Canvas::new(config(10, 3, ColorMode::Mono));
        assert_eq!(canvas.buffer(), &[0u8; 4]);

        let canvas = Canvas::new(config(4, 4, ColorMode::Argb8888));
        assert_eq!(canvas.buffer().len(), 64);
    }

    #[test]
    fn test_default_pen_is_white_in_canvas_mode() {
        let mono = canvas(8, 1, ColorMode::Mono);
        assert_eq!(
            mono.pen(),
            Pen {
                stroke: 1,
                color: Color::Mono(true)
            }
        );

        let rgb565 = canvas(8, 1, ColorMode::Rgb565);
        assert_eq!(rgb565.pen().color, Color::Rgb565(0xFFFF));
    }

    #[test]
    fn test_set_pen_converts_once() {
        let mut canvas = canvas(2, 2, ColorMode::Argb8888);
        canvas.set_pen(3, Color::RED);
        assert_eq!(
            canvas.pen(),
            Pen {
                stroke: 3,
                color: Color::Argb8888 {
                    a: 255,
                    r: 255,
                    g: 0,
                    b: 0
                }
            }
        );
    }

    #[test]
    fn test_with_buffer_too_small() {
        let result = Canvas::<FrameBuffer<Vec<u8>>>::with_buffer(
            config(4, 4, ColorMode::Rgb888),
            vec![0u8; 10],
        );
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 48,
                provided: 10
            })
        ));
    }

    #[test]
    fn test_out_of_bounds_write_is_silent_noop() {
        let mut canvas = canvas(4, 4, ColorMode::Rgb888);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX), (100, 100)] {
            assert_eq!(canvas.write_pixel(x, y, Color::WHITE), Ok(()));
        }
        assert!(canvas.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_mono_write_sets_and_clears_bits() {
        let mut canvas = canvas(10, 1, ColorMode::Mono);
        canvas.write_pixel(0, 0, Color::WHITE).unwrap();
        canvas.write_pixel(9, 0, Color::WHITE).unwrap();
        assert_eq!(canvas.buffer(), &[0x80, 0x40]);
        canvas.write_pixel(0, 0, Color::BLACK).unwrap();
        assert_eq!(canvas.buffer(), &[0x00, 0x40]);
    }

    #[test]
    fn test_fill_rgb888() {
        let mut canvas = canvas(4, 4, ColorMode::Rgb888);
        canvas.fill(Color::RED).unwrap();
        assert_eq!(canvas.buffer().len(), 4 * 4 * 3);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.read_pixel(x, y), Some(Color::RED));
            }
        }
        assert_eq!(&canvas.buffer()[..3], Color::RED.to_bytes().as_slice());
    }

    #[test]
    fn test_fill_converts_color() {
        let mut canvas = canvas(3, 3, ColorMode::Mono);
        canvas.fill(Color::BLUE).unwrap();
        assert_eq!(canvas.buffer(), &[0xFF, 0x80]);
        canvas.fill(Color::BLACK).unwrap();
        assert_eq!(canvas.buffer(), &[0x00, 0x00]);
    }

    #[test]
    fn test_mirror_horizontal_and_vertical() {
        let mut canvas = canvas(4, 3, ColorMode::Rgb888);
        canvas.set_mirror(Mirror::Horizontal);
        canvas.write_pixel(0, 0, Color::RED).unwrap();
        canvas.set_mirror(Mirror::Vertical);
        canvas.write_pixel(0, 0, Color::GREEN).unwrap();
        canvas.set_mirror(Mirror::Both);
        canvas.write_pixel(0, 0, Color::BLUE).unwrap();
        canvas.set_mirror(Mirror::None);

        assert_eq!(canvas.read_pixel(3, 0), Some(Color::RED));
        assert_eq!(canvas.read_pixel(0, 2), Some(Color::GREEN));
        assert_eq!(canvas.read_pixel(3, 2), Some(Color::BLUE));
        assert_eq!(canvas.read_pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_mirrored_edge_stays_on_canvas() {
        let mut canvas = canvas(4, 3, ColorMode::Mono);
        canvas.set_mirror(Mirror::Both);
        canvas.write_pixel(3, 2, Color::WHITE).unwrap();
        canvas.set_mirror(Mirror::None);
        assert_eq!(canvas.read_pixel(0, 0), Some(Color::Mono(true)));
    }

    #[test]
    fn test_unbuffered_canvas_forwards_to_sink() {
        let mut canvas = Canvas::with_sink(config(4, 4, ColorMode::Rgb565), RecordingSink::default());
        canvas.write_pixel(1, 2, Color::RED).unwrap();
        canvas.write_pixel(7, 2, Color::RED).unwrap();
        canvas.set_mirror(Mirror::Horizontal);
        canvas.write_pixel(0, 0, Color::Mono(true)).unwrap();

        assert_eq!(
            canvas.release().pixels,
            vec![(1, 2, Color::rgb565(255, 0, 0)), (3, 0, Color::Rgb565(0xFFFF))]
        );
    }

    #[test]
    fn test_sink_errors_propagate() {
        let sink = crate::sink::DeviceSink::new((), |_: &mut (), x, _y, _color| {
            if x == 1 { Err(7u8) } else { Ok(()) }
        });
        let mut canvas = Canvas::with_sink(config(4, 1, ColorMode::Mono), sink);
        assert_eq!(canvas.write_pixel(0, 0, Color::WHITE), Ok(()));
        assert_eq!(canvas.write_pixel(1, 0, Color::WHITE), Err(Error::Sink(7)));
        assert_eq!(canvas.fill(Color::WHITE), Err(Error::Sink(7)));
    }

    #[test]
    fn test_refresh_pushes_whole_frame() {
        let mut canvas = canvas(2, 2, ColorMode::Rgb565);
        canvas.fill(Color::WHITE).unwrap();
        let mut bus = RecordingBus::default();
        canvas.refresh(&mut bus).unwrap();
        assert_eq!(bus.frames, vec![vec![0xFF; 8]]);
    }

    #[test]
    fn test_refresh_unbuffered_not_implemented() {
        let canvas = Canvas::with_sink(config(2, 2, ColorMode::Mono), RecordingSink::default());
        let mut bus = RecordingBus::default();
        assert_eq!(canvas.refresh(&mut bus), Err(Error::NotImplemented));
        assert!(bus.frames.is_empty());
    }

    #[test]
    fn test_write_buffer_not_implemented() {
        let mut canvas = canvas(2, 2, ColorMode::Mono);
        assert_eq!(
            canvas.write_buffer(0, 0, &[0xFF], true),
            Err(Error::NotImplemented)
        );
    }

    #[test]
    fn test_release_returns_storage() {
        let mut storage = [0u8; 2];
        let mut canvas = Canvas::with_buffer(config(4, 4, ColorMode::Mono), &mut storage[..]).unwrap();
        canvas.write_pixel(0, 0, Color::WHITE).unwrap();
        let frame = canvas.release();
        assert_eq!(frame.into_inner(), &[0x80, 0x00]);
    }
}

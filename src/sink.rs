//! Pixel and buffer sinks
//!
//! A canvas never touches hardware itself. Every pixel write goes through a
//! [`PixelSink`], and [`Canvas::refresh`](crate::Canvas::refresh) pushes a whole
//! frame through a [`BufferSink`].
//!
//! - [`FrameBuffer`](crate::FrameBuffer) is the in-memory pixel sink used by
//!   buffered canvases.
//! - [`DeviceSink`] pairs an opaque device handle with a write callback, for
//!   displays too large to mirror in RAM.
//! - [`SpiBufferSink`] streams a frame over an embedded-hal SPI bus.
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Builder, Canvas, Color, ColorMode, DeviceSink, Dimensions};
//!
//! // A "device" that records every pixel it receives
//! let device: Vec<(u32, u32, Color)> = Vec::new();
//! let sink = DeviceSink::new(device, |dev: &mut Vec<(u32, u32, Color)>, x, y, color| {
//!     dev.push((x, y, color));
//!     Ok::<(), ()>(())
//! });
//!
//! let dims = match Dimensions::new(16, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mode(ColorMode::Rgb565).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::with_sink(config, sink);
//! let _ = canvas.write_pixel(3, 4, Color::RED);
//! assert_eq!(canvas.sink().device(), &[(3, 4, Color::rgb565(255, 0, 0))]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::color::Color;

type SinkResult<E> = core::result::Result<(), E>;

/// Consumer of single-pixel writes
///
/// Coordinates passed to a sink are already bounds-checked and mirrored, and
/// the color is already converted to the canvas mode.
pub trait PixelSink {
    /// Error type for sink operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write one pixel
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device rejects the write.
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> SinkResult<Self::Error>;

    /// Packed frame contents, if this sink keeps a frame in memory
    fn buffer(&self) -> Option<&[u8]> {
        None
    }
}

/// Consumer of bulk frame writes
pub trait BufferSink {
    /// Error type for sink operations
    type Error: Debug;

    /// Write `data` starting at pixel (x, y)
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Origin of the write
    /// * `data` - Packed pixel bytes in the canvas mode
    /// * `wrap` - Whether the write continues onto the next row at the row end
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device rejects the write.
    fn write_buffer(&mut self, x: u32, y: u32, data: &[u8], wrap: bool) -> SinkResult<Self::Error>;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    type Error = S::Error;

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> SinkResult<Self::Error> {
        (**self).write_pixel(x, y, color)
    }

    fn buffer(&self) -> Option<&[u8]> {
        (**self).buffer()
    }
}

impl<S: BufferSink + ?Sized> BufferSink for &mut S {
    type Error = S::Error;

    fn write_buffer(&mut self, x: u32, y: u32, data: &[u8], wrap: bool) -> SinkResult<Self::Error> {
        (**self).write_buffer(x, y, data, wrap)
    }
}

/// Pixel sink that forwards writes to a callback together with a device handle
///
/// The handle is opaque to the canvas; it is only passed through to `write`.
///
/// ## Type Parameters
///
/// * `D` - Device handle (owned value or `&mut` borrow)
/// * `F` - Callback `FnMut(&mut D, x, y, color) -> Result<(), E>`
pub struct DeviceSink<D, F> {
    /// Device handle passed to every write
    device: D,
    /// Pixel write callback
    write: F,
}

impl<D, F> DeviceSink<D, F> {
    /// Create a new DeviceSink
    pub fn new<E>(device: D, write: F) -> Self
    where
        F: FnMut(&mut D, u32, u32, Color) -> Result<(), E>,
    {
        Self { device, write }
    }

    /// Access the device handle
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Access the device handle mutably
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Give back the device handle
    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D, F, E> PixelSink for DeviceSink<D, F>
where
    F: FnMut(&mut D, u32, u32, Color) -> Result<(), E>,
    E: Debug,
{
    type Error = E;

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> SinkResult<Self::Error> {
        (self.write)(&mut self.device, x, y, color)
    }
}

/// Errors from [`SpiBufferSink`]
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum SpiSinkError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for SpiSinkError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for SpiSinkError<SpiErr, PinErr> {}

/// Default number of bytes sent per SPI write
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Buffer sink that streams frames over SPI
///
/// Drives the data/command pin high and writes the frame in chunks. Window
/// addressing (the `x`, `y` origin) is left to the display controller driver,
/// which is expected to have set the RAM window before the refresh.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
pub struct SpiBufferSink<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Bytes per SPI write
    chunk_size: usize,
}

impl<SPI, DC> SpiBufferSink<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new SpiBufferSink
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the number of bytes sent per SPI write
    ///
    /// Values below 1 are treated as 1.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> &mut Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Get the number of bytes sent per SPI write
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Give back the SPI device and pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> BufferSink for SpiBufferSink<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin,
    DC::Error: Debug,
{
    type Error = SpiSinkError<SPI::Error, DC::Error>;

    fn write_buffer(
        &mut self,
        _x: u32,
        _y: u32,
        data: &[u8],
        _wrap: bool,
    ) -> SinkResult<Self::Error> {
        self.dc.set_high().map_err(SpiSinkError::Pin)?;
        for chunk in data.chunks(self.chunk_size.max(1)) {
            self.spi.write(chunk).map_err(SpiSinkError::Spi)?;
        }
        Ok(())
    }
}

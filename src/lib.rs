//! Framebuffer Graphics Core
//!
//! A `no_std` drawing library for small displays: one canvas type that stores
//! pixels in any of five color encodings and draws lines, rectangles, bitmaps
//! and bitmap-font text into it.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Mono, RGB565, RGB888, ARGB8888 and RGBA8888 pixel formats
//! - Buffered canvases (owned or borrowed storage) and unbuffered canvases that
//!   forward every pixel to a device callback
//! - Horizontal and vertical mirroring
//! - Frame push over `embedded-hal` SPI
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust
//! use fbgfx::{Builder, Canvas, Color, ColorMode, Dimensions, Mirror};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .dimensions(dims)
//!     .mode(ColorMode::Mono)
//!     .mirror(Mirror::Horizontal)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut canvas = Canvas::new(config);
//! let pen = canvas.pen().color;
//! let _ = canvas.draw_line(0, 0, 127, 63, pen);
//! let _ = canvas.draw_rect(10, 10, 20, 10, Color::WHITE, true);
//!
//! // 128 * 64 pixels at 1 bit each
//! assert_eq!(canvas.buffer().len(), 1024);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel placement inside packed frame buffers
pub mod addressing;
/// Drawing surface
pub mod canvas;
/// Color modes and pixel values
pub mod color;
/// Canvas configuration types and builder
pub mod config;
/// Error types for the library
pub mod error;
/// In-memory frame buffer
pub mod framebuffer;
/// Color test pattern
pub mod pattern;
/// Lines, rectangles and bitmap blits
pub mod raster;
/// Pixel and buffer sinks
pub mod sink;
/// Bitmap fonts and text layout
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use canvas::{Canvas, CanvasResult, Pen};
pub use color::{Color, ColorMode, PackedColor, Rgba};
pub use config::{Builder, Config, Dimensions, Mirror};
pub use error::{BuilderError, Error};
pub use framebuffer::FrameBuffer;
pub use raster::Bitmap;
pub use sink::{BufferSink, DEFAULT_CHUNK_SIZE, DeviceSink, PixelSink, SpiBufferSink, SpiSinkError};
pub use text::{Font, Glyph, TextSize};

//! In-memory frame buffer
//!
//! [`FrameBuffer`] stores packed pixels for one [`ColorMode`] and is the pixel
//! sink behind every buffered [`Canvas`](crate::Canvas).
//!
//! Storage is any `AsRef<[u8]> + AsMut<[u8]>`: a `Vec<u8>` when the frame owns
//! its memory, or a `&mut [u8]` borrowed from the caller (a static DMA region,
//! for example).
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Color, ColorMode, Dimensions, FrameBuffer, PixelSink};
//!
//! let dims = match Dimensions::new(4, 2) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut storage = [0u8; 1];
//! let mut frame = match FrameBuffer::try_new(&mut storage[..], dims, ColorMode::Mono) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//! let _ = frame.write_pixel(1, 0, Color::Mono(true));
//! let _ = frame.write_pixel(0, 1, Color::Mono(true));
//! assert_eq!(frame.as_bytes(), &[0b0100_1000]);
//! ```

use core::convert::Infallible;

use crate::addressing::{PixelLocation, locate};
use crate::color::{Color, ColorMode};
use crate::config::Dimensions;
use crate::error::Error;
use crate::sink::PixelSink;

/// Packed pixel storage for one color mode
///
/// ## Type Parameters
///
/// * `B` - Storage implementing `AsRef<[u8]>` and `AsMut<[u8]>`
#[derive(Debug)]
pub struct FrameBuffer<B> {
    /// Pixel storage (may be longer than `len`)
    buffer: B,
    /// Frame dimensions
    dimensions: Dimensions,
    /// Pixel encoding
    mode: ColorMode,
    /// Bytes in use
    len: usize,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a frame of `dimensions` in `mode`
    ///
    /// Only the first `dimensions.buffer_size(mode)` bytes are used; the
    /// existing contents are kept.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer cannot hold the frame.
    pub fn try_new(
        buffer: B,
        dimensions: Dimensions,
        mode: ColorMode,
    ) -> Result<Self, Error<Infallible>> {
        let required = dimensions.buffer_size(mode);
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            mode,
            len: required,
        })
    }

    /// Wrap storage already known to hold the frame
    pub(crate) fn from_parts(buffer: B, dimensions: Dimensions, mode: ColorMode) -> Self {
        let len = dimensions.buffer_size(mode).min(buffer.as_ref().len());
        Self {
            buffer,
            dimensions,
            mode,
            len,
        }
    }

    /// Frame dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Pixel encoding
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Packed frame contents, exactly `dimensions.buffer_size(mode)` bytes
    pub fn as_bytes(&self) -> &[u8] {
        let buffer = self.buffer.as_ref();
        buffer.get(..self.len).unwrap_or(buffer)
    }

    /// Packed frame contents, mutable
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        let buffer = self.buffer.as_mut();
        let end = len.min(buffer.len());
        &mut buffer[..end]
    }

    /// Read back pixel (x, y)
    ///
    /// Returns `None` outside the frame.
    pub fn read_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        let bytes = self.as_bytes();
        match locate(x, y, u32::from(self.dimensions.width), self.mode) {
            PixelLocation::Bit { index, mask } => {
                bytes.get(index).map(|byte| Color::Mono(byte & mask != 0))
            }
            PixelLocation::Bytes { offset, len } => {
                let pixel = bytes.get(offset..offset + len)?;
                Color::from_bytes(self.mode, pixel)
            }
        }
    }

    /// Give back the storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < u32::from(self.dimensions.width) && y < u32::from(self.dimensions.height)
    }
}

impl<B> PixelSink for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Error = Infallible;

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), Self::Error> {
        if !self.contains(x, y) {
            return Ok(());
        }
        let color = color.convert(self.mode);
        let location = locate(x, y, u32::from(self.dimensions.width), self.mode);
        let bytes = self.as_bytes_mut();

        match (location, color) {
            (PixelLocation::Bit { index, mask }, Color::Mono(on)) => {
                if let Some(byte) = bytes.get_mut(index) {
                    if on {
                        *byte |= mask;
                    } else {
                        *byte &= !mask;
                    }
                }
            }
            (PixelLocation::Bytes { offset, .. }, color) => {
                let packed = color.to_bytes();
                let src = packed.as_slice();
                if let Some(dst) = bytes.get_mut(offset..offset + src.len()) {
                    dst.copy_from_slice(src);
                }
            }
            // A Mono frame always converts to Mono colors
            (PixelLocation::Bit { .. }, _) => {}
        }
        Ok(())
    }

    fn buffer(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn dims(width: u16, height: u16) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_try_new_small_buffer_returns_error() {
        let result = FrameBuffer::try_new(vec![0u8; 47], dims(4, 4), ColorMode::Rgb888);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 48,
                provided: 47
            })
        ));
    }

    #[test]
    fn test_oversized_buffer_exposes_exact_length() {
        let frame = FrameBuffer::try_new(vec![0u8; 100], dims(4, 4), ColorMode::Rgb565).unwrap();
        assert_eq!(frame.as_bytes().len(), 32);
        assert_eq!(frame.buffer().map(<[u8]>::len), Some(32));
    }

    #[test]
    fn test_mono_write_only_touches_target_bit() {
        let mut frame = FrameBuffer::try_new(vec![0xFFu8; 2], dims(4, 4), ColorMode::Mono).unwrap();
        frame.write_pixel(2, 1, Color::Mono(false)).unwrap();
        // (2,1) -> bit 6 -> byte 0, mask 0x02
        assert_eq!(frame.as_bytes(), &[0xFD, 0xFF]);
        frame.write_pixel(2, 1, Color::Mono(true)).unwrap();
        assert_eq!(frame.as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_byte_mode_write_and_read_back() {
        let mut frame = FrameBuffer::try_new(vec![0u8; 64], dims(4, 4), ColorMode::Rgba8888).unwrap();
        let color = Color::Rgba8888 {
            r: 1,
            g: 2,
            b: 3,
            a: 4,
        };
        frame.write_pixel(1, 1, color).unwrap();
        assert_eq!(&frame.as_bytes()[20..24], &[1, 2, 3, 4]);
        assert_eq!(frame.read_pixel(1, 1), Some(color));
        assert_eq!(
            frame.read_pixel(0, 0),
            Some(Color::Rgba8888 {
                r: 0,
                g: 0,
                b: 0,
                a: 0
            })
        );
    }

    #[test]
    fn test_write_converts_foreign_mode() {
        let mut frame = FrameBuffer::try_new(vec![0u8; 32], dims(4, 4), ColorMode::Rgb565).unwrap();
        frame.write_pixel(0, 0, Color::RED).unwrap();
        assert_eq!(&frame.as_bytes()[..2], &[0xF8, 0x00]);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut frame = FrameBuffer::try_new(vec![0u8; 12], dims(2, 2), ColorMode::Rgb888).unwrap();
        frame.write_pixel(2, 0, Color::WHITE).unwrap();
        frame.write_pixel(0, 2, Color::WHITE).unwrap();
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(frame.read_pixel(2, 0), None);
    }

    #[test]
    fn test_borrowed_storage_is_returned() {
        let mut storage = [0u8; 4];
        let mut frame = FrameBuffer::try_new(&mut storage[..], dims(2, 1), ColorMode::Rgb565).unwrap();
        frame.write_pixel(1, 0, Color::Rgb565(0xABCD)).unwrap();
        let inner = frame.into_inner();
        assert_eq!(inner, &[0x00, 0x00, 0xAB, 0xCD]);
    }
}

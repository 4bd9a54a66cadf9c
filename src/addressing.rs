//! Pixel addressing utilities
//!
//! This module maps pixel coordinates to locations in a flat, row-major frame
//! buffer for each [`ColorMode`].
//!
//! Monochrome frames pack eight pixels per byte, MSB first, with no padding at
//! the end of a row: the bit cursor simply continues into the next row. All
//! other modes store whole bytes per pixel.
//!
//! ## Example
//!
//! ```
//! use fbgfx::addressing::{locate, PixelLocation};
//! use fbgfx::ColorMode;
//!
//! // On a 10 pixel wide mono frame, pixel (2,1) is bit 12: byte 1, mask 0x08
//! assert_eq!(
//!     locate(2, 1, 10, ColorMode::Mono),
//!     PixelLocation::Bit { index: 1, mask: 0x08 }
//! );
//!
//! // The same pixel in RGB888 starts at byte 36
//! assert_eq!(
//!     locate(2, 1, 10, ColorMode::Rgb888),
//!     PixelLocation::Bytes { offset: 36, len: 3 }
//! );
//! ```

use crate::color::ColorMode;
use crate::config::Mirror;

/// Where a pixel lives in a frame buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLocation {
    /// A single bit of byte `index`, selected by `mask`
    Bit {
        /// Byte index into the buffer
        index: usize,
        /// Bit mask within the byte (0x80 is the leftmost pixel)
        mask: u8,
    },
    /// `len` consecutive bytes starting at `offset`
    Bytes {
        /// Byte offset into the buffer
        offset: usize,
        /// Bytes per pixel
        len: usize,
    },
}

/// Locate pixel (x, y) in a frame `width` pixels wide
///
/// # Arguments
///
/// * `x` - X coordinate (column), 0 to width-1
/// * `y` - Y coordinate (row)
/// * `width` - Frame width in pixels
/// * `mode` - Pixel encoding of the frame
pub fn locate(x: u32, y: u32, width: u32, mode: ColorMode) -> PixelLocation {
    let cursor = y as usize * width as usize + x as usize;
    match mode {
        ColorMode::Mono => PixelLocation::Bit {
            index: cursor / 8,
            mask: 0x80 >> (cursor % 8),
        },
        _ => {
            let len = mode.bytes_per_pixel();
            PixelLocation::Bytes {
                offset: cursor * len,
                len,
            }
        }
    }
}

/// Apply mirroring to an in-bounds coordinate
///
/// Reflection maps column 0 to `width - 1` (and row 0 to `height - 1`), so an
/// in-bounds coordinate always stays in bounds.
///
/// ```
/// use fbgfx::addressing::reflect;
/// use fbgfx::Mirror;
///
/// assert_eq!(reflect(0, 0, 8, 4, Mirror::Horizontal), (7, 0));
/// assert_eq!(reflect(0, 0, 8, 4, Mirror::Vertical), (0, 3));
/// assert_eq!(reflect(2, 1, 8, 4, Mirror::Both), (5, 2));
/// ```
pub fn reflect(x: u32, y: u32, width: u32, height: u32, mirror: Mirror) -> (u32, u32) {
    let x = if mirror.horizontal() {
        width.saturating_sub(1).saturating_sub(x)
    } else {
        x
    };
    let y = if mirror.vertical() {
        height.saturating_sub(1).saturating_sub(y)
    } else {
        y
    };
    (x, y)
}

//! Pixel color model
//!
//! This module defines the [`ColorMode`] encodings a canvas can be stored in and
//! the [`Color`] value type, a pixel tagged with its own encoding.
//!
//! ## Color Modes
//!
//! | Mode       | Bits | Packed layout (byte order)      |
//! |------------|------|---------------------------------|
//! | `Mono`     | 1    | one bit, MSB-first in the frame |
//! | `Rgb565`   | 16   | `rrrrrggg gggbbbbb` (big-endian) |
//! | `Rgb888`   | 24   | `r, g, b`                       |
//! | `Argb8888` | 32   | `a, r, g, b`                    |
//! | `Rgba8888` | 32   | `r, g, b, a`                    |
//!
//! ## Conversion
//!
//! [`Color::convert`] decodes a value to canonical 8-bit RGBA and re-encodes it
//! in the target mode. Converting to the value's own mode returns it unchanged.
//!
//! ```
//! use fbgfx::{Color, ColorMode};
//!
//! // Mono "on" decodes to white
//! let white = Color::Mono(true).convert(ColorMode::Rgb888);
//! assert_eq!(white, Color::Rgb888 { r: 255, g: 255, b: 255 });
//!
//! // Any non-zero channel is "on" in Mono
//! assert_eq!(Color::rgb(0, 0, 1).convert(ColorMode::Mono), Color::Mono(true));
//! assert_eq!(Color::BLACK.convert(ColorMode::Mono), Color::Mono(false));
//! ```

/// Pixel encodings supported by a canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// 1 bit per pixel, on/off
    #[default]
    Mono,
    /// 16 bits per pixel, 5-6-5 packed
    Rgb565,
    /// 24 bits per pixel, no alpha
    Rgb888,
    /// 32 bits per pixel, alpha first
    Argb8888,
    /// 32 bits per pixel, alpha last
    Rgba8888,
}

impl ColorMode {
    /// Number of bits one pixel occupies in a frame buffer
    pub const fn bits_per_pixel(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Rgb565 => 16,
            Self::Rgb888 => 24,
            Self::Argb8888 | Self::Rgba8888 => 32,
        }
    }

    /// Number of whole bytes one pixel occupies (0 for sub-byte modes)
    pub const fn bytes_per_pixel(self) -> usize {
        self.bits_per_pixel() / 8
    }
}

/// Canonical 8-bit-per-channel color, the intermediate form of every conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque color from red, green and blue channels
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A pixel value tagged with its encoding
///
/// The payload of each variant is only meaningful under that variant's
/// [`ColorMode`]; use [`convert`](Self::convert) before comparing or writing
/// values of differing modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Monochrome pixel, `true` = on
    Mono(bool),
    /// Raw 5-6-5 bits: red in bits 15..11, green in 10..5, blue in 4..0
    Rgb565(u16),
    /// 24-bit color
    Rgb888 {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
    },
    /// 32-bit color, alpha stored first
    Argb8888 {
        /// Alpha channel
        a: u8,
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
    },
    /// 32-bit color, alpha stored last
    Rgba8888 {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
        /// Alpha channel
        a: u8,
    },
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure red
    pub const RED: Self = Self::rgb(0xFF, 0, 0);
    /// Pure green
    pub const GREEN: Self = Self::rgb(0, 0xFF, 0);
    /// Pure blue
    pub const BLUE: Self = Self::rgb(0, 0, 0xFF);
    /// Yellow (slightly warm white point)
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0xEB);
    /// Cyan
    pub const CYAN: Self = Self::rgb(0, 0xFF, 0xFF);
    /// Fuchsia
    pub const FUCHSIA: Self = Self::rgb(0xFD, 0x3F, 0x92);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::Argb8888 {
        a: 0,
        r: 0,
        g: 0,
        b: 0,
    };

    /// 24-bit color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb888 { r, g, b }
    }

    /// 16-bit color quantized from 8-bit red, green and blue channels
    ///
    /// ```
    /// use fbgfx::Color;
    ///
    /// assert_eq!(Color::rgb565(0xFF, 0, 0), Color::Rgb565(0xF800));
    /// assert_eq!(Color::rgb565(0, 0xFF, 0), Color::Rgb565(0x07E0));
    /// ```
    pub const fn rgb565(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb565(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// The encoding this value is stored in
    pub const fn mode(self) -> ColorMode {
        match self {
            Self::Mono(_) => ColorMode::Mono,
            Self::Rgb565(_) => ColorMode::Rgb565,
            Self::Rgb888 { .. } => ColorMode::Rgb888,
            Self::Argb8888 { .. } => ColorMode::Argb8888,
            Self::Rgba8888 { .. } => ColorMode::Rgba8888,
        }
    }

    /// Decode to canonical RGBA
    ///
    /// Alpha is 255 for modes without an alpha channel. 565 channels are
    /// scaled back up by their quantization step (8 for red/blue, 4 for green).
    pub const fn to_rgba(self) -> Rgba {
        match self {
            Self::Mono(true) => Rgba::opaque(255, 255, 255),
            Self::Mono(false) => Rgba::opaque(0, 0, 0),
            Self::Rgb565(raw) => Rgba::opaque(
                (((raw >> 11) & 0x1F) << 3) as u8,
                (((raw >> 5) & 0x3F) << 2) as u8,
                ((raw & 0x1F) << 3) as u8,
            ),
            Self::Rgb888 { r, g, b } => Rgba::opaque(r, g, b),
            Self::Argb8888 { a, r, g, b } | Self::Rgba8888 { r, g, b, a } => Rgba { r, g, b, a },
        }
    }

    /// Encode canonical RGBA in `mode`
    ///
    /// Alpha is dropped for modes without an alpha channel.
    pub const fn from_rgba(rgba: Rgba, mode: ColorMode) -> Self {
        let Rgba { r, g, b, a } = rgba;
        match mode {
            ColorMode::Mono => Self::Mono((r | g | b) != 0),
            ColorMode::Rgb565 => Self::rgb565(r, g, b),
            ColorMode::Rgb888 => Self::Rgb888 { r, g, b },
            ColorMode::Argb8888 => Self::Argb8888 { a, r, g, b },
            ColorMode::Rgba8888 => Self::Rgba8888 { r, g, b, a },
        }
    }

    /// Convert to `target` mode
    ///
    /// Returns `self` unchanged when it is already in `target` mode.
    ///
    /// ```
    /// use fbgfx::{Color, ColorMode};
    ///
    /// let red = Color::RED.convert(ColorMode::Argb8888);
    /// assert_eq!(red, Color::Argb8888 { a: 255, r: 255, g: 0, b: 0 });
    /// assert_eq!(red.convert(ColorMode::Rgb888), Color::RED);
    /// ```
    pub const fn convert(self, target: ColorMode) -> Self {
        if self.mode() as u8 == target as u8 {
            return self;
        }
        Self::from_rgba(self.to_rgba(), target)
    }

    /// Packed in-memory representation for this value's mode
    pub const fn to_bytes(self) -> PackedColor {
        match self {
            Self::Mono(on) => PackedColor::new([on as u8, 0, 0, 0], 1),
            Self::Rgb565(raw) => {
                let [hi, lo] = raw.to_be_bytes();
                PackedColor::new([hi, lo, 0, 0], 2)
            }
            Self::Rgb888 { r, g, b } => PackedColor::new([r, g, b, 0], 3),
            Self::Argb8888 { a, r, g, b } => PackedColor::new([a, r, g, b], 4),
            Self::Rgba8888 { r, g, b, a } => PackedColor::new([r, g, b, a], 4),
        }
    }

    /// Parse a packed representation produced by [`to_bytes`](Self::to_bytes)
    ///
    /// Returns `None` if `bytes` is shorter than one pixel of `mode`.
    pub fn from_bytes(mode: ColorMode, bytes: &[u8]) -> Option<Self> {
        match (mode, bytes) {
            (ColorMode::Mono, [on, ..]) => Some(Self::Mono(*on != 0)),
            (ColorMode::Rgb565, [hi, lo, ..]) => Some(Self::Rgb565(u16::from_be_bytes([*hi, *lo]))),
            (ColorMode::Rgb888, [r, g, b, ..]) => Some(Self::Rgb888 {
                r: *r,
                g: *g,
                b: *b,
            }),
            (ColorMode::Argb8888, [a, r, g, b, ..]) => Some(Self::Argb8888 {
                a: *a,
                r: *r,
                g: *g,
                b: *b,
            }),
            (ColorMode::Rgba8888, [r, g, b, a, ..]) => Some(Self::Rgba8888 {
                r: *r,
                g: *g,
                b: *b,
                a: *a,
            }),
            _ => None,
        }
    }
}

/// Packed bytes of a single pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedColor {
    bytes: [u8; 4],
    len: usize,
}

impl PackedColor {
    const fn new(bytes: [u8; 4], len: usize) -> Self {
        Self { bytes, len }
    }

    /// The meaningful bytes, in frame buffer order
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&self.bytes)
    }
}

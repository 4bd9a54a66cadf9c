//! Error types for the crate
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and canvas operations ([`Error`]).
//!
//! Drawing outside the canvas is not an error: out-of-bounds pixels are
//! silently clipped. Errors are reserved for invalid state (no font bound),
//! unsupported operations, and failures reported by an external sink.
//!
//! ## Example
//!
//! ```
//! use fbgfx::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Zero-sized canvas
//! let result = Dimensions::new(0, 32);
//! assert!(result.is_err());
//! ```

/// Errors that can occur when drawing on a canvas
///
/// Generic over the sink error type so callers can match on the underlying
/// device failure.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Error reported by a pixel or buffer sink
    ///
    /// Sink failures are not retried; a multi-pixel operation that fails
    /// midway leaves the pixels written so far in place.
    Sink(E),
    /// The operation is not supported
    ///
    /// Returned for bulk buffer writes, refreshing a canvas without a frame
    /// buffer, non-monochrome bitmap blits and circle rasterization.
    NotImplemented,
    /// A text operation was attempted with no font bound
    NoFontSet,
    /// Buffer is too small for the canvas
    ///
    /// The provided buffer must be at least `dimensions.buffer_size(mode)` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "Sink error: {e:?}"),
            Self::NotImplemented => write!(f, "Operation not implemented"),
            Self::NoFontSet => write!(f, "No font set"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (both must be non-zero)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::convert::Infallible;

    #[test]
    fn test_error_display() {
        let err: Error<Infallible> = Error::BufferTooSmall {
            required: 8,
            provided: 4,
        };
        assert_eq!(
            err.to_string(),
            "Buffer too small: required 8 bytes, provided 4"
        );
        assert_eq!(Error::<u8>::Sink(3).to_string(), "Sink error: 3");
        assert_eq!(Error::<u8>::NoFontSet.to_string(), "No font set");
    }

    #[test]
    fn test_builder_error_display() {
        let err = BuilderError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0x4 (both must be non-zero)"
        );
    }
}

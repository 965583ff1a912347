//! Error types for rotext.

use thiserror::Error;

/// Result alias for rotext operations.
pub type RotextResult<T> = std::result::Result<T, RotextError>;

/// Errors that can occur when building views, warping or drawing text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RotextError {
    /// Width or height is zero or overflows the addressable range.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is smaller than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer cannot hold the requested view.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An owned buffer does not hold exactly `width * height` pixels.
    #[error("buffer holds {got} elements, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// A region of interest does not fit inside its image.
    #[error(
        "roi {width}x{height} at ({x}, {y}) is out of bounds for a {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The affine transform has no inverse.
    #[error("affine transform is not invertible")]
    SingularTransform,
    /// The text style cannot be rendered by the text renderer.
    #[error("invalid text style: {reason}")]
    InvalidTextStyle { reason: &'static str },
}

//! Image views and owned buffers.
//!
//! `ImageView` and `ImageViewMut` are borrowed 2D views into a 1D buffer with an
//! explicit stride. The stride counts elements between the starts of
//! consecutive rows, so a stride larger than the width represents padded rows.
//! ROI slices are zero-copy views into the same backing slice and retain the
//! original stride. The renderer mutates caller images only through
//! `ImageViewMut`.

use crate::util::{RotextError, RotextResult};

#[cfg(feature = "image")]
pub mod interop;
mod owned;
mod pixel;
mod view_mut;

pub use owned::OwnedImage;
pub use pixel::Pixel;
pub use view_mut::ImageViewMut;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> RotextResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> RotextResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(RotextError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> RotextResult<ImageView<'a, T>> {
        let start = roi_start(x, y, width, height, self.width, self.height, self.stride)?;
        let data = self
            .data
            .get(start..)
            .ok_or(RotextError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;
        ImageView::new(data, width, height, self.stride)
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the visible pixels into a contiguous owned image.
    pub fn to_owned_image(&self) -> OwnedImage<T> {
        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            let start = y * self.stride;
            data.extend_from_slice(&self.data[start..start + self.width]);
        }
        OwnedImage::from_parts(data, self.width, self.height)
    }
}

pub(crate) fn required_len(width: usize, height: usize, stride: usize) -> RotextResult<usize> {
    if width == 0 || height == 0 {
        return Err(RotextError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(RotextError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(RotextError::InvalidDimensions { width, height })?;
    Ok(needed)
}

/// Validates a ROI against its parent and returns the offset of its first element.
pub(crate) fn roi_start(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    img_width: usize,
    img_height: usize,
    stride: usize,
) -> RotextResult<usize> {
    if width == 0 || height == 0 {
        return Err(RotextError::InvalidDimensions { width, height });
    }
    let out_of_bounds = RotextError::RoiOutOfBounds {
        x,
        y,
        width,
        height,
        img_width,
        img_height,
    };
    let end_x = x.checked_add(width).ok_or(out_of_bounds.clone())?;
    let end_y = y.checked_add(height).ok_or(out_of_bounds.clone())?;
    if x >= img_width || y >= img_height || end_x > img_width || end_y > img_height {
        return Err(out_of_bounds);
    }
    y.checked_mul(stride)
        .and_then(|v| v.checked_add(x))
        .ok_or(RotextError::InvalidDimensions {
            width: img_width,
            height: img_height,
        })
}

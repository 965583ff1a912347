use super::{ImageView, ImageViewMut};
use crate::util::{RotextError, RotextResult};

/// Owned image in contiguous row-major layout.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedImage<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> OwnedImage<T> {
    /// Wraps a contiguous buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<T>, width: usize, height: usize) -> RotextResult<Self> {
        if width == 0 || height == 0 {
            return Err(RotextError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(RotextError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(RotextError::BufferSizeMismatch {
                expected: needed,
                got: data.len(),
            });
        }
        Ok(Self::from_parts(data, width, height))
    }

    pub(crate) fn from_parts(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the contiguous pixel buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the image and returns its pixel buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Returns a borrowed view of the whole image.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns a mutable view of the whole image.
    pub fn view_mut(&mut self) -> ImageViewMut<'_, T> {
        let (width, height) = (self.width, self.height);
        ImageViewMut::new(&mut self.data, width, height, width)
            .expect("owned image is contiguous and non-empty")
    }
}

impl<T: Copy> OwnedImage<T> {
    /// Creates an image filled with a single value.
    pub fn from_pixel(width: usize, height: usize, value: T) -> RotextResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(RotextError::InvalidDimensions { width, height })?;
        Self::new(vec![value; len], width, height)
    }
}

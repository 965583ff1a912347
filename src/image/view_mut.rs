use super::{required_len, roi_start, ImageView};
use crate::util::{RotextError, RotextResult};

/// Mutable borrowed 2D image view with an explicit stride.
///
/// This is the only handle through which caller-owned pixels are modified;
/// rows outside the view, and padding between rows, are never written.
#[derive(Debug)]
pub struct ImageViewMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageViewMut<'a, T> {
    /// Creates a contiguous mutable view with `stride == width`.
    pub fn from_slice_mut(data: &'a mut [T], width: usize, height: usize) -> RotextResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a mutable view with an explicit stride.
    pub fn new(
        data: &'a mut [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> RotextResult<Self> {
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

    /// Reborrows the pixels as a read-only view.
    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            data: self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    /// Returns a mutable reference to the element at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.stride + x)
    }

    /// Returns row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width)
    }

    /// Returns row `y` mutably with length `width`.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get_mut(start..start + self.width)
    }

    /// Returns a zero-copy mutable ROI into the same backing buffer.
    pub fn roi_mut(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> RotextResult<ImageViewMut<'_, T>> {
        let start = roi_start(x, y, width, height, self.width, self.height, self.stride)?;
        let got = self.data.len();
        let data = self
            .data
            .get_mut(start..)
            .ok_or(RotextError::BufferTooSmall {
                needed: start.saturating_add(1),
                got,
            })?;
        ImageViewMut::new(data, width, height, self.stride)
    }
}

impl<T: Copy> ImageViewMut<'_, T> {
    /// Sets every visible pixel to `value`.
    pub fn fill(&mut self, value: T) {
        for y in 0..self.height {
            let start = y * self.stride;
            self.data[start..start + self.width].fill(value);
        }
    }

    /// Fills the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the view.
    pub fn fill_rect_clipped(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, value: T) {
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let start = y * self.stride;
            self.data[start + x0..start + x1].fill(value);
        }
    }

    /// Copies `src` into this view with its top-left corner at `(x, y)`.
    pub fn copy_from(&mut self, x: usize, y: usize, src: ImageView<'_, T>) -> RotextResult<()> {
        let mut dst = self.roi_mut(x, y, src.width(), src.height())?;
        for row_idx in 0..src.height() {
            let src_row = src.row(row_idx).ok_or(RotextError::InvalidDimensions {
                width: src.width(),
                height: src.height(),
            })?;
            let start = row_idx * dst.stride;
            dst.data[start..start + src_row.len()].copy_from_slice(src_row);
        }
        Ok(())
    }
}

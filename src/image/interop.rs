//! Zero-copy views over `image` crate buffers.
//!
//! Available when the `image` feature is enabled. These helpers only
//! reinterpret pixel storage; decoding and encoding stay with the caller.

use crate::image::{ImageView, ImageViewMut, OwnedImage};
use crate::util::{RotextError, RotextResult};
use ::image::{GrayImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
use std::ops::{Deref, DerefMut};

fn dims<P: ::image::Pixel>(img: &ImageBuffer<P, Vec<P::Subpixel>>) -> (usize, usize) {
    (img.width() as usize, img.height() as usize)
}

/// Creates a borrowed view of a grayscale image.
pub fn view_gray(img: &GrayImage) -> RotextResult<ImageView<'_, u8>> {
    let (width, height) = dims(img);
    ImageView::from_slice(img.deref(), width, height)
}

/// Creates a mutable view of a grayscale image.
pub fn view_gray_mut(img: &mut GrayImage) -> RotextResult<ImageViewMut<'_, u8>> {
    let (width, height) = dims(img);
    ImageViewMut::from_slice_mut(img.deref_mut(), width, height)
}

/// Creates a borrowed view of an RGB image with `[u8; 3]` pixels.
pub fn view_rgb(img: &RgbImage) -> RotextResult<ImageView<'_, [u8; 3]>> {
    let (width, height) = dims(img);
    ImageView::from_slice(bytemuck::cast_slice(img.deref()), width, height)
}

/// Creates a mutable view of an RGB image with `[u8; 3]` pixels.
pub fn view_rgb_mut(img: &mut RgbImage) -> RotextResult<ImageViewMut<'_, [u8; 3]>> {
    let (width, height) = dims(img);
    ImageViewMut::from_slice_mut(bytemuck::cast_slice_mut(img.deref_mut()), width, height)
}

/// Creates a borrowed view of an RGBA image with `[u8; 4]` pixels.
pub fn view_rgba(img: &RgbaImage) -> RotextResult<ImageView<'_, [u8; 4]>> {
    let (width, height) = dims(img);
    ImageView::from_slice(bytemuck::cast_slice(img.deref()), width, height)
}

/// Creates a mutable view of an RGBA image with `[u8; 4]` pixels.
pub fn view_rgba_mut(img: &mut RgbaImage) -> RotextResult<ImageViewMut<'_, [u8; 4]>> {
    let (width, height) = dims(img);
    ImageViewMut::from_slice_mut(bytemuck::cast_slice_mut(img.deref_mut()), width, height)
}

/// Converts an owned RGB buffer back into an `image::RgbImage`.
pub fn to_rgb_image(img: &OwnedImage<[u8; 3]>) -> RotextResult<RgbImage> {
    let raw: Vec<u8> = bytemuck::cast_slice(img.data()).to_vec();
    to_buffer::<Rgb<u8>>(raw, img.width(), img.height())
}

/// Converts an owned RGBA buffer back into an `image::RgbaImage`.
pub fn to_rgba_image(img: &OwnedImage<[u8; 4]>) -> RotextResult<RgbaImage> {
    let raw: Vec<u8> = bytemuck::cast_slice(img.data()).to_vec();
    to_buffer::<Rgba<u8>>(raw, img.width(), img.height())
}

fn to_buffer<P: ::image::Pixel<Subpixel = u8>>(
    raw: Vec<u8>,
    width: usize,
    height: usize,
) -> RotextResult<ImageBuffer<P, Vec<u8>>> {
    let needed = width * height * P::CHANNEL_COUNT as usize;
    let got = raw.len();
    let w = u32::try_from(width).map_err(|_| RotextError::InvalidDimensions { width, height })?;
    let h = u32::try_from(height).map_err(|_| RotextError::InvalidDimensions { width, height })?;
    ImageBuffer::from_raw(w, h, raw).ok_or(RotextError::BufferTooSmall { needed, got })
}

//! Affine image warping.
//!
//! `warp_affine` follows the usual forward-transform convention: the transform
//! maps source coordinates to output coordinates, and every output pixel
//! `(x, y)` is filled by sampling the source at the inverse-mapped location.
//! Samples that fall outside the source are resolved by a [`BorderMode`].

#[cfg(feature = "rayon")]
mod rayon;
mod sample;

use crate::geom::Affine2;
use crate::image::{ImageView, OwnedImage, Pixel};
use crate::util::{RotextError, RotextResult};

pub use sample::{sample_bilinear, sample_nearest};

/// Resampling filter used by the warp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Nearest source pixel.
    Nearest,
    /// Bilinear blend of the four surrounding pixels.
    #[default]
    Bilinear,
}

/// How samples outside the source image are produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderMode<P> {
    /// Every out-of-range sample reads this value.
    Constant(P),
    /// Out-of-range samples read the nearest edge pixel.
    Replicate,
}

/// Warp settings shared by every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarpConfig {
    /// Resampling filter.
    pub interpolation: Interpolation,
    /// Process output rows in parallel (requires the `rayon` feature; ignored otherwise).
    pub parallel: bool,
}

/// Warps `src` by `transform` into a new `width x height` image.
///
/// Fails with [`RotextError::SingularTransform`] when `transform` cannot be
/// inverted and with [`RotextError::InvalidDimensions`] for an empty output.
pub fn warp_affine<P: Pixel>(
    src: ImageView<'_, P>,
    transform: &Affine2,
    size: (usize, usize),
    border: BorderMode<P>,
    cfg: &WarpConfig,
) -> RotextResult<OwnedImage<P>> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(RotextError::InvalidDimensions { width, height });
    }
    let len = width
        .checked_mul(height)
        .ok_or(RotextError::InvalidDimensions { width, height })?;
    let inverse = transform.invert().ok_or(RotextError::SingularTransform)?;
    let mut out = vec![P::default(); len];

    #[cfg(feature = "rayon")]
    {
        if cfg.parallel {
            rayon::warp_rows_par(src, &inverse, &border, cfg.interpolation, width, &mut out);
            return Ok(OwnedImage::from_parts(out, width, height));
        }
    }

    for (y, row) in out.chunks_exact_mut(width).enumerate() {
        warp_row(src, &inverse, &border, cfg.interpolation, y, row);
    }
    Ok(OwnedImage::from_parts(out, width, height))
}

/// Fills one output row; `inverse` maps output coordinates to source coordinates.
pub(crate) fn warp_row<P: Pixel>(
    src: ImageView<'_, P>,
    inverse: &Affine2,
    border: &BorderMode<P>,
    interpolation: Interpolation,
    y: usize,
    row: &mut [P],
) {
    let [a, b, c, d] = inverse.linear();
    let (tx, ty) = inverse.offset();
    let yf = y as f64;
    let base_x = b * yf + tx;
    let base_y = d * yf + ty;
    for (x, out) in row.iter_mut().enumerate() {
        let xf = x as f64;
        let sx = a * xf + base_x;
        let sy = c * xf + base_y;
        *out = match interpolation {
            Interpolation::Nearest => sample_nearest(src, sx, sy, border),
            Interpolation::Bilinear => sample_bilinear(src, sx, sy, border),
        };
    }
}

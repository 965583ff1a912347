//! Pixel types the warp and text code can operate on.

/// A pixel value that can be resampled by the affine warp.
///
/// `Default` is the zero value used as the "black/transparent" fill.
pub trait Pixel: Copy + Default + PartialEq + Send + Sync + 'static {
    /// Blends four neighbours with bilinear weights that sum to one.
    ///
    /// Samples are ordered `(x0, y0)`, `(x1, y0)`, `(x0, y1)`, `(x1, y1)`.
    fn blend(samples: [Self; 4], weights: [f32; 4]) -> Self;
}

#[inline]
fn blend_channel(values: [f32; 4], weights: [f32; 4]) -> f32 {
    values[0] * weights[0] + values[1] * weights[1] + values[2] * weights[2] + values[3] * weights[3]
}

impl Pixel for u8 {
    #[inline]
    fn blend(samples: [Self; 4], weights: [f32; 4]) -> Self {
        let value = blend_channel(samples.map(f32::from), weights);
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Pixel for u16 {
    #[inline]
    fn blend(samples: [Self; 4], weights: [f32; 4]) -> Self {
        let value = blend_channel(samples.map(f32::from), weights);
        value.round().clamp(0.0, u16::MAX as f32) as u16
    }
}

impl Pixel for f32 {
    #[inline]
    fn blend(samples: [Self; 4], weights: [f32; 4]) -> Self {
        blend_channel(samples, weights)
    }
}

impl<const N: usize> Pixel for [u8; N]
where
    [u8; N]: Default,
{
    #[inline]
    fn blend(samples: [Self; 4], weights: [f32; 4]) -> Self {
        let mut out = [0u8; N];
        for (c, value) in out.iter_mut().enumerate() {
            let channel = [samples[0][c], samples[1][c], samples[2][c], samples[3][c]];
            *value = u8::blend(channel, weights);
        }
        out
    }
}

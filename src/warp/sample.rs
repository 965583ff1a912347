//! Point sampling with border handling.

use super::BorderMode;
use crate::image::{ImageView, Pixel};

/// Fractions closer than this to a pixel centre snap onto it, so that
/// integer translations and quarter turns resample exactly.
const SNAP_EPS: f64 = 1e-9;

#[inline]
fn fetch<P: Pixel>(img: ImageView<'_, P>, x: i64, y: i64, border: &BorderMode<P>) -> P {
    let w = img.width() as i64;
    let h = img.height() as i64;
    let (xi, yi) = if x >= 0 && y >= 0 && x < w && y < h {
        (x, y)
    } else {
        match border {
            BorderMode::Constant(v) => return *v,
            BorderMode::Replicate => (x.clamp(0, w - 1), y.clamp(0, h - 1)),
        }
    };
    img.get(xi as usize, yi as usize)
        .copied()
        .unwrap_or_default()
}

#[inline]
fn outside_fill<P: Pixel>(border: &BorderMode<P>) -> P {
    match border {
        BorderMode::Constant(v) => *v,
        BorderMode::Replicate => P::default(),
    }
}

#[inline]
fn split(coord: f64) -> (i64, f32) {
    let nearest = coord.round();
    if (coord - nearest).abs() < SNAP_EPS {
        return (nearest as i64, 0.0);
    }
    let base = coord.floor();
    (base as i64, (coord - base) as f32)
}

/// Samples the pixel whose centre is nearest to `(x, y)`.
pub fn sample_nearest<P: Pixel>(img: ImageView<'_, P>, x: f64, y: f64, border: &BorderMode<P>) -> P {
    if !x.is_finite() || !y.is_finite() {
        return outside_fill(border);
    }
    let xi = (x + 0.5).floor() as i64;
    let yi = (y + 0.5).floor() as i64;
    fetch(img, xi, yi, border)
}

/// Samples `(x, y)` by bilinear interpolation of the four surrounding pixels.
pub fn sample_bilinear<P: Pixel>(
    img: ImageView<'_, P>,
    x: f64,
    y: f64,
    border: &BorderMode<P>,
) -> P {
    if !x.is_finite() || !y.is_finite() {
        return outside_fill(border);
    }
    let (x0, fx) = split(x);
    let (y0, fy) = split(y);
    if fx == 0.0 && fy == 0.0 {
        return fetch(img, x0, y0, border);
    }

    // Coordinates saturate at the i64 range, so the right/lower taps must too.
    let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));
    let samples = [
        fetch(img, x0, y0, border),
        fetch(img, x1, y0, border),
        fetch(img, x0, y1, border),
        fetch(img, x1, y1, border),
    ];
    let weights = [
        (1.0 - fx) * (1.0 - fy),
        fx * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * fy,
    ];
    P::blend(samples, weights)
}

#[cfg(test)]
mod tests {
    use super::{sample_bilinear, sample_nearest};
    use crate::image::ImageView;
    use crate::warp::BorderMode;

    #[test]
    fn bilinear_hits_pixel_centres_exactly() {
        let data = [10u8, 20, 30, 40];
        let img = ImageView::from_slice(&data, 2, 2).unwrap();
        let border = BorderMode::Constant(0);
        assert_eq!(sample_bilinear(img, 1.0, 0.0, &border), 20);
        assert_eq!(sample_bilinear(img, 1.0 + 1e-12, 1.0 - 1e-12, &border), 40);
        assert_eq!(sample_bilinear(img, 0.5, 0.5, &border), 25);
    }

    #[test]
    fn border_modes_resolve_outside_samples() {
        let data = [10u8, 20, 30, 40];
        let img = ImageView::from_slice(&data, 2, 2).unwrap();
        assert_eq!(sample_nearest(img, -3.0, 0.0, &BorderMode::Constant(99)), 99);
        assert_eq!(sample_nearest(img, -3.0, 0.0, &BorderMode::Replicate), 10);
        assert_eq!(sample_bilinear(img, 5.0, 5.0, &BorderMode::Replicate), 40);
        assert_eq!(sample_bilinear(img, 1.5, 0.0, &BorderMode::Constant(0)), 10);
        assert_eq!(sample_bilinear(img, f64::NAN, 0.0, &BorderMode::Constant(7)), 7);
    }

    #[test]
    fn huge_finite_coordinates_resolve_through_the_border() {
        let data = [10u8, 20, 30, 40];
        let img = ImageView::from_slice(&data, 2, 2).unwrap();
        let huge = 1e300;
        assert_eq!(sample_bilinear(img, huge + 0.5, 0.25, &BorderMode::Constant(3)), 3);
        assert_eq!(sample_bilinear(img, 0.5, huge, &BorderMode::Replicate), 35);
        assert_eq!(sample_bilinear(img, huge, huge, &BorderMode::Replicate), 40);
        assert_eq!(sample_nearest(img, -huge, huge, &BorderMode::Replicate), 30);
    }
}

//! Built-in bitmap font renderer.

use super::glyphs::{glyph, GLYPH_ASCENT, GLYPH_ROWS, GLYPH_WIDTH};
use super::{FontFace, LineStyle, TextMetrics, TextRenderer, TextStyle};
use crate::geom::Point2i;
use crate::image::{ImageViewMut, Pixel};
use crate::util::math::{ceil_i32, floor_i32};
use crate::util::{RotextError, RotextResult};

const MAX_SCALE: f64 = 1024.0;
const MAX_THICKNESS: u32 = 255;

/// Text renderer backed by a 5x7 bitmap font.
///
/// Each font pixel becomes a `scale x scale` block (at least one image pixel),
/// and strokes are thickened by stamping a brush of radius
/// `(thickness - 1) / 2` whose shape follows [`LineStyle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> Self {
        Self
    }
}

struct Params {
    scale: f64,
    radius: i32,
    advance: usize,
    strikes: usize,
}

fn params(style: &TextStyle) -> RotextResult<Params> {
    if !style.scale.is_finite() || style.scale <= 0.0 {
        return Err(RotextError::InvalidTextStyle {
            reason: "scale must be finite and positive",
        });
    }
    if style.scale > MAX_SCALE {
        return Err(RotextError::InvalidTextStyle {
            reason: "scale is too large",
        });
    }
    if style.thickness > MAX_THICKNESS {
        return Err(RotextError::InvalidTextStyle {
            reason: "thickness is too large",
        });
    }
    let radius = ((style.thickness.max(1) - 1) / 2) as i32;
    let strikes = match style.font {
        FontFace::Plain => 1,
        FontFace::Bold => 2,
    };
    Ok(Params {
        scale: style.scale,
        radius,
        advance: GLYPH_WIDTH + strikes,
        strikes,
    })
}

fn metrics_for(params: &Params, chars: usize) -> TextMetrics {
    let s = params.scale;
    let r = params.radius;
    let width = if chars == 0 {
        0
    } else {
        ceil_i32((params.advance * chars - 1) as f64 * s).saturating_add(2 * r)
    };
    let ascent = ceil_i32(GLYPH_ASCENT as f64 * s);
    let full = ceil_i32(GLYPH_ROWS as f64 * s);
    TextMetrics {
        width,
        height: ascent + r,
        baseline: full - ascent + r,
    }
}

/// Half-width of the brush on each brush row, indexed by `dy + radius`.
fn brush_spans(style: LineStyle, radius: i32) -> Vec<i32> {
    (-radius..=radius)
        .map(|dy| match style {
            LineStyle::Eight => radius,
            LineStyle::Four => radius - dy.abs(),
            LineStyle::AntiAliased => (((radius * radius - dy * dy) as f64).sqrt()).floor() as i32,
        })
        .collect()
}

impl TextRenderer for BitmapFont {
    fn measure(&self, text: &str, style: &TextStyle) -> RotextResult<TextMetrics> {
        let params = params(style)?;
        Ok(metrics_for(&params, text.chars().count()))
    }

    fn draw<P: Pixel>(
        &self,
        canvas: &mut ImageViewMut<'_, P>,
        text: &str,
        origin: Point2i,
        style: &TextStyle,
        color: P,
    ) -> RotextResult<()> {
        let params = params(style)?;
        let metrics = metrics_for(&params, text.chars().count());
        let s = params.scale;
        let r = params.radius as i64;
        let left = origin.x as i64 + r;
        let top = origin.y as i64 - metrics.height as i64 + r;
        let spans = brush_spans(style.line_style, params.radius);

        let cell = |start: i64, idx: usize| {
            let lo = start + floor_i32(idx as f64 * s) as i64;
            let hi = (start + floor_i32((idx + 1) as f64 * s) as i64).max(lo + 1);
            (lo, hi)
        };

        for (i, ch) in text.chars().enumerate() {
            let bitmap = glyph(ch);
            let base_col = i * params.advance;
            for (gy, bits) in bitmap.iter().enumerate() {
                if *bits == 0 {
                    continue;
                }
                let (y0, y1) = cell(top, gy);
                for gx in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                        continue;
                    }
                    for strike in 0..params.strikes {
                        let (x0, x1) = cell(left, base_col + gx + strike);
                        for (k, half) in spans.iter().enumerate() {
                            let dy = k as i64 - r;
                            let half = *half as i64;
                            canvas.fill_rect_clipped(x0 - half, y0 + dy, x1 + half, y1 + dy, color);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::brush_spans;
    use crate::text::LineStyle;

    #[test]
    fn brush_shapes_match_connectivity() {
        assert_eq!(brush_spans(LineStyle::Eight, 2), vec![2, 2, 2, 2, 2]);
        assert_eq!(brush_spans(LineStyle::Four, 2), vec![0, 1, 2, 1, 0]);
        assert_eq!(brush_spans(LineStyle::AntiAliased, 2), vec![0, 1, 2, 1, 0]);
        assert_eq!(brush_spans(LineStyle::AntiAliased, 3), vec![0, 2, 2, 3, 2, 2, 0]);
        assert_eq!(brush_spans(LineStyle::Four, 0), vec![0]);
    }
}

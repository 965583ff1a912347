//! Horizontal text measurement and drawing.
//!
//! The rotation pipeline never rasterises glyphs itself: it asks a
//! [`TextRenderer`] how large a string is and to draw it axis-aligned onto a
//! working buffer. [`BitmapFont`] is the built-in implementation.

mod bitmap;
mod glyphs;

pub use bitmap::BitmapFont;

use crate::geom::Point2i;
use crate::image::{ImageViewMut, Pixel};
use crate::util::RotextResult;

/// Glyph set used by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Regular 5x7 glyphs.
    #[default]
    Plain,
    /// Glyphs struck twice one font pixel apart.
    Bold,
}

/// Brush shape used to thicken strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// 4-connected brush (diamond).
    Four,
    /// 8-connected brush (square).
    #[default]
    Eight,
    /// Round brush. Edges are not blended.
    AntiAliased,
}

/// Styling shared by measurement and drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontFace,
    /// Size multiplier; one font pixel spans `scale` image pixels.
    pub scale: f64,
    /// Stroke thickness in pixels.
    pub thickness: u32,
    pub line_style: LineStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontFace::Plain,
            scale: 1.0,
            thickness: 1,
            line_style: LineStyle::Eight,
        }
    }
}

/// Pixel extent of a string drawn horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Width of the inked box.
    pub width: i32,
    /// Height above the baseline.
    pub height: i32,
    /// How far descenders reach below the baseline.
    pub baseline: i32,
}

impl TextMetrics {
    /// Full box height including descenders.
    pub fn box_height(&self) -> i32 {
        self.height.saturating_add(self.baseline)
    }
}

/// Measures and draws axis-aligned text.
///
/// Implementations must keep every pixel they draw for `text` at `origin`
/// inside `[origin.x, origin.x + width) x [origin.y - height, origin.y + baseline)`
/// of the metrics they report, and must clip to the canvas.
pub trait TextRenderer {
    /// Reports the size `text` occupies with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> RotextResult<TextMetrics>;

    /// Draws `text` left to right with its baseline starting at `origin`.
    fn draw<P: Pixel>(
        &self,
        canvas: &mut ImageViewMut<'_, P>,
        text: &str,
        origin: Point2i,
        style: &TextStyle,
        color: P,
    ) -> RotextResult<()>;
}

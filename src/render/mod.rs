//! Rotated text rendering on top of a horizontal-only text renderer.
//!
//! A pass touches only the destination region of the rotated text box:
//!
//! 1. the background under that region is warped by the opposite angle into a
//!    working buffer where the text runs horizontally,
//! 2. the text is drawn there by the [`TextRenderer`],
//! 3. the buffer is warped back to the original angle,
//! 4. everything except a [`MARGIN`]-wide border is copied into the image.
//!
//! Empty text, regions that fall entirely outside the image and regions that
//! cannot be expressed in `i32` pixel coordinates are silent no-ops. Regions that cross the image edge are clipped: only in-bounds pixels
//! are read or written.

mod layout;

pub use layout::{RotatedTextLayout, MARGIN};

use crate::geom::{Point2i, Rect};
use crate::image::{ImageViewMut, Pixel};
use crate::text::{BitmapFont, TextRenderer, TextStyle};
use crate::trace::{trace_event, trace_span};
use crate::util::RotextResult;
use crate::warp::{warp_affine, BorderMode, Interpolation, WarpConfig};

/// How warps fill samples that fall outside their source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Repeat the nearest edge pixel.
    #[default]
    Replicate,
    /// Use `P::default()` (black / transparent).
    Fill,
}

/// Configuration for [`RotatedTextRenderer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Resampling filter for both warps.
    pub interpolation: Interpolation,
    /// Out-of-range sampling policy for both warps.
    pub border: BorderPolicy,
    /// Row-parallel warps (requires the `rayon` feature).
    pub parallel: bool,
}

impl RenderConfig {
    fn warp(&self) -> WarpConfig {
        WarpConfig {
            interpolation: self.interpolation,
            parallel: self.parallel,
        }
    }

    fn border_mode<P: Pixel>(&self) -> BorderMode<P> {
        match self.border {
            BorderPolicy::Replicate => BorderMode::Replicate,
            BorderPolicy::Fill => BorderMode::Constant(P::default()),
        }
    }
}

/// Draws text at arbitrary angles using a horizontal [`TextRenderer`].
#[derive(Clone, Debug, Default)]
pub struct RotatedTextRenderer<R> {
    text: R,
    cfg: RenderConfig,
}

impl<R: TextRenderer> RotatedTextRenderer<R> {
    /// Creates a renderer with the default configuration.
    pub fn new(text: R) -> Self {
        Self {
            text,
            cfg: RenderConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: RenderConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Returns the wrapped text renderer.
    pub fn text_renderer(&self) -> &R {
        &self.text
    }

    /// Computes the layout `draw` would use on a `width x height` image.
    ///
    /// Returns `None` when `draw` would leave the image untouched.
    pub fn layout(
        &self,
        text: &str,
        anchor: Point2i,
        angle_deg: f64,
        style: &TextStyle,
        image_size: (usize, usize),
    ) -> RotextResult<Option<RotatedTextLayout>> {
        if text.is_empty() {
            return Ok(None);
        }
        let metrics = self.text.measure(text, style)?;
        let (width, height) = image_size;
        Ok(RotatedTextLayout::compute(metrics, anchor, angle_deg)
            .filter(|layout| layout.composite_region(width, height).is_some()))
    }

    /// Draws `text` with its unrotated top-left corner at `anchor`, rotated by
    /// `angle_deg` (counter-clockwise on screen) about that corner.
    ///
    /// Only pixels inside the text's destination region are modified.
    pub fn draw<P: Pixel>(
        &self,
        image: &mut ImageViewMut<'_, P>,
        text: &str,
        anchor: Point2i,
        angle_deg: f64,
        style: &TextStyle,
        color: P,
    ) -> RotextResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let _span = trace_span!(
            "rotated_text",
            chars = text.chars().count(),
            angle_deg = angle_deg
        )
        .entered();

        let metrics = self.text.measure(text, style)?;
        trace_event!(
            "text_measured",
            width = metrics.width,
            height = metrics.height,
            baseline = metrics.baseline
        );

        let (img_w, img_h) = (image.width(), image.height());
        let Some(layout) = RotatedTextLayout::compute(metrics, anchor, angle_deg) else {
            trace_event!("region_unrepresentable", x = anchor.x, y = anchor.y);
            return Ok(());
        };
        let dest = layout.dest_region();
        let Some(target) = layout.composite_region(img_w, img_h) else {
            trace_event!("region_offscreen", x = dest.x, y = dest.y);
            return Ok(());
        };
        let Some(clip) = dest.intersect(&Rect::from_size(img_w, img_h)) else {
            return Ok(());
        };
        let straight = layout.straight_region();
        trace_event!(
            "regions",
            dest_w = dest.width,
            dest_h = dest.height,
            straight_w = straight.width,
            straight_h = straight.height
        );

        let warp_cfg = self.cfg.warp();
        let border = self.cfg.border_mode::<P>();

        let mut work = {
            let background = image.as_view().roi(
                clip.x as usize,
                clip.y as usize,
                clip.width as usize,
                clip.height as usize,
            )?;
            let to_straight = layout
                .to_straight()
                .pre_translate((clip.x - dest.x) as f64, (clip.y - dest.y) as f64);
            warp_affine(
                background,
                &to_straight,
                (straight.width as usize, straight.height as usize),
                border,
                &warp_cfg,
            )?
        };

        self.text
            .draw(&mut work.view_mut(), text, layout.text_origin(), style, color)?;

        let to_target = layout
            .to_dest()
            .post_translate(-(target.x - dest.x) as f64, -(target.y - dest.y) as f64);
        let rotated = warp_affine(
            work.view(),
            &to_target,
            (target.width as usize, target.height as usize),
            border,
            &warp_cfg,
        )?;

        image.copy_from(target.x as usize, target.y as usize, rotated.view())
    }
}

/// Draws rotated text with the built-in [`BitmapFont`] and default settings.
pub fn draw_rotated_text<P: Pixel>(
    image: &mut ImageViewMut<'_, P>,
    text: &str,
    anchor: Point2i,
    angle_deg: f64,
    style: &TextStyle,
    color: P,
) -> RotextResult<()> {
    RotatedTextRenderer::new(BitmapFont).draw(image, text, anchor, angle_deg, style, color)
}

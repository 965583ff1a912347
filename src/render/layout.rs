//! Geometry of one rotated-text pass.
//!
//! The text box is measured unrotated, grown by [`MARGIN`] on every side and
//! rotated about the anchor. The axis-aligned bounds of the rotated box are the
//! destination region. That region is then turned back by the opposite angle,
//! about the first rotated corner, to find the "straightened" working buffer in
//! which the text can be drawn horizontally.
//!
//! All integer geometry is checked: a box whose corners or extents leave the
//! `i32` range has no layout, and the renderer treats it as off-image.

use crate::geom::{Affine2, Point2i, Rect};
use crate::text::TextMetrics;

/// Slack, in pixels, added around the text box and trimmed before compositing.
pub const MARGIN: i32 = 1;

/// Every derived quantity of a rotated-text pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedTextLayout {
    metrics: TextMetrics,
    anchor: Point2i,
    angle_deg: f64,
    rotation: Affine2,
    rotated_corners: [Point2i; 4],
    dest_region: Rect,
    straight_region: Rect,
    reanchor: Point2i,
    text_origin: Point2i,
    to_straight: Affine2,
    to_dest: Affine2,
}

impl RotatedTextLayout {
    /// Derives the layout for text of size `metrics` anchored (top-left) at
    /// `anchor` and rotated by `angle_deg` about it.
    ///
    /// Returns `None` when any corner, extent or offset of the layout does not
    /// fit in `i32` pixel coordinates.
    pub fn compute(metrics: TextMetrics, anchor: Point2i, angle_deg: f64) -> Option<Self> {
        let w = metrics.width;
        let h = metrics.height.checked_add(metrics.baseline)?;
        let (right, bottom) = (w.checked_add(MARGIN)?, h.checked_add(MARGIN)?);
        let rotation = Affine2::rotation(anchor.to_f64(), angle_deg, 1.0);

        let rotated_corners = rotation.checked_transform_points([
            anchor.checked_add(Point2i::new(-MARGIN, -MARGIN))?,
            anchor.checked_add(Point2i::new(right, -MARGIN))?,
            anchor.checked_add(Point2i::new(right, bottom))?,
            anchor.checked_add(Point2i::new(-MARGIN, bottom))?,
        ])?;
        let dest_region = Rect::bounding(&rotated_corners)?;

        let unrotate = Affine2::rotation(rotated_corners[0].to_f64(), -angle_deg, 1.0);
        let tl = dest_region.tl();
        let br = dest_region.br();
        let [s_tl, s_tr, s_br, s_bl, s_anchor] = unrotate.checked_transform_points([
            tl,
            Point2i::new(br.x, tl.y),
            br,
            Point2i::new(tl.x, br.y),
            anchor,
        ])?;
        let straight_region = Rect::bounding(&[s_tl, s_tr, s_br, s_bl])?;

        // Destination top-left lands here inside the working buffer.
        let reanchor = s_tl.checked_sub(straight_region.tl())?;
        let to_straight = unrotate.with_translation(reanchor.x as f64, reanchor.y as f64);
        let text_origin = s_anchor
            .checked_sub(straight_region.tl())?
            .checked_add(Point2i::new(0, metrics.height))?;

        let [a, b, _, _] = rotation.linear();
        let (rx, ry) = (reanchor.x as f64, reanchor.y as f64);
        let to_dest = rotation.with_translation(
            (1.0 - a) * rx - b * ry - rx,
            b * rx + (1.0 - a) * ry - ry,
        );

        Some(Self {
            metrics,
            anchor,
            angle_deg,
            rotation,
            rotated_corners,
            dest_region,
            straight_region,
            reanchor,
            text_origin,
            to_straight,
            to_dest,
        })
    }

    /// Returns false when nothing of the destination region can land inside a
    /// `width x height` image.
    pub fn is_visible(&self, width: usize, height: usize) -> bool {
        let bounds = Rect::from_size(width, height);
        let tl = self.dest_region.tl();
        let br = self.dest_region.br();
        !(br.x < MARGIN || br.y < MARGIN || tl.x >= bounds.width || tl.y >= bounds.height)
    }

    /// Pixels that the final copy writes: the destination region minus the
    /// margin, clipped to a `width x height` image.
    pub fn composite_region(&self, width: usize, height: usize) -> Option<Rect> {
        if !self.is_visible(width, height) {
            return None;
        }
        self.dest_region
            .inset(MARGIN)
            .intersect(&Rect::from_size(width, height))
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn anchor(&self) -> Point2i {
        self.anchor
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Rotation about the anchor.
    pub fn rotation(&self) -> Affine2 {
        self.rotation
    }

    /// Margin-grown text box corners after rotation: top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn rotated_corners(&self) -> [Point2i; 4] {
        self.rotated_corners
    }

    /// Axis-aligned bounds of the rotated text box in image coordinates.
    pub fn dest_region(&self) -> Rect {
        self.dest_region
    }

    /// Bounds of the destination region after turning it back; its size is the
    /// working buffer size.
    pub fn straight_region(&self) -> Rect {
        self.straight_region
    }

    /// Offset that moves the straightened region to the working buffer origin.
    pub fn reanchor(&self) -> Point2i {
        self.reanchor
    }

    /// Baseline origin of the horizontal text inside the working buffer.
    pub fn text_origin(&self) -> Point2i {
        self.text_origin
    }

    /// Maps destination-region pixels to working-buffer pixels.
    pub fn to_straight(&self) -> Affine2 {
        self.to_straight
    }

    /// Maps working-buffer pixels back to destination-region pixels.
    pub fn to_dest(&self) -> Affine2 {
        self.to_dest
    }
}

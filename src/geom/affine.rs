//! 2x3 affine transforms.
//!
//! A transform maps `(x, y)` to
//! `(a * x + b * y + tx, c * x + d * y + ty)`. Values are immutable: every
//! change of translation produces a new transform.

use super::{Point2d, Point2i};
use crate::util::math::{checked_round_i32, round_i32, sin_cos_deg};

/// Affine transform stored as the top two rows of a 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    m: [[f64; 3]; 2],
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    /// Builds a transform from its six coefficients.
    pub const fn new(a: f64, b: f64, tx: f64, c: f64, d: f64, ty: f64) -> Self {
        Self {
            m: [[a, b, tx], [c, d, ty]],
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, tx, 0.0, 1.0, ty)
    }

    /// Rotation by `angle_deg` about `pivot` with uniform `scale`.
    ///
    /// Positive angles turn content counter-clockwise on screen (y axis down).
    /// With `alpha = scale * cos` and `beta = scale * sin` the matrix is
    /// `[[alpha, beta, (1 - alpha) * cx - beta * cy], [-beta, alpha, beta * cx + (1 - alpha) * cy]]`.
    pub fn rotation(pivot: Point2d, angle_deg: f64, scale: f64) -> Self {
        let (sin, cos) = sin_cos_deg(angle_deg);
        let alpha = scale * cos;
        let beta = scale * sin;
        Self::new(
            alpha,
            beta,
            (1.0 - alpha) * pivot.x - beta * pivot.y,
            -beta,
            alpha,
            beta * pivot.x + (1.0 - alpha) * pivot.y,
        )
    }

    /// Returns the linear part `[a, b, c, d]`.
    pub fn linear(&self) -> [f64; 4] {
        [self.m[0][0], self.m[0][1], self.m[1][0], self.m[1][1]]
    }

    /// Returns the translation part `(tx, ty)`.
    pub fn offset(&self) -> (f64, f64) {
        (self.m[0][2], self.m[1][2])
    }

    /// Returns the coefficients row by row.
    pub fn rows(&self) -> [[f64; 3]; 2] {
        self.m
    }

    /// Same linear part with the translation replaced.
    pub fn with_translation(&self, tx: f64, ty: f64) -> Self {
        let [a, b, c, d] = self.linear();
        Self::new(a, b, tx, c, d, ty)
    }

    /// Transform that first shifts its input by `(dx, dy)`, then applies `self`.
    pub fn pre_translate(&self, dx: f64, dy: f64) -> Self {
        self.compose(&Self::translation(dx, dy))
    }

    /// Transform that applies `self`, then shifts its output by `(dx, dy)`.
    pub fn post_translate(&self, dx: f64, dy: f64) -> Self {
        let (tx, ty) = self.offset();
        self.with_translation(tx + dx, ty + dy)
    }

    /// Returns `self ∘ inner`: `inner` is applied first.
    pub fn compose(&self, inner: &Affine2) -> Self {
        let [a, b, c, d] = self.linear();
        let (tx, ty) = self.offset();
        let [ia, ib, ic, id] = inner.linear();
        let (itx, ity) = inner.offset();
        Self::new(
            a * ia + b * ic,
            a * ib + b * id,
            a * itx + b * ity + tx,
            c * ia + d * ic,
            c * ib + d * id,
            c * itx + d * ity + ty,
        )
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, c, d] = self.linear();
        a * d - b * c
    }

    /// Inverse transform, or `None` if the linear part is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return None;
        }
        let [a, b, c, d] = self.linear();
        let (tx, ty) = self.offset();
        let inv_det = 1.0 / det;
        let ia = d * inv_det;
        let ib = -b * inv_det;
        let ic = -c * inv_det;
        let id = a * inv_det;
        Some(Self::new(
            ia,
            ib,
            -(ia * tx + ib * ty),
            ic,
            id,
            -(ic * tx + id * ty),
        ))
    }

    pub fn apply(&self, p: Point2d) -> Point2d {
        Point2d::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    /// Maps an integer point and rounds the result to the nearest pixel.
    pub fn apply_i(&self, p: Point2i) -> Point2i {
        let q = self.apply(p.to_f64());
        Point2i::new(round_i32(q.x), round_i32(q.y))
    }

    /// Maps an integer point set, rounding every result.
    pub fn transform_points<const N: usize>(&self, points: [Point2i; N]) -> [Point2i; N] {
        points.map(|p| self.apply_i(p))
    }

    /// Like [`Affine2::apply_i`], but `None` when the result leaves the `i32` range.
    pub fn checked_apply_i(&self, p: Point2i) -> Option<Point2i> {
        let q = self.apply(p.to_f64());
        Some(Point2i::new(checked_round_i32(q.x)?, checked_round_i32(q.y)?))
    }

    /// Maps an integer point set, or `None` if any result leaves the `i32` range.
    pub fn checked_transform_points<const N: usize>(
        &self,
        points: [Point2i; N],
    ) -> Option<[Point2i; N]> {
        let mut out = [Point2i::default(); N];
        for (dst, p) in out.iter_mut().zip(points) {
            *dst = self.checked_apply_i(p)?;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::Affine2;
    use crate::geom::{Point2d, Point2i};

    fn assert_close(a: Point2d, b: Point2d) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn rotation_keeps_pivot_fixed() {
        let pivot = Point2d::new(12.0, -3.5);
        let rot = Affine2::rotation(pivot, 37.0, 1.0);
        assert_close(rot.apply(pivot), pivot);
    }

    #[test]
    fn quarter_turn_moves_right_to_up() {
        let rot = Affine2::rotation(Point2d::new(10.0, 10.0), 90.0, 1.0);
        assert_eq!(rot.apply_i(Point2i::new(15, 10)), Point2i::new(10, 5));
        assert_eq!(rot.apply_i(Point2i::new(10, 14)), Point2i::new(14, 10));
    }

    #[test]
    fn checked_transform_rejects_unrepresentable_results() {
        let shift = Affine2::translation(10.0, 0.0);
        assert_eq!(
            shift.checked_transform_points([Point2i::new(1, 2), Point2i::new(-3, 4)]),
            Some([Point2i::new(11, 2), Point2i::new(7, 4)])
        );
        assert_eq!(shift.checked_apply_i(Point2i::new(i32::MAX - 3, 0)), None);
        assert!(shift
            .checked_transform_points([Point2i::new(0, 0), Point2i::new(i32::MAX, 0)])
            .is_none());
    }

    #[test]
    fn invert_round_trips_and_detects_singular() {
        let rot = Affine2::rotation(Point2d::new(4.0, 7.0), -63.0, 1.5).post_translate(3.0, -2.0);
        let inv = rot.invert().unwrap();
        let p = Point2d::new(-8.25, 19.0);
        assert_close(inv.apply(rot.apply(p)), p);
        assert!(Affine2::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0).invert().is_none());
    }

    #[test]
    fn translation_helpers_build_fresh_values() {
        let rot = Affine2::rotation(Point2d::new(0.0, 0.0), 30.0, 1.0);
        let moved = rot.with_translation(5.0, 6.0);
        assert_eq!(moved.linear(), rot.linear());
        assert_eq!(moved.offset(), (5.0, 6.0));
        assert_eq!(rot.offset(), (0.0, 0.0));

        let p = Point2d::new(2.0, 1.0);
        assert_close(
            rot.pre_translate(3.0, 4.0).apply(p),
            rot.apply(Point2d::new(5.0, 5.0)),
        );
        let q = rot.apply(p);
        assert_close(
            rot.post_translate(-1.0, 2.0).apply(p),
            Point2d::new(q.x - 1.0, q.y + 2.0),
        );
    }
}

//! Integer and floating-point geometry used by the rotation pipeline.
//!
//! Pixel coordinates use `x` to the right and `y` down. `Rect` is half-open:
//! it covers `[x, x + width) x [y, y + height)`.

use core::ops::{Add, Sub};

mod affine;

pub use affine::Affine2;

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, or `None` on overflow.
    pub fn checked_add(self, rhs: Point2i) -> Option<Point2i> {
        Some(Point2i::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Component-wise difference, or `None` on overflow.
    pub fn checked_sub(self, rhs: Point2i) -> Option<Point2i> {
        Some(Point2i::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    pub fn to_f64(self) -> Point2d {
        Point2d {
            x: self.x as f64,
            y: self.y as f64,
        }
    }
}

impl Add for Point2i {
    type Output = Point2i;

    fn add(self, rhs: Point2i) -> Self::Output {
        Point2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2i {
    type Output = Point2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Point2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Floating-point coordinate used for transform arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point2i> for Point2d {
    fn from(p: Point2i) -> Self {
        p.to_f64()
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width x height` image.
    pub fn from_size(width: usize, height: usize) -> Self {
        let clamp = |v: usize| v.min(i32::MAX as usize) as i32;
        Self::new(0, 0, clamp(width), clamp(height))
    }

    /// Smallest rectangle containing every point, counting each point as one pixel.
    ///
    /// The extent is inclusive: points spanning `x0..=x1` give `width = x1 - x0 + 1`.
    /// Returns `None` for an empty slice, or when the size or the exclusive
    /// bottom-right corner does not fit in `i32`.
    pub fn bounding(points: &[Point2i]) -> Option<Rect> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        max_x.checked_add(1)?;
        max_y.checked_add(1)?;
        let width = i32::try_from(i64::from(max_x) - i64::from(min_x) + 1).ok()?;
        let height = i32::try_from(i64::from(max_y) - i64::from(min_y) + 1).ok()?;
        Some(Rect::new(min_x, min_y, width, height))
    }

    /// Top-left corner.
    pub fn tl(&self) -> Point2i {
        Point2i::new(self.x, self.y)
    }

    /// Bottom-right corner (exclusive), saturating at the `i32` range.
    pub fn br(&self) -> Point2i {
        Point2i::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point2i) -> bool {
        let br = self.br();
        p.x >= self.x && p.y >= self.y && p.x < br.x && p.y < br.y
    }

    /// Shrinks the rectangle by `amount` on every side.
    pub fn inset(&self, amount: i32) -> Rect {
        let twice = amount.saturating_mul(2);
        Rect::new(
            self.x.saturating_add(amount),
            self.y.saturating_add(amount),
            self.width.saturating_sub(twice),
            self.height.saturating_sub(twice),
        )
    }

    /// Overlap of two rectangles, or `None` when they do not intersect.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let (a, b) = (self.br(), other.br());
        let x1 = a.x.min(b.x);
        let y1 = a.y.min(b.y);
        let out = Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        (!out.is_empty()).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2i, Rect};

    #[test]
    fn bounding_counts_inclusive_extent() {
        let pts = [
            Point2i::new(3, -2),
            Point2i::new(7, 4),
            Point2i::new(-1, 1),
        ];
        let rect = Rect::bounding(&pts).unwrap();
        assert_eq!(rect, Rect::new(-1, -2, 9, 7));
        assert_eq!(rect.br(), Point2i::new(8, 5));
        assert!(Rect::bounding(&[]).is_none());
    }

    #[test]
    fn single_point_bounds_one_pixel() {
        let rect = Rect::bounding(&[Point2i::new(5, 5)]).unwrap();
        assert_eq!(rect, Rect::new(5, 5, 1, 1));
    }

    #[test]
    fn intersect_clips_and_rejects_disjoint() {
        let a = Rect::new(-5, -5, 10, 10);
        let image = Rect::from_size(8, 8);
        assert_eq!(a.intersect(&image), Some(Rect::new(0, 0, 5, 5)));
        assert_eq!(Rect::new(8, 0, 3, 3).intersect(&image), None);
    }

    #[test]
    fn inset_shrinks_every_side() {
        let rect = Rect::new(2, 3, 10, 6).inset(1);
        assert_eq!(rect, Rect::new(3, 4, 8, 4));
        assert!(Rect::new(0, 0, 2, 2).inset(1).is_empty());
        assert!(rect.contains(Point2i::new(3, 4)));
        assert!(!rect.contains(rect.br()));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert!(Rect::bounding(&[Point2i::new(i32::MIN, 0), Point2i::new(i32::MAX - 1, 0)]).is_none());
        assert!(Rect::bounding(&[Point2i::new(i32::MAX, 0)]).is_none());
        let edge = Rect::bounding(&[Point2i::new(i32::MAX - 1, i32::MIN)]).unwrap();
        assert_eq!(edge.br(), Point2i::new(i32::MAX, i32::MIN + 1));

        let far = Rect::new(i32::MAX - 2, 0, 10, 10);
        assert_eq!(far.br().x, i32::MAX);
        assert!(far.intersect(&Rect::from_size(100, 100)).is_none());
        assert!(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
            .intersect(&Rect::from_size(100, 100))
            .is_none());
        assert_eq!(Point2i::new(i32::MAX, 0).checked_add(Point2i::new(1, 0)), None);
        assert_eq!(Point2i::new(i32::MIN, 0).checked_sub(Point2i::new(0, 1)), None);
    }
}
